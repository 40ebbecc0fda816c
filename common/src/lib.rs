mod configuration;
mod endpoint;
mod error;
mod ident;

pub use self::configuration::{ClientConfiguration, ClientOptions, ACCESS_TOKEN_ENV, API_URL_ENV};
pub use self::endpoint::DiscoverResource;
pub use self::error::{ClientError, ClientErrorResultExt};
pub use self::ident::check_upper_case;
