use error_stack::Result;
use http::Uri;

use crate::error::{ClientError, ClientErrorResultExt};

/// Environment variable holding the service base URL.
pub const API_URL_ENV: &str = "CHAINTABLE_API_URL";

/// Environment variable holding the bearer access token.
///
/// The name matches the variable used by existing deployments.
pub const ACCESS_TOKEN_ENV: &str = "accessToken";

/// Client configuration shared by the discovery and DDL clients.
///
/// Built once from [`ClientOptions`] and threaded through every client, so
/// no call reads the process environment on its own.
#[derive(Debug, Clone)]
pub struct ClientConfiguration {
    pub api_url: Uri,
    pub access_token: String,
    pub origin_app: Option<String>,
}

/// Options used to build a [`ClientConfiguration`].
#[derive(Debug, Default)]
pub struct ClientOptions {
    /// Base URL of the service, e.g. `https://api.chaintable.dev`.
    pub api_url: Option<String>,
    /// Bearer token used to authenticate discovery requests.
    pub access_token: Option<String>,
    /// Value of the `X-Origin-App` header sent with DDL requests.
    pub origin_app: Option<String>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var(API_URL_ENV).ok(),
            access_token: std::env::var(ACCESS_TOKEN_ENV).ok(),
            origin_app: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn with_origin_app(mut self, origin_app: impl Into<String>) -> Self {
        self.origin_app = Some(origin_app.into());
        self
    }

    /// Merge two sets of options, with `self` taking precedence.
    pub fn merge(self, other: ClientOptions) -> Self {
        Self {
            api_url: self.api_url.or(other.api_url),
            access_token: self.access_token.or(other.access_token),
            origin_app: self.origin_app.or(other.origin_app),
        }
    }

    pub fn to_configuration(self) -> Result<ClientConfiguration, ClientError> {
        let api_url = self
            .api_url
            .configuration_error("missing api url")?
            .parse::<Uri>()
            .configuration_error("malformed api url")?;

        let access_token = self
            .access_token
            .configuration_error("Access token is not set")?;

        Ok(ClientConfiguration {
            api_url,
            access_token,
            origin_app: self.origin_app,
        })
    }
}
