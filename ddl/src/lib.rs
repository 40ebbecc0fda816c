//! SQL DDL client for the chaintable service.
//!
//! Submits CREATE, ALTER, and DROP statements to the DDL endpoint together
//! with the authorization biscuits and, for table creation, the
//! access-control configuration clause.

mod client;
mod request;

pub use self::client::DdlClient;
pub use self::request::{AccessType, DdlRequest};
