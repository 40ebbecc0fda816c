//! Discovery client for the chaintable service.
//!
//! Translates listing intents (schemas, tables, columns, indexes, keys,
//! blockchains, views) into GET requests against the discovery endpoints and
//! returns the raw response body.

mod client;

pub use self::client::DiscoveryClient;
