use std::fmt;

use error_stack::{report, Context, Report, Result, ResultExt};

/// Client error.
///
/// Operations return `ClientError::Validation` when an argument is rejected
/// before any request is sent, `ClientError::Configuration` for missing or
/// malformed client configuration, `ClientError::Request` when building or
/// performing the HTTP exchange fails, and `ClientError::Server` when the
/// server rejects an otherwise well-formed request.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error. Detected when building the client.
    Configuration,
    /// Argument validation error. No request is sent.
    Validation,
    /// Request construction, transport, or body-read error.
    Request,
    /// The server rejected the request.
    Server,
}

impl Context for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Configuration => f.write_str("client configuration error"),
            ClientError::Validation => f.write_str("argument validation error"),
            ClientError::Request => f.write_str("request error"),
            ClientError::Server => f.write_str("server rejected the request"),
        }
    }
}

impl ClientError {
    pub fn configuration_error(reason: &str) -> Report<ClientError> {
        report!(ClientError::Configuration).attach_printable(reason.to_string())
    }

    pub fn validation_error(reason: &str) -> Report<ClientError> {
        report!(ClientError::Validation).attach_printable(reason.to_string())
    }

    pub fn request_error(reason: &str) -> Report<ClientError> {
        report!(ClientError::Request).attach_printable(reason.to_string())
    }

    pub fn server_error(reason: &str) -> Report<ClientError> {
        report!(ClientError::Server).attach_printable(reason.to_string())
    }
}

pub trait ClientErrorResultExt {
    type Ok;

    fn configuration_error(self, reason: &str) -> Result<Self::Ok, ClientError>;
    fn request_error(self, reason: &str) -> Result<Self::Ok, ClientError>;
}

impl<T, C> ClientErrorResultExt for core::result::Result<T, C>
where
    C: Context,
{
    type Ok = T;

    fn configuration_error(self, reason: &str) -> Result<T, ClientError> {
        self.change_context(ClientError::Configuration)
            .attach_printable(reason.to_string())
    }

    fn request_error(self, reason: &str) -> Result<T, ClientError> {
        self.change_context(ClientError::Request)
            .attach_printable(reason.to_string())
    }
}

impl<T> ClientErrorResultExt for Option<T> {
    type Ok = T;

    fn configuration_error(self, reason: &str) -> Result<T, ClientError> {
        self.ok_or_else(|| ClientError::configuration_error(reason))
    }

    fn request_error(self, reason: &str) -> Result<T, ClientError> {
        self.ok_or_else(|| ClientError::request_error(reason))
    }
}
