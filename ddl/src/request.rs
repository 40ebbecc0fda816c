use std::fmt;
use std::str::FromStr;

use chaintable_common::ClientError;
use error_stack::Report;
use serde::{Deserialize, Serialize};

/// Body of a DDL request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DdlRequest {
    pub biscuits: Vec<String>,
    pub sql_text: String,
}

/// Table access policy.
///
/// Controls table visibility and encryption on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Readable by anyone.
    Public,
    /// Readable only with a matching biscuit.
    Permissioned,
    /// Permissioned, with rows encrypted at rest.
    Encrypted,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "public",
            AccessType::Permissioned => "permissioned",
            AccessType::Encrypted => "encrypted",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = Report<ClientError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessType::Public),
            "permissioned" => Ok(AccessType::Permissioned),
            "encrypted" => Ok(AccessType::Encrypted),
            _ => Err(ClientError::validation_error(&format!(
                "invalid access type '{}'",
                s
            ))),
        }
    }
}
