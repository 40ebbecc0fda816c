use error_stack::Result;

use crate::error::ClientError;

/// Check that an identifier contains no lowercase characters.
///
/// The backend stores schema, table, and column names uppercase and rejects
/// identifiers that are not. The check runs before any request is sent.
/// Empty identifiers pass, since optional filters are sent empty.
pub fn check_upper_case(identifier: &str) -> Result<(), ClientError> {
    if identifier.chars().any(|c| c.is_lowercase()) {
        return Err(ClientError::validation_error(&format!(
            "identifier '{}' must not contain lowercase characters",
            identifier
        )));
    }
    Ok(())
}
