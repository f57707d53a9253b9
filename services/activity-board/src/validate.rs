//! Local checks on the email field

use crate::error::EmailError;

/// Check the raw input and return the trimmed email.
///
/// Only presence and an `@` are required; the server decides the rest.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !email.contains('@') {
        return Err(EmailError::MissingAt);
    }
    Ok(email)
}
