//! Sign-up password policy.

use sharebox_core::error::AppError;

/// Checks a candidate password against the configured minimum length.
pub fn check_password_policy(password: &str, min_length: usize) -> Result<(), AppError> {
    if password.chars().count() < min_length {
        return Err(AppError::validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}
