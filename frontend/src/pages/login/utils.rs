use crate::api::ApiError;

pub const LOGIN_FAILED: &str = "Login failed";

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

/// Backend-supplied messages are shown as-is; transport and unparseable
/// failures collapse to a generic message.
pub fn login_error_message(error: &ApiError) -> String {
    match error.code.as_str() {
        "API_ERROR" | "VALIDATION_ERROR" if !error.error.trim().is_empty() => error.error.clone(),
        _ => LOGIN_FAILED.to_string(),
    }
}

pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}
