use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),
}

impl From<FormError> for ApiError {
    fn from(error: FormError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Trimmed value of a required text field.
pub fn required(label: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(label))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("Full Name", "  Jane Doe "), Ok("Jane Doe".to_string()));
        assert_eq!(required("Full Name", "   "), Err(FormError::Missing("Full Name")));
    }

    #[test]
    fn form_errors_become_validation_api_errors() {
        let error: ApiError = FormError::InvalidDate("Date").into();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.error, "Date must be a date in YYYY-MM-DD format");
    }
}
