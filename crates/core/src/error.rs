// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_converts_into_app_error() {
        let err: AppError = DomainError::InvalidMemberSpec {
            spec: "Kaio".to_string(),
            reason: "expected NAME:ID:MONTHLY_COST".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Domain(_)));
        assert!(err.to_string().starts_with("Domain error: "));
        assert!(err.to_string().contains("Kaio"));
    }
}
