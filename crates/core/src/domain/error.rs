// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid member spec '{spec}': {reason}")]
    InvalidMemberSpec { spec: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
