// Domain Layer - Cost-bearing entities

pub mod department;
pub mod employee;
pub mod error;
pub mod party;

// Re-exports
pub use department::Department;
pub use employee::{Employee, EmployeeId};
pub use error::DomainError;
pub use party::{FixedCostParty, Money, Party, MONTHS_PER_YEAR};
