// Employee Domain Model

use crate::domain::party::{Money, Party};

/// Employee ID (caller supplied, uniqueness not enforced)
pub type EmployeeId = i64;

/// Individual staff member with a fixed monthly cost
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    id: EmployeeId,
    monthly_cost: Money,
}

impl Employee {
    /// Create a new Employee
    ///
    /// No validation is performed: negative costs and empty names are
    /// accepted as-is.
    pub fn new(name: impl Into<String>, id: EmployeeId, monthly_cost: Money) -> Self {
        Self {
            name: name.into(),
            id,
            monthly_cost,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }
}

impl Party for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_cost(&self) -> Money {
        self.monthly_cost
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.name, self.id)
    }
}
