// Department Domain Model

use crate::domain::employee::Employee;
use crate::domain::party::{Money, Party};
use std::sync::Arc;

/// Aggregation of employees with derived total costs.
///
/// The roster is an ordered, immutable snapshot. Employees are shared
/// (`Arc`), the sequence holding them is owned by the department.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    name: String,
    staff: Vec<Arc<Employee>>,
}

impl Department {
    /// Create a department from a copy of `staff` (order and duplicates kept)
    pub fn new(name: impl Into<String>, staff: &[Arc<Employee>]) -> Self {
        Self {
            name: name.into(),
            staff: staff.to_vec(),
        }
    }

    /// Fresh copy of the roster; mutating it does not affect the department
    pub fn staff(&self) -> Vec<Arc<Employee>> {
        self.staff.clone()
    }

    pub fn head_count(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}

impl Party for Department {
    fn name(&self) -> &str {
        &self.name
    }

    /// Sum of staff monthly costs, zero for an empty department
    fn monthly_cost(&self) -> Money {
        self.staff
            .iter()
            .fold(0.0, |total, employee| total + employee.monthly_cost())
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} staff)", self.name, self.staff.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Arc<Employee>> {
        vec![
            Arc::new(Employee::new("Kaio", 1, 1000.0)),
            Arc::new(Employee::new("Enzo", 1, 1500.0)),
        ]
    }

    #[test]
    fn test_department_has_name() {
        let department = Department::new("Engineering", &[]);
        assert_eq!(department.name(), "Engineering");
    }

    #[test]
    fn test_department_has_staff() {
        let staff = staff();
        let department = Department::new("Engineering", &staff);
        assert_eq!(department.staff(), staff);
    }

    #[test]
    fn test_department_monthly_cost() {
        let department = Department::new("Engineering", &staff());
        assert_eq!(department.monthly_cost(), 2500.0);
    }

    #[test]
    fn test_department_head_count() {
        let department = Department::new("Engineering", &staff());
        assert_eq!(department.head_count(), 2);
        assert!(!department.is_empty());
    }

    #[test]
    fn test_department_annual_cost() {
        let department = Department::new("Engineering", &staff());
        assert_eq!(department.annual_cost(), 30000.0);
    }

    #[test]
    fn test_empty_department_costs_nothing() {
        let department = Department::new("Ghost", &[]);
        assert!(department.is_empty());
        assert_eq!(department.head_count(), 0);
        assert_eq!(department.monthly_cost(), 0.0);
        assert_eq!(department.annual_cost(), 0.0);
    }

    #[test]
    fn test_department_shares_employees() {
        let staff = staff();
        let department = Department::new("Engineering", &staff);
        assert!(Arc::ptr_eq(&department.staff()[0], &staff[0]));
    }

    #[test]
    fn test_department_keeps_duplicates_in_order() {
        let kaio = Arc::new(Employee::new("Kaio", 1, 1000.0));
        let enzo = Arc::new(Employee::new("Enzo", 2, 1500.0));
        let department = Department::new(
            "Engineering",
            &[kaio.clone(), enzo.clone(), kaio.clone()],
        );

        let names: Vec<_> = department.staff().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["Kaio", "Enzo", "Kaio"]);
        assert_eq!(department.monthly_cost(), 3500.0);
    }

    #[test]
    fn test_department_display() {
        let department = Department::new("Engineering", &staff());
        assert_eq!(department.to_string(), "Engineering (2 staff)");
    }
}
