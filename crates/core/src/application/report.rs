// Cost Report Use Case

use crate::domain::{Department, Employee, EmployeeId, Money, Party};
use tracing::debug;

/// One row of a cost report
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    pub name: String,
    /// `None` for parties without an employee id
    pub id: Option<EmployeeId>,
    pub monthly_cost: Money,
    pub annual_cost: Money,
}

impl CostLine {
    fn for_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            id: Some(employee.id()),
            monthly_cost: employee.monthly_cost(),
            annual_cost: employee.annual_cost(),
        }
    }
}

/// Cost breakdown of a party and its members
#[derive(Debug, Clone, PartialEq)]
pub struct CostReport {
    pub name: String,
    pub head_count: usize,
    pub monthly_cost: Money,
    pub annual_cost: Money,
    /// Roster order
    pub lines: Vec<CostLine>,
}

/// Builds cost reports from domain entities (stateless)
#[derive(Debug, Default, Clone, Copy)]
pub struct CostReportService;

impl CostReportService {
    pub fn new() -> Self {
        Self
    }

    /// Summary of any party, without member breakdown
    pub fn party_summary(&self, party: &dyn Party) -> CostLine {
        let line = CostLine {
            name: party.name().to_string(),
            id: None,
            monthly_cost: party.monthly_cost(),
            annual_cost: party.annual_cost(),
        };

        debug!(
            party = %line.name,
            monthly_cost = line.monthly_cost,
            annual_cost = line.annual_cost,
            "Party summary computed"
        );

        line
    }

    /// Report for a single employee (head count 1)
    pub fn employee_report(&self, employee: &Employee) -> CostReport {
        let line = CostLine::for_employee(employee);

        debug!(
            employee = %line.name,
            id = employee.id(),
            monthly_cost = line.monthly_cost,
            "Employee report computed"
        );

        CostReport {
            name: line.name.clone(),
            head_count: 1,
            monthly_cost: line.monthly_cost,
            annual_cost: line.annual_cost,
            lines: vec![line],
        }
    }

    /// Report for a department, one line per staff entry
    pub fn department_report(&self, department: &Department) -> CostReport {
        let lines: Vec<CostLine> = department
            .staff()
            .iter()
            .map(|employee| CostLine::for_employee(employee))
            .collect();

        let report = CostReport {
            name: department.name().to_string(),
            head_count: department.head_count(),
            monthly_cost: department.monthly_cost(),
            annual_cost: department.annual_cost(),
            lines,
        };

        if department.is_empty() {
            debug!(department = %report.name, "Department has no staff, costs are zero");
        }

        debug!(
            department = %report.name,
            head_count = report.head_count,
            monthly_cost = report.monthly_cost,
            annual_cost = report.annual_cost,
            "Department report computed"
        );

        report
    }
}
