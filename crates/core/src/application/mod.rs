// Application Layer - Use Cases over the domain model

pub mod report;
pub mod roster;

// Re-exports
pub use report::{CostLine, CostReport, CostReportService};
pub use roster::{parse_member, parse_monthly_cost, parse_roster};
