// Roster Use Case - builds employees from `NAME:ID:MONTHLY_COST` specs

use crate::domain::error::{DomainError, Result};
use crate::domain::{Employee, EmployeeId, Money};
use crate::error::AppError;
use std::sync::Arc;

/// Separator between the fields of a member spec
pub const MEMBER_SPEC_SEPARATOR: char = ':';

/// Parse a single member spec (e.g. `Kaio:1:1000`).
///
/// Fields are split from the right, so the name may itself contain `:`.
/// Only the notation is checked, plus finiteness of the cost; negative
/// costs and any id are accepted as-is.
pub fn parse_member(spec: &str) -> Result<Employee> {
    let invalid = |reason: &str| DomainError::InvalidMemberSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = spec.rsplitn(3, MEMBER_SPEC_SEPARATOR);
    let (cost, id, name) = match (fields.next(), fields.next(), fields.next()) {
        (Some(cost), Some(id), Some(name)) => (cost.trim(), id.trim(), name.trim()),
        _ => return Err(invalid("expected NAME:ID:MONTHLY_COST")),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }

    let id: EmployeeId = id
        .parse()
        .map_err(|_| invalid(&format!("id '{}' is not an integer", id)))?;

    let monthly_cost: Money = cost
        .parse()
        .map_err(|_| invalid(&format!("monthly cost '{}' is not a number", cost)))?;

    if !monthly_cost.is_finite() {
        return Err(invalid(&format!(
            "monthly cost '{}' is not a finite number",
            cost
        )));
    }

    Ok(Employee::new(name, id, monthly_cost))
}

/// Parse a standalone monthly cost (e.g. a `--monthly-cost` argument).
///
/// NaN and infinities are rejected so every cost stays well-defined.
pub fn parse_monthly_cost(raw: &str) -> crate::error::Result<Money> {
    let raw = raw.trim();
    let monthly_cost: Money = raw.parse().map_err(|_| {
        AppError::Validation(format!("monthly cost '{}' is not a number", raw))
    })?;

    if !monthly_cost.is_finite() {
        return Err(AppError::Validation(format!(
            "monthly cost '{}' is not a finite number",
            raw
        )));
    }

    Ok(monthly_cost)
}

/// Parse a roster in order, stopping at the first invalid spec
pub fn parse_roster<I, S>(specs: I) -> Result<Vec<Arc<Employee>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    specs
        .into_iter()
        .map(|spec| parse_member(spec.as_ref()).map(Arc::new))
        .collect()
}

#[path = "roster_test.rs"]
mod roster_test;
