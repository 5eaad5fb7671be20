// Party Domain Model

/// Monetary amount (single, unspecified currency)
pub type Money = f64;

/// Annual cost is always derived from monthly cost
pub const MONTHS_PER_YEAR: u32 = 12;

/// Any named entity that carries a recurring cost.
///
/// `monthly_cost` is mandatory for every implementor, so `annual_cost`
/// is always well-defined. Values are recomputed on every call.
pub trait Party: Send + Sync {
    fn name(&self) -> &str;

    fn monthly_cost(&self) -> Money;

    fn annual_cost(&self) -> Money {
        self.monthly_cost() * Money::from(MONTHS_PER_YEAR)
    }
}

/// Party with a directly assigned monthly cost
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCostParty {
    name: String,
    monthly_cost: Money,
}

impl FixedCostParty {
    pub fn new(name: impl Into<String>, monthly_cost: Money) -> Self {
        Self {
            name: name.into(),
            monthly_cost,
        }
    }
}

impl Party for FixedCostParty {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_cost(&self) -> Money {
        self.monthly_cost
    }
}

impl std::fmt::Display for FixedCostParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/month)", self.name, self.monthly_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_keeps_name() {
        let party = FixedCostParty::new("Party", 0.0);
        assert_eq!(party.name(), "Party");
    }

    #[test]
    fn test_party_annual_cost() {
        let party = FixedCostParty::new("Party", 1000.0);
        assert_eq!(party.monthly_cost(), 1000.0);
        assert_eq!(party.annual_cost(), 12000.0);
    }

    #[test]
    fn test_party_accepts_empty_name() {
        let party = FixedCostParty::new("", 1.5);
        assert_eq!(party.name(), "");
        assert_eq!(party.annual_cost(), 18.0);
    }

    #[test]
    fn test_party_display() {
        let party = FixedCostParty::new("Vendor", 250.0);
        assert_eq!(party.to_string(), "Vendor (250/month)");
    }
}
