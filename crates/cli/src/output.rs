//! Terminal rendering of cost reports

use colored::Colorize;
use orgcost_core::application::{CostLine, CostReport};
use orgcost_core::domain::Money;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Annual")]
    annual: String,
}

impl LineRow {
    fn new(line: &CostLine, currency: &str) -> Self {
        Self {
            name: line.name.clone(),
            id: line.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            monthly: format_money(line.monthly_cost, currency),
            annual: format_money(line.annual_cost, currency),
        }
    }
}

pub fn format_money(amount: Money, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

pub fn print_report(kind: &str, report: &CostReport, currency: &str) {
    println!("{}", format!("{}: {}", kind, report.name).cyan().bold());
    println!();

    if report.lines.is_empty() {
        println!("  {}", "No staff".yellow());
    } else {
        let rows: Vec<LineRow> = report
            .lines
            .iter()
            .map(|line| LineRow::new(line, currency))
            .collect();
        println!("{}", Table::new(rows));
    }

    println!();
    println!("  {} {}", "Head count:".bold(), report.head_count);
    println!(
        "  {} {}",
        "Monthly cost:".bold(),
        format_money(report.monthly_cost, currency)
    );
    println!(
        "  {} {}",
        "Annual cost:".bold(),
        format_money(report.annual_cost, currency).green()
    );
}

pub fn print_summary(line: &CostLine, currency: &str) {
    println!("{}", format!("Party: {}", line.name).cyan().bold());
    println!();
    println!("{}", Table::new(vec![LineRow::new(line, currency)]));
}
