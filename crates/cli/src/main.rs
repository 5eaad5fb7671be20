//! Orgcost CLI - Cost breakdown of employees and departments

mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orgcost_core::application::{parse_monthly_cost, parse_roster, CostReportService};
use orgcost_core::domain::{Department, Employee, EmployeeId, FixedCostParty, Money};
use tracing::info;

#[derive(Parser)]
#[command(name = "orgcost")]
#[command(about = "Organizational cost calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Label appended to monetary amounts (display only, no conversion)
    #[arg(long, global = true, env = "ORGCOST_CURRENCY_LABEL", default_value = "")]
    currency_label: String,

    /// Log format: "pretty" or "json"
    #[arg(long, global = true, env = "ORGCOST_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cost of a single employee
    Employee {
        /// Employee name
        #[arg(short, long)]
        name: String,

        /// Employee ID
        #[arg(short, long, allow_negative_numbers = true)]
        id: EmployeeId,

        /// Monthly cost
        #[arg(short, long, allow_negative_numbers = true, value_parser = monthly_cost_arg)]
        monthly_cost: Money,
    },

    /// Show the aggregated cost of a department
    Department {
        /// Department name
        #[arg(short, long)]
        name: String,

        /// Staff member as NAME:ID:MONTHLY_COST (repeatable, order kept)
        #[arg(short = 'm', long = "member")]
        members: Vec<String>,
    },

    /// Show the cost of a party with a fixed monthly cost
    Party {
        /// Party name
        #[arg(short, long)]
        name: String,

        /// Monthly cost
        #[arg(short, long, allow_negative_numbers = true, value_parser = monthly_cost_arg)]
        monthly_cost: Money,
    },
}

/// Clap adapter for finite monthly costs
fn monthly_cost_arg(raw: &str) -> std::result::Result<Money, String> {
    parse_monthly_cost(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_format)?;
    info!("Orgcost v{} starting...", orgcost_core::VERSION);

    let service = CostReportService::new();
    let currency = cli.currency_label.as_str();

    match cli.command {
        Commands::Employee {
            name,
            id,
            monthly_cost,
        } => {
            let employee = Employee::new(name, id, monthly_cost);
            let report = service.employee_report(&employee);
            output::print_report("Employee", &report, currency);
        }

        Commands::Department { name, members } => {
            let staff = parse_roster(&members)
                .map_err(orgcost_core::AppError::from)
                .context("Invalid --member value")?;

            let department = Department::new(name, &staff);
            let report = service.department_report(&department);
            output::print_report("Department", &report, currency);
        }

        Commands::Party { name, monthly_cost } => {
            let party = FixedCostParty::new(name, monthly_cost);
            let summary = service.party_summary(&party);
            output::print_summary(&summary, currency);
        }
    }

    Ok(())
}
