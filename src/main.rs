//! Loan Engine CLI
//!
//! Command-line interface for decisioning a single loan application

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use loan_engine::DecisionEngine;

/// Calculate a loan pre-approval decision for one applicant
#[derive(Debug, Parser)]
#[command(name = "loan-engine", version, about)]
struct Cli {
    /// National ID code of the applicant
    #[arg(long)]
    personal_code: String,

    /// Requested loan amount in euros
    #[arg(long)]
    amount: u32,

    /// Requested loan period in months
    #[arg(long)]
    period: u32,

    /// Country the application is filed in
    #[arg(long, default_value = "Estonia")]
    country: String,

    /// Emit the decision as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let engine = DecisionEngine::new();

    let outcome =
        engine.calculate_approved_loan(&cli.personal_code, cli.amount, cli.period, &cli.country);

    if cli.json {
        let body = match &outcome {
            Ok(decision) => json!({
                "approved_amount": decision.approved_amount,
                "approved_period": decision.approved_period,
            }),
            Err(error) => json!({ "error_message": error.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match outcome {
        Ok(decision) => {
            println!(
                "Approved: {} euros over {} months",
                decision.approved_amount, decision.approved_period
            );
        }
        Err(error) => {
            println!("Rejected: {error}");
        }
    }

    Ok(())
}
