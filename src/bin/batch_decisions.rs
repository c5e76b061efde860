//! Run decisions for a whole applications file
//!
//! Reads an intake CSV, decides every application in parallel, and writes
//! one outcome row per application for comparison with the upstream system.

use loan_engine::{application::load_applications, BatchRunner};
use std::env;
use std::time::Instant;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "applications.csv".to_string());
    let output = args.next().unwrap_or_else(|| "decisions.csv".to_string());

    let start = Instant::now();
    println!("Loading applications from {input}...");

    let applications = load_applications(&input).expect("Failed to load applications");
    println!(
        "Loaded {} applications in {:?}",
        applications.len(),
        start.elapsed()
    );

    println!("Running decisions...");
    let decide_start = Instant::now();

    let runner = BatchRunner::new();
    let rows = runner.run_batch(&applications);

    println!("Decisions complete in {:?}", decide_start.elapsed());

    let approved = rows.iter().filter(|row| row.approved_amount.is_some()).count();
    println!("  Approved: {}", approved);
    println!("  Rejected: {}", rows.len() - approved);

    let mut writer = csv::Writer::from_path(&output).expect("Unable to create output file");
    for row in &rows {
        writer.serialize(row).expect("Failed to write decision row");
    }
    writer.flush().expect("Failed to flush output file");

    println!("Full results written to: {output}");
}
