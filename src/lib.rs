//! Loan Engine - pre-approval decision calculator for consumer loans
//!
//! This library provides:
//! - National ID code decoding (birth date, credit segment, checksum)
//! - Age eligibility rules backed by per-country life expectancy tables
//! - Maximum amount / period search against the credit score threshold
//! - Batch decisioning over application files

pub mod application;
pub mod batch;
pub mod decision;
pub mod identity;
pub mod terms;

// Re-export commonly used types
pub use application::LoanApplication;
pub use batch::{BatchRunner, DecisionRow};
pub use decision::{Clock, Decision, DecisionEngine, DecisionError, SystemClock};
pub use identity::{ChecksumValidator, CodeValidator};
pub use terms::{Country, LifeExpectancy};
