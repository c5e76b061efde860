//! Loan decisioning: the approval engine, its error taxonomy, and the clock port

mod engine;

pub use engine::{credit_score, DecisionEngine};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approved loan terms
///
/// The amount is the maximum clearing the credit score threshold at the
/// approved period; the period is the requested one, or the smallest longer
/// period that admits an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Approved loan amount in euros
    pub approved_amount: u32,

    /// Approved loan period in months
    pub approved_period: u32,
}

/// Reason a loan application was rejected
///
/// Every rejection is terminal for the call: the first violated rule wins
/// and nothing is retried. Each variant carries a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    /// Checksum validation failed, or the code does not decode to a birth date
    #[error("invalid personal ID code: {0}")]
    InvalidPersonalCode(String),

    #[error("invalid loan amount: {0} is outside the 2000..=10000 euro range")]
    InvalidLoanAmount(u32),

    #[error("invalid loan period: {0} is outside the 12..=48 month range")]
    InvalidLoanPeriod(u32),

    #[error("invalid country: {0} (supported: Estonia, Latvia, Lithuania)")]
    InvalidCountry(String),

    /// Applicant is underage, or too old for the requested period
    #[error("{0}")]
    InvalidAge(String),

    /// Existing debt, or no amount/period combination clears the threshold
    #[error("{0}")]
    NoValidLoan(String),
}

/// Source of the current date for age computation
///
/// Injected so decisions are a pure function of their inputs and the clock,
/// and so tests can pin the date.
pub trait Clock {
    /// Current date
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
