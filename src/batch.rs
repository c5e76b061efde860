//! Batch decisioning over many applications
//!
//! Wraps a configured engine and fans applications out with rayon. The
//! engine is pure, so per-application decisions need no coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::application::LoanApplication;
use crate::decision::{Clock, DecisionEngine, SystemClock};
use crate::identity::{ChecksumValidator, CodeValidator};

/// Flat outcome row for one application, suitable for CSV or JSON export
///
/// Exactly one side is populated: an approved row carries amount and period
/// with no error message, a rejected row carries only the error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRow {
    /// National ID code the application was filed under
    pub personal_code: String,

    /// Requested loan amount in euros
    pub requested_amount: u32,

    /// Requested loan period in months
    pub requested_period: u32,

    /// Country the application was filed in
    pub country: String,

    /// Approved loan amount, absent on rejection
    pub approved_amount: Option<u32>,

    /// Approved loan period, absent on rejection
    pub approved_period: Option<u32>,

    /// Rejection reason, absent on approval
    pub error_message: Option<String>,
}

/// Batch runner over a configured decision engine
pub struct BatchRunner<V = ChecksumValidator, C = SystemClock> {
    engine: DecisionEngine<V, C>,
}

impl BatchRunner {
    /// Create a runner around the default engine
    pub fn new() -> Self {
        Self {
            engine: DecisionEngine::new(),
        }
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CodeValidator, C: Clock> BatchRunner<V, C> {
    /// Create a runner around a custom engine
    pub fn with_engine(engine: DecisionEngine<V, C>) -> Self {
        Self { engine }
    }

    /// Decide a single application
    pub fn decide(&self, application: &LoanApplication) -> DecisionRow {
        let outcome = self.engine.calculate_approved_loan(
            &application.personal_code,
            application.requested_amount,
            application.requested_period,
            &application.country,
        );

        let (approved_amount, approved_period, error_message) = match outcome {
            Ok(decision) => (
                Some(decision.approved_amount),
                Some(decision.approved_period),
                None,
            ),
            Err(error) => (None, None, Some(error.to_string())),
        };

        DecisionRow {
            personal_code: application.personal_code.clone(),
            requested_amount: application.requested_amount,
            requested_period: application.requested_period,
            country: application.country.clone(),
            approved_amount,
            approved_period,
            error_message,
        }
    }
}

impl<V, C> BatchRunner<V, C>
where
    V: CodeValidator + Sync,
    C: Clock + Sync,
{
    /// Decide all applications in parallel, preserving input order
    pub fn run_batch(&self, applications: &[LoanApplication]) -> Vec<DecisionRow> {
        applications
            .par_iter()
            .map(|application| self.decide(application))
            .collect()
    }
}
