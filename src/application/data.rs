//! Loan application record matching the intake format

use serde::{Deserialize, Serialize};

/// A single loan application as received from intake
///
/// Field values are taken as-is; all validation happens in the decision
/// engine so a malformed application still produces a typed rejection
/// rather than being dropped at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    /// National ID code of the applicant
    #[serde(rename = "PersonalCode")]
    pub personal_code: String,

    /// Requested loan amount in euros
    #[serde(rename = "Amount")]
    pub requested_amount: u32,

    /// Requested loan period in months
    #[serde(rename = "Period")]
    pub requested_period: u32,

    /// Country the application was filed in
    #[serde(rename = "Country")]
    pub country: String,
}

impl LoanApplication {
    /// Create an application record
    pub fn new(
        personal_code: impl Into<String>,
        requested_amount: u32,
        requested_period: u32,
        country: impl Into<String>,
    ) -> Self {
        Self {
            personal_code: personal_code.into(),
            requested_amount,
            requested_period,
            country: country.into(),
        }
    }
}
