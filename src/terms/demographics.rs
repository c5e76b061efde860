//! Country allow-list and life expectancy assumptions
//!
//! Life expectancy caps the age at which a loan of a given period may still
//! be extended: an applicant must be expected to outlive the loan.

use serde::{Deserialize, Serialize};

/// Country in which a loan application is filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Estonia,
    Latvia,
    Lithuania,
}

impl Country {
    /// Parse a country from its exact English name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Estonia" => Some(Country::Estonia),
            "Latvia" => Some(Country::Latvia),
            "Lithuania" => Some(Country::Lithuania),
            _ => None,
        }
    }

    /// Get the string representation matching the intake format
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::Latvia => "Latvia",
            Country::Lithuania => "Lithuania",
        }
    }
}

/// Per-country life expectancy table with a fallback for missing entries
#[derive(Debug, Clone)]
pub struct LifeExpectancy {
    /// Expected lifetime in years by country
    entries: Vec<(Country, i32)>,

    /// Fallback used when a country has no entry in the table
    default_years: i32,
}

impl LifeExpectancy {
    /// Built-in table for the supported Baltic markets
    pub fn baltic_defaults() -> Self {
        Self {
            entries: vec![
                (Country::Estonia, 78),
                (Country::Latvia, 75),
                (Country::Lithuania, 76),
            ],
            default_years: 82,
        }
    }

    /// Create a custom table
    pub fn new(entries: Vec<(Country, i32)>, default_years: i32) -> Self {
        Self { entries, default_years }
    }

    /// Expected lifetime in years for the given country
    ///
    /// Falls back to the table default when the country has no entry.
    pub fn for_country(&self, country: Country) -> i32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == country)
            .map(|(_, years)| *years)
            .unwrap_or(self.default_years)
    }
}
