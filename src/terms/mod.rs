//! Lending terms: process-wide loan limits and per-country demographic assumptions

mod demographics;

pub use demographics::{Country, LifeExpectancy};

/// Smallest loan amount the engine will offer, in euros
pub const MINIMUM_LOAN_AMOUNT: u32 = 2_000;

/// Largest loan amount the engine will offer, in euros
pub const MAXIMUM_LOAN_AMOUNT: u32 = 10_000;

/// Granularity of the amount search
pub const AMOUNT_STEP: u32 = 100;

/// Shortest loan period, in months
pub const MINIMUM_LOAN_PERIOD: u32 = 12;

/// Longest loan period, in months
pub const MAXIMUM_LOAN_PERIOD: u32 = 48;

/// Credit score at or above which an amount/period combination is approved
pub const CREDIT_SCORE_THRESHOLD: f64 = 0.1;

/// Credit modifier for segment 1 (ID tail 0..=3000)
pub const SEGMENT_1_CREDIT_MODIFIER: u32 = 100;

/// Credit modifier for segment 2 (ID tail 3001..=6000)
pub const SEGMENT_2_CREDIT_MODIFIER: u32 = 300;

/// Credit modifier for segment 3 (ID tail 6001..=9999)
pub const SEGMENT_3_CREDIT_MODIFIER: u32 = 1_000;

/// Youngest age eligible for any loan
pub const MINIMUM_AGE: i32 = 18;
