//! Core approval engine: input verification, age eligibility, amount/period search

use log::debug;

use super::{Clock, Decision, DecisionError, SystemClock};
use crate::identity::{self, ChecksumValidator, CodeValidator};
use crate::terms::{
    Country, LifeExpectancy, AMOUNT_STEP, CREDIT_SCORE_THRESHOLD, MAXIMUM_LOAN_AMOUNT,
    MAXIMUM_LOAN_PERIOD, MINIMUM_AGE, MINIMUM_LOAN_AMOUNT, MINIMUM_LOAN_PERIOD,
};

/// Credit score for an amount/period combination
///
/// Defined as (credit modifier / amount * period) / 10 in double precision;
/// a score at or above 0.1 is approvable. Amounts are deliberately not
/// rounded so tie-breaks at the threshold stay exact.
pub fn credit_score(credit_modifier: u32, amount: u32, period: u32) -> f64 {
    (credit_modifier as f64 / amount as f64 * period as f64) / 10.0
}

/// Loan pre-approval engine
///
/// Stateless between calls: a decision is a pure function of the request,
/// the injected clock, and the life expectancy table. The checksum validator
/// and clock are ports so tests can substitute fakes.
pub struct DecisionEngine<V = ChecksumValidator, C = SystemClock> {
    validator: V,
    clock: C,
    life_expectancy: LifeExpectancy,
}

impl DecisionEngine {
    /// Create an engine with the built-in checksum validator, the system
    /// clock, and the Baltic life expectancy table
    pub fn new() -> Self {
        Self::with_parts(ChecksumValidator, SystemClock)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CodeValidator, C: Clock> DecisionEngine<V, C> {
    /// Create an engine with custom validator and clock ports
    pub fn with_parts(validator: V, clock: C) -> Self {
        Self {
            validator,
            clock,
            life_expectancy: LifeExpectancy::baltic_defaults(),
        }
    }

    /// Replace the life expectancy table
    pub fn with_life_expectancy(mut self, table: LifeExpectancy) -> Self {
        self.life_expectancy = table;
        self
    }

    /// Calculate the maximum approved loan amount and period for an applicant
    ///
    /// Checks run in a fixed order and the first violated rule wins: personal
    /// code, amount bounds, period bounds, country, existing debt, age
    /// eligibility. The amount search then starts at the requested period and
    /// falls back to longer periods up to the maximum.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        requested_amount: u32,
        requested_period: u32,
        country: &str,
    ) -> Result<Decision, DecisionError> {
        self.verify_inputs(personal_code, requested_amount, requested_period)?;

        let country = Country::from_name(country)
            .ok_or_else(|| DecisionError::InvalidCountry(country.to_string()))?;

        let credit_modifier = identity::credit_modifier(personal_code);
        if credit_modifier == 0 {
            return Err(DecisionError::NoValidLoan(
                "no valid loan found due to existing debt".to_string(),
            ));
        }

        self.check_age(personal_code, requested_period, country)?;

        if let Some(amount) = max_approved_amount(credit_modifier, requested_period) {
            return Ok(Decision {
                approved_amount: amount,
                approved_period: requested_period,
            });
        }

        debug!(
            "no approvable amount at {} months for modifier {}, scanning longer periods",
            requested_period, credit_modifier
        );

        match alternative_period(credit_modifier, requested_period) {
            Some((amount, period)) => Ok(Decision {
                approved_amount: amount,
                approved_period: period,
            }),
            None => Err(DecisionError::NoValidLoan(
                "no valid loan found for any period up to 48 months".to_string(),
            )),
        }
    }

    fn verify_inputs(
        &self,
        personal_code: &str,
        requested_amount: u32,
        requested_period: u32,
    ) -> Result<(), DecisionError> {
        if !self.validator.is_valid(personal_code) {
            return Err(DecisionError::InvalidPersonalCode(
                "checksum validation failed".to_string(),
            ));
        }

        if !(MINIMUM_LOAN_AMOUNT..=MAXIMUM_LOAN_AMOUNT).contains(&requested_amount) {
            return Err(DecisionError::InvalidLoanAmount(requested_amount));
        }

        if !(MINIMUM_LOAN_PERIOD..=MAXIMUM_LOAN_PERIOD).contains(&requested_period) {
            return Err(DecisionError::InvalidLoanPeriod(requested_period));
        }

        Ok(())
    }

    fn check_age(
        &self,
        personal_code: &str,
        requested_period: u32,
        country: Country,
    ) -> Result<(), DecisionError> {
        let birth_date = identity::birth_date(personal_code)
            .map_err(|e| DecisionError::InvalidPersonalCode(e.to_string()))?;

        let age = identity::age_in_years(birth_date, self.clock.today());
        if age < MINIMUM_AGE {
            return Err(DecisionError::InvalidAge(format!(
                "applicant is {age}, under the minimum age of {MINIMUM_AGE}"
            )));
        }

        // The loan must mature within the applicant's expected lifetime
        let max_acceptable_age =
            self.life_expectancy.for_country(country) - (requested_period / 12) as i32;
        if age > max_acceptable_age {
            return Err(DecisionError::InvalidAge(format!(
                "applicant is {age}, over the maximum age of {max_acceptable_age} \
                 for a {requested_period}-month loan in {}",
                country.as_str()
            )));
        }

        Ok(())
    }
}

/// Largest amount whose credit score clears the threshold at the given period
///
/// Scans from the maximum down in 100-euro steps so the first hit is the
/// maximum approvable amount.
fn max_approved_amount(credit_modifier: u32, period: u32) -> Option<u32> {
    (MINIMUM_LOAN_AMOUNT..=MAXIMUM_LOAN_AMOUNT)
        .rev()
        .step_by(AMOUNT_STEP as usize)
        .find(|&amount| credit_score(credit_modifier, amount, period) >= CREDIT_SCORE_THRESHOLD)
}

/// Smallest period past the requested one that admits an approvable amount
fn alternative_period(credit_modifier: u32, requested_period: u32) -> Option<(u32, u32)> {
    (requested_period + 1..=MAXIMUM_LOAN_PERIOD).find_map(|period| {
        max_approved_amount(credit_modifier, period).map(|amount| (amount, period))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    struct AcceptAll;

    impl CodeValidator for AcceptAll {
        fn is_valid(&self, _personal_code: &str) -> bool {
            true
        }
    }

    struct RejectAll;

    impl CodeValidator for RejectAll {
        fn is_valid(&self, _personal_code: &str) -> bool {
            false
        }
    }

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Engine that accepts any code, pinned to 2024-06-15
    fn engine() -> DecisionEngine<AcceptAll, FixedClock> {
        DecisionEngine::with_parts(AcceptAll, FixedClock(date(2024, 6, 15)))
    }

    // Applicant born 1990-01-01; tails pick the credit segment
    const SEGMENT_1: &str = "49001010001";
    const SEGMENT_2: &str = "49001013500";
    const SEGMENT_3: &str = "49001019999";

    #[test]
    fn test_rejected_checksum_wins_over_other_errors() {
        let engine = DecisionEngine::with_parts(RejectAll, FixedClock(date(2024, 6, 15)));
        let result = engine.calculate_approved_loan(SEGMENT_3, 50_000, 60, "Germany");
        assert!(matches!(result, Err(DecisionError::InvalidPersonalCode(_))));
    }

    #[test]
    fn test_amount_bounds() {
        assert_eq!(
            engine().calculate_approved_loan(SEGMENT_3, 1_999, 24, "Estonia"),
            Err(DecisionError::InvalidLoanAmount(1_999))
        );
        assert_eq!(
            engine().calculate_approved_loan(SEGMENT_3, 10_001, 24, "Estonia"),
            Err(DecisionError::InvalidLoanAmount(10_001))
        );
        assert!(engine()
            .calculate_approved_loan(SEGMENT_3, 2_000, 24, "Estonia")
            .is_ok());
        assert!(engine()
            .calculate_approved_loan(SEGMENT_3, 10_000, 24, "Estonia")
            .is_ok());
    }

    #[test]
    fn test_period_bounds() {
        assert_eq!(
            engine().calculate_approved_loan(SEGMENT_3, 5_000, 11, "Estonia"),
            Err(DecisionError::InvalidLoanPeriod(11))
        );
        assert_eq!(
            engine().calculate_approved_loan(SEGMENT_3, 5_000, 49, "Estonia"),
            Err(DecisionError::InvalidLoanPeriod(49))
        );
    }

    #[test]
    fn test_invalid_country() {
        let result = engine().calculate_approved_loan(SEGMENT_3, 5_000, 24, "Germany");
        assert_eq!(
            result,
            Err(DecisionError::InvalidCountry("Germany".to_string()))
        );
    }

    #[test]
    fn test_country_check_precedes_debt_check() {
        // Debt-bucket code and unsupported country: the country error wins
        let result = engine().calculate_approved_loan("4900101000x", 5_000, 24, "Germany");
        assert!(matches!(result, Err(DecisionError::InvalidCountry(_))));
    }

    #[test]
    fn test_debt_bucket_rejects_before_age_check() {
        // Underage applicant whose tail also lands in the debt bucket:
        // the debt rejection is surfaced, not the age one
        let result = engine().calculate_approved_loan("5080415600x", 5_000, 24, "Estonia");
        assert_eq!(
            result,
            Err(DecisionError::NoValidLoan(
                "no valid loan found due to existing debt".to_string()
            ))
        );
    }

    #[test]
    fn test_underage_applicant() {
        // Born 2008-04-15: 16 years old on 2024-06-15
        let result = engine().calculate_approved_loan("50804156006", 5_000, 24, "Estonia");
        assert!(matches!(result, Err(DecisionError::InvalidAge(_))));
    }

    #[test]
    fn test_overage_applicant_for_period() {
        // Born 1950-03-10: 74 on 2024-06-15. Latvia life expectancy is 75,
        // so a 48-month loan caps the age at 71.
        let result = engine().calculate_approved_loan("35003106005", 5_000, 48, "Latvia");
        assert!(matches!(result, Err(DecisionError::InvalidAge(_))));
    }

    #[test]
    fn test_overage_depends_on_country_table() {
        // The same 74-year-old clears a 12-month loan in Estonia (78 - 1 = 77)
        let result = engine().calculate_approved_loan("35003106005", 5_000, 12, "Estonia");
        assert!(result.is_ok());
    }

    #[test]
    fn test_custom_life_expectancy_table() {
        // Raising Latvia's expected lifetime admits the 74-year-old that the
        // built-in table rejects at 48 months
        let engine = engine().with_life_expectancy(LifeExpectancy::new(
            vec![(Country::Latvia, 85)],
            82,
        ));
        let result = engine.calculate_approved_loan("35003106005", 5_000, 48, "Latvia");
        assert!(result.is_ok());
    }

    #[test]
    fn test_segment_3_boundary_approves_requested_terms() {
        // Score at 10000/48 with modifier 1000 is 0.48, well over threshold
        let decision = engine()
            .calculate_approved_loan(SEGMENT_3, 10_000, 48, "Estonia")
            .unwrap();
        assert_eq!(
            decision,
            Decision {
                approved_amount: 10_000,
                approved_period: 48
            }
        );
    }

    #[test]
    fn test_segment_2_caps_amount_below_request() {
        // Modifier 300 at 12 months clears the threshold up to 3600 euros
        let decision = engine()
            .calculate_approved_loan(SEGMENT_2, 9_000, 12, "Estonia")
            .unwrap();
        assert_eq!(
            decision,
            Decision {
                approved_amount: 3_600,
                approved_period: 12
            }
        );
    }

    #[test]
    fn test_segment_1_falls_back_to_longer_period() {
        // Modifier 100 clears nothing at 12 months; the first period that
        // admits an amount is 20 months at the 2000 euro minimum
        let decision = engine()
            .calculate_approved_loan(SEGMENT_1, 4_000, 12, "Estonia")
            .unwrap();
        assert_eq!(
            decision,
            Decision {
                approved_amount: 2_000,
                approved_period: 20
            }
        );
    }

    #[test]
    fn test_approved_amount_exceeds_modest_request() {
        // The search is independent of the requested amount: a modest
        // request still receives the maximum approvable amount
        let decision = engine()
            .calculate_approved_loan(SEGMENT_3, 2_000, 12, "Estonia")
            .unwrap();
        assert_eq!(decision.approved_amount, 10_000);
    }

    #[test]
    fn test_approved_amount_is_on_the_search_grid() {
        for (code, period) in [(SEGMENT_1, 12), (SEGMENT_2, 12), (SEGMENT_3, 48)] {
            let decision = engine()
                .calculate_approved_loan(code, 5_000, period, "Estonia")
                .unwrap();
            assert!((2_000..=10_000).contains(&decision.approved_amount));
            assert_eq!((10_000 - decision.approved_amount) % 100, 0);
            assert!(decision.approved_period >= period);
            assert!(decision.approved_period <= 48);
        }
    }

    #[test]
    fn test_max_amount_monotone_in_modifier() {
        for period in [12, 24, 36, 48] {
            let mut previous = 0;
            for modifier in [100, 300, 1000] {
                let amount = max_approved_amount(modifier, period).unwrap_or(0);
                assert!(
                    amount >= previous,
                    "modifier {modifier} at {period} months decreased the max amount"
                );
                previous = amount;
            }
        }
    }

    #[test]
    fn test_search_exhaustion_yields_no_loan() {
        // No shipped modifier can exhaust the search (even 100 * 48 months
        // covers the minimum amount), so drive the helpers directly with a
        // sub-threshold modifier
        assert_eq!(max_approved_amount(10, 48), None);
        assert_eq!(alternative_period(10, 12), None);
    }

    #[test]
    fn test_decisions_are_idempotent() {
        let engine = engine();
        let first = engine.calculate_approved_loan(SEGMENT_2, 5_000, 12, "Estonia");
        let second = engine.calculate_approved_loan(SEGMENT_2, 5_000, 12, "Estonia");
        assert_eq!(first, second);
    }

    #[test]
    fn test_credit_score_values() {
        assert_relative_eq!(credit_score(1_000, 10_000, 48), 0.48, max_relative = 1e-12);
        assert_relative_eq!(credit_score(300, 3_600, 12), 0.1, max_relative = 1e-12);
        assert!(credit_score(100, 2_000, 20) >= CREDIT_SCORE_THRESHOLD);
        assert!(credit_score(100, 2_100, 20) < CREDIT_SCORE_THRESHOLD);
    }

    #[test]
    fn test_full_pipeline_with_real_validator() {
        // Checksum-valid segment-3 code, born 1990-01-01
        let engine =
            DecisionEngine::with_parts(ChecksumValidator, FixedClock(date(2024, 6, 15)));
        let decision = engine
            .calculate_approved_loan("49001016005", 5_000, 12, "Estonia")
            .unwrap();
        assert_eq!(
            decision,
            Decision {
                approved_amount: 10_000,
                approved_period: 12
            }
        );

        // Same request with a corrupted check digit is rejected outright
        let result = engine.calculate_approved_loan("49001016004", 5_000, 12, "Estonia");
        assert!(matches!(result, Err(DecisionError::InvalidPersonalCode(_))));
    }

    #[test]
    fn test_unparseable_birth_date_with_permissive_validator() {
        // A validator fake may admit codes the birth date decoder cannot
        // handle; those surface as InvalidPersonalCode at the age check
        let result = engine().calculate_approved_loan("99001016005", 5_000, 12, "Estonia");
        assert!(matches!(result, Err(DecisionError::InvalidPersonalCode(_))));
    }
}
