//! Checksum validation of national ID codes
//!
//! The engine only depends on the [`CodeValidator`] capability, so tests can
//! substitute fakes and deployments can plug in registry-backed validators.

/// Capability to verify that a personal code is well-formed
pub trait CodeValidator {
    /// Whether the code passes format and checksum validation
    fn is_valid(&self, personal_code: &str) -> bool;
}

/// Standard two-round modulus-11 checksum over an 11-digit code
///
/// The final digit must equal the weighted sum of the first ten digits
/// modulo 11, using weights 1..9,1; a remainder of 10 triggers a second
/// round with weights 3..9,1..3, and a remainder of 10 there collapses to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumValidator;

impl CodeValidator for ChecksumValidator {
    fn is_valid(&self, personal_code: &str) -> bool {
        let bytes = personal_code.as_bytes();
        if bytes.len() != 11 || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let digits: Vec<u32> = bytes.iter().map(|b| (b - b'0') as u32).collect();
        check_digit(&digits[..10]) == digits[10]
    }
}

fn check_digit(digits: &[u32]) -> u32 {
    const ROUND_1: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
    const ROUND_2: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

    let weighted_sum = |weights: &[u32; 10]| -> u32 {
        digits.iter().zip(weights).map(|(d, w)| d * w).sum::<u32>() % 11
    };

    match weighted_sum(&ROUND_1) {
        10 => match weighted_sum(&ROUND_2) {
            10 => 0,
            remainder => remainder,
        },
        remainder => remainder,
    }
}
