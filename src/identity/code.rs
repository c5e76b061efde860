//! Decoding of national ID codes into birth dates and credit segments
//!
//! The code layout is positional: digit 0 is a combined century/gender
//! marker, digits 1-2 a two-digit year within that century, digits 3-4 the
//! month, digits 5-6 the day. The last four digits (sequence number plus
//! check digit) carry the credit segment.
//!
//! Century marker mapping: 1-2 -> 1800s, 3-4 -> 1900s, 5-8 -> 2000s.

use chrono::{Datelike, NaiveDate};

use crate::terms::{
    SEGMENT_1_CREDIT_MODIFIER, SEGMENT_2_CREDIT_MODIFIER, SEGMENT_3_CREDIT_MODIFIER,
};

/// Failure to decode a birth date from a personal code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("personal code is too short to encode a birth date")]
    TooShort,
    #[error("unrecognized century marker '{0}' in personal code")]
    UnrecognizedCentury(char),
    #[error("personal code birth date segment is not numeric")]
    NonNumericDate,
    #[error("personal code encodes an impossible calendar date")]
    ImpossibleDate,
}

/// Extract the birth date encoded in a personal code
pub fn birth_date(personal_code: &str) -> Result<NaiveDate, CodeError> {
    let bytes = personal_code.as_bytes();
    if bytes.len() < 7 {
        return Err(CodeError::TooShort);
    }

    let century = match bytes[0] {
        b'1' | b'2' => 1800,
        b'3' | b'4' => 1900,
        b'5'..=b'8' => 2000,
        other => return Err(CodeError::UnrecognizedCentury(other as char)),
    };

    let year = century + two_digits(bytes[1], bytes[2])? as i32;
    let month = two_digits(bytes[3], bytes[4])?;
    let day = two_digits(bytes[5], bytes[6])?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CodeError::ImpossibleDate)
}

/// Derive the credit modifier from the last four digits of a personal code
///
/// Tail 0..=3000 is segment 1, 3001..=6000 segment 2, 6001..=9999 segment 3.
/// Anything else, including a tail that does not parse as four base-10
/// digits, is the debt bucket (0): no loan is possible.
pub fn credit_modifier(personal_code: &str) -> u32 {
    let bytes = personal_code.as_bytes();
    if bytes.len() < 4 {
        return 0;
    }

    let mut id: u32 = 0;
    for &byte in &bytes[bytes.len() - 4..] {
        if !byte.is_ascii_digit() {
            return 0;
        }
        id = id * 10 + (byte - b'0') as u32;
    }

    match id {
        0..=3000 => SEGMENT_1_CREDIT_MODIFIER,
        3001..=6000 => SEGMENT_2_CREDIT_MODIFIER,
        6001..=9999 => SEGMENT_3_CREDIT_MODIFIER,
        _ => 0,
    }
}

/// Whole elapsed years between a birth date and a reference date
pub fn age_in_years(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn two_digits(tens: u8, ones: u8) -> Result<u32, CodeError> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return Err(CodeError::NonNumericDate);
    }
    Ok((tens - b'0') as u32 * 10 + (ones - b'0') as u32)
}
