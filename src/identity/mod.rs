//! National ID code handling: birth date decoding, credit segmentation, checksum validation

mod code;
mod validator;

pub use code::{age_in_years, birth_date, credit_modifier, CodeError};
pub use validator::{ChecksumValidator, CodeValidator};
