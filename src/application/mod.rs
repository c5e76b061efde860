//! Loan application intake: the request record and CSV loading

mod data;
pub mod loader;

pub use data::LoanApplication;
pub use loader::{load_applications, load_applications_from_reader};
