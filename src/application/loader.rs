//! Load loan applications from intake CSV files

use super::LoanApplication;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Load all applications from a CSV file
pub fn load_applications<P: AsRef<Path>>(path: P) -> Result<Vec<LoanApplication>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    collect_applications(&mut reader)
}

/// Load applications from any reader (e.g., string buffer, network stream)
pub fn load_applications_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LoanApplication>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_applications(&mut csv_reader)
}

fn collect_applications<R: std::io::Read>(
    reader: &mut Reader<R>,
) -> Result<Vec<LoanApplication>, Box<dyn Error>> {
    let mut applications = Vec::new();

    for result in reader.deserialize() {
        let application: LoanApplication = result?;
        applications.push(application);
    }

    Ok(applications)
}
