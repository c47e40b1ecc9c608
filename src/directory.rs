//! Read-only access to the employee directory file.
//!
//! The directory is owned by the employee-management collaborator; this
//! crate only reads the compensation columns it needs and never writes or
//! creates the file. Numeric cells that fail to parse fall back to zero so
//! one bad cell degrades a single profile instead of blocking payroll.

use std::fs::File;
use std::path::PathBuf;

use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::CompensationProfile;

const EMPLOYEE_COLUMN: &str = "employee #";
const LAST_NAME_COLUMN: &str = "last name";
const FIRST_NAME_COLUMN: &str = "first name";
const BASIC_SALARY_COLUMN: &str = "basic salary";
const RICE_SUBSIDY_COLUMN: &str = "rice subsidy";
const PHONE_ALLOWANCE_COLUMN: &str = "phone allowance";
const CLOTHING_ALLOWANCE_COLUMN: &str = "clothing allowance";
const HOURLY_RATE_COLUMN: &str = "hourly rate";

/// Reader over the employee directory CSV.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    path: PathBuf,
}

impl EmployeeDirectory {
    /// Creates a reader over the given directory file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        EmployeeDirectory { path: path.into() }
    }

    /// Loads the compensation profile of every employee in the directory.
    ///
    /// The directory carries many more columns than compensation; cells are
    /// addressed by header name so column order and extra columns do not
    /// matter. Rows without an employee number are skipped. A missing file
    /// reads as an empty directory.
    pub fn load_profiles(&self) -> PayrollResult<Vec<CompensationProfile>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "employee directory absent, reading as empty");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|source| PayrollError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| PayrollError::Csv {
                path: self.path.display().to_string(),
                source,
            })?
            .clone();

        let Some(columns) = Columns::resolve(&headers) else {
            debug!(path = %self.path.display(), "directory header lacks compensation columns");
            return Ok(Vec::new());
        };

        let mut profiles = Vec::new();
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(error) if error.is_io_error() => {
                    return Err(PayrollError::Csv {
                        path: self.path.display().to_string(),
                        source: error,
                    });
                }
                Err(_) => continue,
            };
            if let Some(profile) = columns.profile_from(&row) {
                profiles.push(profile);
            }
        }

        debug!(path = %self.path.display(), count = profiles.len(), "loaded employee profiles");
        Ok(profiles)
    }

    /// Looks up one employee's profile by employee number.
    pub fn find_profile(&self, employee_id: &str) -> PayrollResult<Option<CompensationProfile>> {
        let profiles = self.load_profiles()?;
        Ok(profiles
            .into_iter()
            .find(|profile| profile.employee_id == employee_id))
    }
}

struct Columns {
    employee: usize,
    last_name: usize,
    first_name: usize,
    basic_salary: usize,
    rice_subsidy: usize,
    phone_allowance: usize,
    clothing_allowance: usize,
    hourly_rate: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Option<Self> {
        Some(Columns {
            employee: column(headers, EMPLOYEE_COLUMN)?,
            last_name: column(headers, LAST_NAME_COLUMN)?,
            first_name: column(headers, FIRST_NAME_COLUMN)?,
            basic_salary: column(headers, BASIC_SALARY_COLUMN)?,
            rice_subsidy: column(headers, RICE_SUBSIDY_COLUMN)?,
            phone_allowance: column(headers, PHONE_ALLOWANCE_COLUMN)?,
            clothing_allowance: column(headers, CLOTHING_ALLOWANCE_COLUMN)?,
            hourly_rate: column(headers, HOURLY_RATE_COLUMN)?,
        })
    }

    fn profile_from(&self, row: &StringRecord) -> Option<CompensationProfile> {
        let employee_id = row.get(self.employee)?.trim();
        if employee_id.is_empty() {
            return None;
        }
        let first = row.get(self.first_name).unwrap_or("").trim();
        let last = row.get(self.last_name).unwrap_or("").trim();
        Some(CompensationProfile {
            employee_id: employee_id.to_string(),
            employee_name: format!("{first} {last}").trim().to_string(),
            monthly_basic_salary: money_cell(row, self.basic_salary),
            rice_subsidy: money_cell(row, self.rice_subsidy),
            phone_allowance: money_cell(row, self.phone_allowance),
            clothing_allowance: money_cell(row, self.clothing_allowance),
            hourly_rate: money_cell(row, self.hourly_rate),
        })
    }
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().to_lowercase() == name)
}

// Directory files store grouped numbers like "20,000.50"; strip the commas
// before parsing and fall back to zero on anything non-numeric.
fn money_cell(row: &StringRecord, index: usize) -> Decimal {
    let cell = row.get(index).unwrap_or("").trim().replace(',', "");
    cell.parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    const FULL_HEADER: &str = "Employee #,Last Name,First Name,Birthday,Address,Phone Number,\
                               SSS #,Philhealth #,TIN #,Pag-ibig #,Status,Position,\
                               Immediate Supervisor,Basic Salary,Rice Subsidy,Phone Allowance,\
                               Clothing Allowance,Gross Semi-monthly Rate,Hourly Rate";

    fn directory_with(dir: &TempDir, rows: &str) -> EmployeeDirectory {
        let path = dir.path().join("employees.csv");
        fs::write(&path, format!("{FULL_HEADER}\n{rows}")).unwrap();
        EmployeeDirectory::new(path)
    }

    /// DIR-001: compensation columns are picked out of the full directory
    /// header by name.
    #[test]
    fn test_loads_profiles_from_full_directory() {
        let dir = TempDir::new().unwrap();
        let directory = directory_with(
            &dir,
            "10001,Crisostomo,Jose,01/02/1990,Manila,123,11-222,33,44,55,Regular,Clerk,None,\
             20000,1500,1000,1000,10000,120\n\
             10002,Rivera,Maria,03/04/1991,Cebu,456,66-777,88,99,00,Regular,Clerk,None,\
             30000,1500,800,800,15000,180\n",
        );

        let profiles = directory.load_profiles().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].employee_id, "10001");
        assert_eq!(profiles[0].employee_name, "Jose Crisostomo");
        assert_eq!(profiles[0].monthly_basic_salary, dec!(20000));
        assert_eq!(profiles[0].hourly_rate, dec!(120));
        assert_eq!(profiles[1].monthly_basic_salary, dec!(30000));
    }

    /// DIR-002: quoted, comma-grouped salary figures parse.
    #[test]
    fn test_parses_grouped_numbers() {
        let dir = TempDir::new().unwrap();
        let directory = directory_with(
            &dir,
            "10001,Crisostomo,Jose,.,.,.,.,.,.,.,Regular,Clerk,None,\
             \"20,000.50\",\"1,500\",1000,1000,\"10,000\",120.50\n",
        );

        let profiles = directory.load_profiles().unwrap();
        assert_eq!(profiles[0].monthly_basic_salary, dec!(20000.50));
        assert_eq!(profiles[0].rice_subsidy, dec!(1500));
        assert_eq!(profiles[0].hourly_rate, dec!(120.50));
    }

    /// DIR-003: non-numeric compensation cells fall back to zero without
    /// dropping the profile.
    #[test]
    fn test_non_numeric_cells_fall_back_to_zero() {
        let dir = TempDir::new().unwrap();
        let directory = directory_with(
            &dir,
            "10001,Crisostomo,Jose,.,.,.,.,.,.,.,Regular,Clerk,None,\
             n/a,1500,1000,1000,,120\n",
        );

        let profiles = directory.load_profiles().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].monthly_basic_salary, dec!(0));
        assert_eq!(profiles[0].rice_subsidy, dec!(1500));
    }

    /// DIR-004: rows without an employee number are skipped.
    #[test]
    fn test_rows_without_employee_number_are_skipped() {
        let dir = TempDir::new().unwrap();
        let directory = directory_with(
            &dir,
            ",Crisostomo,Jose,.,.,.,.,.,.,.,Regular,Clerk,None,20000,1500,1000,1000,10000,120\n\
             10002,Rivera,Maria,.,.,.,.,.,.,.,Regular,Clerk,None,30000,1500,800,800,15000,180\n",
        );

        let profiles = directory.load_profiles().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].employee_id, "10002");
    }

    /// DIR-005: a missing directory reads as empty and is not created.
    #[test]
    fn test_missing_directory_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");
        let directory = EmployeeDirectory::new(&path);

        assert!(directory.load_profiles().unwrap().is_empty());
        assert!(!path.exists());
    }

    /// DIR-006: a header without the compensation columns yields no
    /// profiles.
    #[test]
    fn test_header_without_compensation_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "a,b,c\n10001,Crisostomo,Jose\n").unwrap();
        let directory = EmployeeDirectory::new(path);

        assert!(directory.load_profiles().unwrap().is_empty());
    }

    /// DIR-007: profile lookup by employee number.
    #[test]
    fn test_find_profile() {
        let dir = TempDir::new().unwrap();
        let directory = directory_with(
            &dir,
            "10001,Crisostomo,Jose,.,.,.,.,.,.,.,Regular,Clerk,None,20000,1500,1000,1000,10000,120\n\
             10002,Rivera,Maria,.,.,.,.,.,.,.,Regular,Clerk,None,30000,1500,800,800,15000,180\n",
        );

        let found = directory.find_profile("10002").unwrap().unwrap();
        assert_eq!(found.employee_name, "Maria Rivera");
        assert!(directory.find_profile("99999").unwrap().is_none());
    }
}
