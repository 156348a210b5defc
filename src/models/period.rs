//! Reporting period grouping.

use super::employee::Employee;

/// One (year, month) reporting period with its employees.
#[derive(Debug, Clone, PartialEq)]
pub struct Period<'a> {
    /// Reporting year.
    pub year: i32,
    /// Reporting month, 1-12.
    pub month: u32,
    /// Employees with records in this period, sorted by full name.
    pub employees: Vec<Employee<'a>>,
}

impl Period<'_> {
    /// Number of salary records across all employees of the period.
    pub fn record_count(&self) -> usize {
        self.employees.iter().map(|e| e.salaries.len()).sum()
    }
}
