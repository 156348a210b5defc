//! Groups flat salary records into reporting periods and employees.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Employee, Period, Salary};

/// Builds the Period → Employee → Salary tree.
///
/// Periods are ordered by month, then year. Within a period the
/// employees are the distinct (insurance number, full name, experience)
/// triples of that period's records, ordered by full name. Each employee
/// borrows its records in input order.
///
/// # Examples
///
/// ```
/// use sizp_report::grouping::group_by_period;
///
/// assert!(group_by_period(&[]).is_empty());
/// ```
pub fn group_by_period(salaries: &[Salary]) -> Vec<Period<'_>> {
    let keys: BTreeSet<(i32, u32)> = salaries.iter().map(|s| (s.year, s.month)).collect();
    let mut keys: Vec<(i32, u32)> = keys.into_iter().collect();
    keys.sort_by_key(|&(_, month)| month);

    let periods: Vec<Period<'_>> = keys
        .into_iter()
        .map(|(year, month)| Period {
            year,
            month,
            employees: employees_of(salaries, year, month),
        })
        .collect();

    debug!(
        periods = periods.len(),
        records = salaries.len(),
        "Grouped salary records"
    );
    periods
}

fn employees_of(salaries: &[Salary], year: i32, month: u32) -> Vec<Employee<'_>> {
    let in_period: Vec<&Salary> = salaries
        .iter()
        .filter(|s| s.year == year && s.month == month)
        .collect();

    let identities: BTreeSet<(&str, &str, i64)> = in_period
        .iter()
        .map(|s| (s.employee_name.as_str(), s.snils.as_str(), s.work_experience))
        .collect();

    identities
        .into_iter()
        .filter_map(|(name, snils, experience)| {
            let first = in_period.iter().find(|s| {
                s.employee_name == name && s.snils == snils && s.work_experience == experience
            })?;
            let mut employee = Employee::from_salary(first);
            employee.salaries = in_period
                .iter()
                .copied()
                .filter(|s| s.snils == snils)
                .collect();
            Some(employee)
        })
        .collect()
}
