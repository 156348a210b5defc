//! Employee grouping derived from salary records.
//!
//! An [`Employee`] is never read from the workbook. It is assembled by the
//! grouping engine from the salary records of one reporting period and
//! borrows those records instead of copying them.

use crate::normalize::PersonName;

use super::salary::Salary;

/// One employee within a reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee<'a> {
    /// Insurance number (СНИЛС), the employee's natural key.
    pub snils: String,
    /// Full name as written in the sheet.
    pub full_name: String,
    /// Decomposed full name.
    pub name: PersonName,
    /// Total years of experience.
    pub work_experience: i64,
    /// The employee's salary records for the period, in sheet order.
    pub salaries: Vec<&'a Salary>,
}

impl<'a> Employee<'a> {
    /// Starts an employee grouping from the identity columns of `salary`.
    ///
    /// The returned grouping holds no records yet.
    pub fn from_salary(salary: &Salary) -> Self {
        Self {
            snils: salary.snils.clone(),
            full_name: salary.employee_name.clone(),
            name: salary.name.clone(),
            work_experience: salary.work_experience,
            salaries: Vec::new(),
        }
    }

    /// Returns true if the grouping holds at least one salary record.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizp_report::models::Employee;
    /// use sizp_report::normalize::PersonName;
    ///
    /// let employee = Employee {
    ///     snils: "112-233-445 95".to_string(),
    ///     full_name: "Иванов Иван Иванович".to_string(),
    ///     name: PersonName::default(),
    ///     work_experience: 12,
    ///     salaries: vec![],
    /// };
    /// assert!(!employee.has_records());
    /// ```
    pub fn has_records(&self) -> bool {
        !self.salaries.is_empty()
    }
}
