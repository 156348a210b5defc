//! Record models for the three report sheets and the groupings built
//! from them.

mod cell;
mod constraints;
mod employee;
mod executive_salary;
mod field;
mod period;
mod record;
mod salary;
mod salary_fund;

pub use cell::CellValue;
pub use employee::Employee;
pub use executive_salary::ExecutiveSalary;
pub use field::{FieldScope, FieldSpec, XmlValue, display_value};
pub use period::Period;
pub use record::{RowCursor, SheetRecord};
pub use salary::{DEFAULT_STAFF_CATEGORY_CODE, Salary};
pub use salary_fund::SalaryFund;

#[cfg(test)]
pub(crate) use salary::tests::salary_row;
