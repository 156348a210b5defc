//! Turns worksheet rows into validated records.
//!
//! Each record type declares its sheet, its header-row count and its
//! columns; [`load_records`] applies those to the rows of a
//! [`SheetSource`]. Every data row is validated and all failures of a
//! sheet are reported together.

pub mod workbook;

use tracing::{error, info, warn};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult, RowFailure};
use crate::models::{CellValue, ExecutiveSalary, RowCursor, Salary, SalaryFund, SheetRecord};

pub use workbook::{InMemoryWorkbook, SheetSource, XlsxWorkbook};

/// Builds records of type `R` from the rows of its worksheet.
///
/// The first `R::HEADER_ROWS` rows are skipped, as are rows with no
/// values at all. A row narrower than the record aborts the load with
/// [`ReportError::ShortRow`]; rows that fail validation are collected
/// into a single [`ReportError::BatchValidation`].
///
/// # Examples
///
/// ```
/// use sizp_report::config::ReportConfig;
/// use sizp_report::loader::load_records;
/// use sizp_report::models::{CellValue, ExecutiveSalary};
///
/// let mut rows = vec![Vec::new(); 3];
/// rows.push(vec![
///     CellValue::Int(2021),
///     CellValue::Empty,
///     CellValue::Empty,
///     CellValue::Float(95_000.0),
///     CellValue::Empty,
///     CellValue::Empty,
///     CellValue::Empty,
/// ]);
///
/// let records: Vec<ExecutiveSalary> = load_records(&rows, &ReportConfig::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].year, 2021);
/// ```
pub fn load_records<R: SheetRecord>(
    rows: &[Vec<CellValue>],
    config: &ReportConfig,
) -> ReportResult<Vec<R>> {
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (index, cells) in rows.iter().enumerate().skip(R::HEADER_ROWS) {
        let row = index + 1;
        if cells.iter().all(CellValue::is_blank) {
            continue;
        }
        if cells.len() < R::FIELDS.len() {
            return Err(ReportError::ShortRow {
                sheet: R::SHEET.to_string(),
                row,
                expected: R::FIELDS.len(),
                found: cells.len(),
            });
        }

        let mut cursor = RowCursor::new(cells);
        match R::from_row(&mut cursor, config) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(sheet = R::SHEET, row, %error, "Rejected row");
                failures.push(RowFailure { row, error });
            }
        }
    }

    if failures.is_empty() {
        Ok(records)
    } else {
        Err(ReportError::BatchValidation {
            sheet: R::SHEET.to_string(),
            failures,
        })
    }
}

fn load_sheet<R: SheetRecord>(
    source: &mut impl SheetSource,
    config: &ReportConfig,
) -> ReportResult<Vec<R>> {
    let rows = source.rows(R::SHEET)?;
    let records = load_records::<R>(&rows, config)?;
    info!(sheet = R::SHEET, count = records.len(), "Loaded records");
    Ok(records)
}

/// Loads the per-employee salary sheet.
///
/// Validation failures are logged and yield no records, so the report is
/// still produced without salary periods. Source errors propagate.
pub fn load_salary(
    source: &mut impl SheetSource,
    config: &ReportConfig,
) -> ReportResult<Vec<Salary>> {
    match load_sheet::<Salary>(source, config) {
        Err(ReportError::BatchValidation { sheet, failures }) => {
            let error = ReportError::BatchValidation { sheet, failures };
            error!(%error, "Salary sheet failed validation; continuing without salary records");
            Ok(Vec::new())
        }
        result => result,
    }
}

/// Loads the salary fund sheet.
pub fn load_salary_fund(
    source: &mut impl SheetSource,
    config: &ReportConfig,
) -> ReportResult<Vec<SalaryFund>> {
    load_sheet(source, config)
}

/// Loads the management salary sheet.
pub fn load_executive_salaries(
    source: &mut impl SheetSource,
    config: &ReportConfig,
) -> ReportResult<Vec<ExecutiveSalary>> {
    load_sheet(source, config)
}
