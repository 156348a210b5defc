//! Row sources: an `.xlsx` workbook and an in-memory stand-in.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::CellValue;

/// Something that yields the rows of a named worksheet.
///
/// Rows are returned from the top of the sheet, header rows included, so
/// row `i` of the result is worksheet row `i + 1`.
pub trait SheetSource {
    /// Reads every row of `sheet`.
    fn rows(&mut self, sheet: &str) -> ReportResult<Vec<Vec<CellValue>>>;
}

/// A workbook file read through `calamine`.
pub struct XlsxWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Opens the workbook at `path`.
    pub fn open(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref().to_path_buf();
        let sheets = open_workbook_auto(&path).map_err(|e| ReportError::Workbook {
            path: path.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Opened workbook");
        Ok(Self { path, sheets })
    }
}

impl SheetSource for XlsxWorkbook {
    fn rows(&mut self, sheet: &str) -> ReportResult<Vec<Vec<CellValue>>> {
        if !self.sheets.sheet_names().iter().any(|name| name == sheet) {
            return Err(ReportError::MissingSheet {
                sheet: sheet.to_string(),
            });
        }
        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|e| ReportError::Workbook {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(range_rows(&range))
    }
}

/// Converts a used range into rows anchored at cell A1.
///
/// `calamine` trims leading empty rows and columns from the used range,
/// which would shift both the header-skip count and column positions.
fn range_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Vec<CellValue>> = (0..first_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; first_col as usize];
        cells.extend(row.iter().map(cell_value));
        rows.push(cells);
    }
    rows
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}

/// Sheets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: HashMap<String, Vec<Vec<CellValue>>>,
}

impl InMemoryWorkbook {
    /// Creates an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a sheet.
    pub fn with_sheet(mut self, name: &str, rows: Vec<Vec<CellValue>>) -> Self {
        self.sheets.insert(name.to_string(), rows);
        self
    }
}

impl SheetSource for InMemoryWorkbook {
    fn rows(&mut self, sheet: &str) -> ReportResult<Vec<Vec<CellValue>>> {
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| ReportError::MissingSheet {
                sheet: sheet.to_string(),
            })
    }
}
