//! Row-backed record types and positional column reading.

use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};

use super::cell::CellValue;
use super::field::{FieldScope, FieldSpec, XmlValue};

/// A record read from one worksheet row.
pub trait SheetRecord: Sized + 'static {
    /// Worksheet the records live on.
    const SHEET: &'static str;

    /// Header rows above the first data row.
    const HEADER_ROWS: usize;

    /// Columns in worksheet order.
    const FIELDS: &'static [FieldSpec<Self>];

    /// Builds and validates a record from a row.
    fn from_row(row: &mut RowCursor<'_, Self>, config: &ReportConfig) -> ReportResult<Self>;

    /// Rendered `(tag, value)` pairs of the fields emitted in `scope`, in
    /// column order.
    fn fields_in(&self, scope: FieldScope) -> Vec<(&'static str, XmlValue)> {
        Self::FIELDS
            .iter()
            .filter(|field| field.scope == scope)
            .map(|field| (field.tag, (field.value)(self)))
            .collect()
    }
}

/// Walks a row's cells in the column order of `R::FIELDS`.
pub struct RowCursor<'a, R> {
    cells: &'a [CellValue],
    next: usize,
    _record: PhantomData<R>,
}

impl<'a, R: SheetRecord> RowCursor<'a, R> {
    /// Starts reading `cells` at the first column.
    pub fn new(cells: &'a [CellValue]) -> Self {
        Self {
            cells,
            next: 0,
            _record: PhantomData,
        }
    }

    /// Number of columns consumed so far.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Takes the next cell together with the name of its field.
    pub fn take(&mut self) -> ReportResult<(&'static str, &'a CellValue)> {
        let field = R::FIELDS
            .get(self.next)
            .ok_or_else(|| ReportError::InvalidCell {
                field: "?",
                message: format!("row read past column {}", R::FIELDS.len()),
            })?;
        let cell = self
            .cells
            .get(self.next)
            .ok_or_else(|| ReportError::InvalidCell {
                field: field.name,
                message: format!("column {} is missing", self.next + 1),
            })?;
        self.next += 1;
        Ok((field.name, cell))
    }

    /// Required text.
    pub fn text(&mut self) -> ReportResult<String> {
        let (field, cell) = self.take()?;
        cell.as_text().ok_or_else(|| required(field))
    }

    /// Optional text; blank gives an empty string.
    pub fn optional_text(&mut self) -> ReportResult<String> {
        let (_, cell) = self.take()?;
        Ok(cell.as_text().unwrap_or_default())
    }

    /// Required integer.
    pub fn int(&mut self) -> ReportResult<i64> {
        let (field, cell) = self.take()?;
        cell.as_int()
            .map_err(|message| invalid(field, message))?
            .ok_or_else(|| required(field))
    }

    /// Optional integer; blank gives `default`.
    pub fn int_or(&mut self, default: i64) -> ReportResult<i64> {
        let (field, cell) = self.take()?;
        Ok(cell
            .as_int()
            .map_err(|message| invalid(field, message))?
            .unwrap_or(default))
    }

    /// Required calendar year.
    pub fn year(&mut self) -> ReportResult<i32> {
        let (field, cell) = self.take()?;
        let year = cell
            .as_int()
            .map_err(|message| invalid(field, message))?
            .ok_or_else(|| required(field))?;
        i32::try_from(year).map_err(|_| invalid(field, format!("year {year} is out of range")))
    }

    /// Required decimal.
    pub fn decimal(&mut self) -> ReportResult<Decimal> {
        let (field, cell) = self.take()?;
        cell.as_decimal()
            .map_err(|message| invalid(field, message))?
            .ok_or_else(|| required(field))
    }

    /// Optional monetary amount; blank gives zero.
    pub fn amount(&mut self) -> ReportResult<Decimal> {
        let (field, cell) = self.take()?;
        Ok(cell
            .as_decimal()
            .map_err(|message| invalid(field, message))?
            .unwrap_or(Decimal::ZERO))
    }
}

pub(crate) fn required(field: &'static str) -> ReportError {
    ReportError::InvalidCell {
        field,
        message: "value is required".to_string(),
    }
}

fn invalid(field: &'static str, message: String) -> ReportError {
    ReportError::InvalidCell { field, message }
}
