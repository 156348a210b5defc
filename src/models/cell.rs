//! Raw worksheet cell values and their coercions.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

/// A single cell as delivered by the workbook reader.
///
/// Anything the reader cannot express as one of these (dates, error
/// cells) arrives as [`CellValue::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value.
    Empty,
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Boolean.
    Bool(bool),
}

impl CellValue {
    /// Returns true for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Reads the cell as trimmed text; `None` when blank.
    ///
    /// Integral floats render without a fractional part, so a tax id typed
    /// as a number reads back as its digits.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) if text.trim().is_empty() => None,
            CellValue::Text(text) => Some(text.trim().to_string()),
            CellValue::Int(value) => Some(value.to_string()),
            CellValue::Float(value) => Some(match integral(*value) {
                Some(int) => int.to_string(),
                None => value.to_string(),
            }),
            CellValue::Bool(value) => Some(value.to_string()),
        }
    }

    /// Reads the cell as an integer; `Ok(None)` when blank.
    pub fn as_int(&self) -> Result<Option<i64>, String> {
        match self {
            _ if self.is_blank() => Ok(None),
            CellValue::Int(value) => Ok(Some(*value)),
            CellValue::Float(value) => integral(*value)
                .map(Some)
                .ok_or_else(|| format!("expected an integer, got {value}")),
            CellValue::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| format!("expected an integer, got '{}'", text.trim())),
            other => Err(format!("expected an integer, got {other:?}")),
        }
    }

    /// Reads the cell as a decimal number; `Ok(None)` when blank.
    ///
    /// Text may use a comma as the decimal separator.
    pub fn as_decimal(&self) -> Result<Option<Decimal>, String> {
        match self {
            _ if self.is_blank() => Ok(None),
            CellValue::Int(value) => Ok(Some(Decimal::from(*value))),
            CellValue::Float(value) => Decimal::from_f64(*value)
                .map(Some)
                .ok_or_else(|| format!("number {value} is out of range")),
            CellValue::Text(text) => {
                let normalized = text.trim().replace(',', ".");
                Decimal::from_str(&normalized)
                    .map(Some)
                    .map_err(|_| format!("expected a number, got '{}'", text.trim()))
            }
            other => Err(format!("expected a number, got {other:?}")),
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Some(value as i64)
    } else {
        None
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}
