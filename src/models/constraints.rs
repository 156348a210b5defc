//! Field-level constraint checks shared by the record types.

use std::fmt::Display;

use crate::error::{ReportError, ReportResult};

/// Value must be exactly `len` ASCII digits.
pub(crate) fn exact_digits(field: &'static str, value: &str, len: usize) -> ReportResult<()> {
    if value.len() == len && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ReportError::ConstraintViolation {
            field,
            value: format!("'{value}'"),
            constraint: format!("exactly {len} digits"),
        })
    }
}

/// Value must lie in `min..=max`.
pub(crate) fn between<T: PartialOrd + Display>(
    field: &'static str,
    value: T,
    min: T,
    max: T,
) -> ReportResult<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ReportError::ConstraintViolation {
            field,
            value: value.to_string(),
            constraint: format!("{min} <= value <= {max}"),
        })
    }
}

/// Value must be at least `min`.
pub(crate) fn at_least<T: PartialOrd + Display>(
    field: &'static str,
    value: T,
    min: T,
) -> ReportResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(ReportError::ConstraintViolation {
            field,
            value: value.to_string(),
            constraint: format!("value >= {min}"),
        })
    }
}
