//! Enumerated labels and their report codes.
//!
//! Each label set lists its labels with an explicit 1-based code, the value
//! the report carries instead of the label text.

use crate::error::{ReportError, ReportResult};

/// A fixed set of labels with explicit report codes.
pub trait LabelSet: Sized + Copy + 'static {
    /// Human-readable name of the set, used in error messages.
    const NAME: &'static str;

    /// Every member with its label, in code order.
    const MEMBERS: &'static [(Self, &'static str)];

    /// The report code of this member.
    fn code(self) -> u8;

    /// Finds the member whose label matches `raw`, ignoring case and
    /// surrounding whitespace.
    fn from_label(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::MEMBERS
            .iter()
            .find(|(_, label)| label.to_lowercase() == wanted)
            .map(|(member, _)| *member)
    }
}

/// Employment condition (`УсловиеЗанятости`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentCondition {
    /// Основное.
    Main,
    /// Внешнее совместительство.
    External,
    /// Внутреннее совместительство.
    Internal,
}

impl LabelSet for EmploymentCondition {
    const NAME: &'static str = "employment condition";
    const MEMBERS: &'static [(Self, &'static str)] = &[
        (Self::Main, "Основное"),
        (Self::External, "Внешнее совместительство"),
        (Self::Internal, "Внутреннее совместительство"),
    ];

    fn code(self) -> u8 {
        match self {
            Self::Main => 1,
            Self::External => 2,
            Self::Internal => 3,
        }
    }
}

/// Qualification category (`КвалКатегория`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualificationCategory {
    /// первая.
    First,
    /// вторая.
    Second,
    /// высшая.
    Higher,
}

impl LabelSet for QualificationCategory {
    const NAME: &'static str = "qualification category";
    const MEMBERS: &'static [(Self, &'static str)] = &[
        (Self::First, "первая"),
        (Self::Second, "вторая"),
        (Self::Higher, "высшая"),
    ];

    fn code(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Higher => 3,
        }
    }
}

/// Academic degree (`УченаяСтепень`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicDegree {
    /// кандидат наук.
    Candidate,
    /// доктор наук.
    Doctor,
}

impl LabelSet for AcademicDegree {
    const NAME: &'static str = "academic degree";
    const MEMBERS: &'static [(Self, &'static str)] = &[
        (Self::Candidate, "кандидат наук"),
        (Self::Doctor, "доктор наук"),
    ];

    fn code(self) -> u8 {
        match self {
            Self::Candidate => 1,
            Self::Doctor => 2,
        }
    }
}

/// Looks up `raw` in label set `L`.
///
/// Blank input yields `Ok(None)`, which the report renders as `0`.
///
/// # Examples
///
/// ```
/// use sizp_report::normalize::{EmploymentCondition, LabelSet, ordinal_of};
///
/// let condition = ordinal_of::<EmploymentCondition>("Внешнее совместительство").unwrap();
/// assert_eq!(condition.map(LabelSet::code), Some(2));
/// assert_eq!(ordinal_of::<EmploymentCondition>("").unwrap(), None);
/// ```
pub fn ordinal_of<L: LabelSet>(raw: &str) -> ReportResult<Option<L>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    L::from_label(raw)
        .map(Some)
        .ok_or_else(|| ReportError::UnknownLabel {
            label: raw.to_string(),
            set: L::NAME,
        })
}
