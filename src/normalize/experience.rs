//! Experience string normalization.

use crate::error::{ReportError, ReportResult};

/// Year unit spellings; longer forms first so `года` is not cut at `год`.
const YEAR_UNITS: [&str; 3] = ["года", "год", "лет"];

const MONTH_UNIT: &str = "мес";

/// Converts `"<years> лет <months> мес"` into `"YY.MM"`.
///
/// Units and whitespace are dropped and each component is zero-padded to
/// two digits; wider components are kept as they are. The month value is
/// not checked against 12. A string already in `Y.M` form is padded the
/// same way. A missing component counts as zero.
///
/// # Examples
///
/// ```
/// use sizp_report::normalize::normalize_experience;
///
/// assert_eq!(normalize_experience("5 лет 10 мес").unwrap(), "05.10");
/// assert_eq!(normalize_experience("0 лет 06 мес").unwrap(), "00.06");
/// assert_eq!(normalize_experience("1 год 2 мес").unwrap(), "01.02");
/// ```
pub fn normalize_experience(raw: &str) -> ReportResult<String> {
    let malformed = |message: &str| ReportError::MalformedExperience {
        value: raw.to_string(),
        message: message.to_string(),
    };

    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.replace(MONTH_UNIT, "");
    let compact = match YEAR_UNITS.iter().find(|unit| compact.contains(*unit)) {
        Some(unit) => compact.replacen(unit, ".", 1),
        None => compact,
    };

    let (years, months) = compact
        .split_once('.')
        .ok_or_else(|| malformed("missing year/month separator"))?;
    if months.contains('.') {
        return Err(malformed("more than one year/month separator"));
    }
    if years.is_empty() && months.is_empty() {
        return Err(malformed("no years or months given"));
    }
    for part in [years, months] {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed(&format!("'{part}' is not a number")));
        }
    }

    Ok(format!("{years:0>2}.{months:0>2}"))
}
