//! Month name lookup.

use crate::error::{ReportError, ReportResult};

/// Nominative and genitive spellings, indexed by month number - 1.
const MONTH_NAMES: [[&str; 2]; 12] = [
    ["январь", "января"],
    ["февраль", "февраля"],
    ["март", "марта"],
    ["апрель", "апреля"],
    ["май", "мая"],
    ["июнь", "июня"],
    ["июль", "июля"],
    ["август", "августа"],
    ["сентябрь", "сентября"],
    ["октябрь", "октября"],
    ["ноябрь", "ноября"],
    ["декабрь", "декабря"],
];

/// Maps a Russian month name to its number (1-12).
///
/// Both the nominative form used by most spreadsheets ("Январь") and the
/// genitive form ("января") are recognised, in any letter case. A numeric
/// string in 1-12 is accepted as well.
///
/// # Examples
///
/// ```
/// use sizp_report::normalize::month_number;
///
/// assert_eq!(month_number("Март").unwrap(), 3);
/// assert_eq!(month_number("декабря").unwrap(), 12);
/// assert!(month_number("Мартобрь").is_err());
/// ```
pub fn month_number(name: &str) -> ReportResult<u32> {
    let trimmed = name.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        if (1..=12).contains(&number) {
            return Ok(number);
        }
    }

    let lowered = trimmed.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|forms| forms.contains(&lowered.as_str()))
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ReportError::UnknownMonth {
            value: name.to_string(),
        })
}
