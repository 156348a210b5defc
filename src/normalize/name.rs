//! Full name decomposition.

use crate::error::{ReportError, ReportResult};

/// A full name split into the parts the report emits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    /// Surname (`УТ2:Фамилия`).
    pub last: String,
    /// Given name (`УТ2:Имя`).
    pub first: String,
    /// Patronymic (`УТ2:Отчество`), possibly compound or empty.
    pub middle: String,
}

/// Splits a full name into surname, given name and patronymic.
///
/// The first token is the surname and the second the given name; every
/// remaining token forms the patronymic, so four-token names such as
/// "Алиев Рашид Гусейн оглы" keep a compound patronymic and two-token
/// names get an empty one. A single token is taken as the surname alone.
///
/// # Examples
///
/// ```
/// use sizp_report::normalize::decompose_full_name;
///
/// let name = decompose_full_name("Иванов Иван Иванович оглы").unwrap();
/// assert_eq!(name.last, "Иванов");
/// assert_eq!(name.first, "Иван");
/// assert_eq!(name.middle, "Иванович оглы");
/// ```
pub fn decompose_full_name(full: &str) -> ReportResult<PersonName> {
    let mut tokens = full.split_whitespace();
    let last = tokens.next().ok_or_else(|| ReportError::InvalidName {
        value: full.to_string(),
    })?;
    let first = tokens.next().unwrap_or_default();
    let middle = tokens.collect::<Vec<_>>().join(" ");

    Ok(PersonName {
        last: last.to_string(),
        first: first.to_string(),
        middle,
    })
}
