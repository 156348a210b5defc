//! Average salaries of management (sheet `Раздел 3`).

use rust_decimal::Decimal;

use crate::config::ReportConfig;
use crate::error::ReportResult;

use super::field::{FieldScope, FieldSpec, XmlValue};
use super::record::{RowCursor, SheetRecord};

/// Yearly average salaries of the head, deputies, chief accountant and
/// general staff.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSalary {
    /// Reporting year.
    pub year: i32,
    /// Organization tax id; read but never emitted.
    pub inn: String,
    /// Organization registration code; read but never emitted.
    pub kpp: String,
    /// Head of the organization.
    pub average_executive_salary: Decimal,
    /// Deputy heads.
    pub average_deputy_salary: Decimal,
    /// Chief accountant.
    pub average_chief_accountant_salary: Decimal,
    /// General staff. Emitted as `РасхОбщФед`, the tag the form template
    /// uses for this column.
    pub average_employee_salary: Decimal,
}

impl SheetRecord for ExecutiveSalary {
    const SHEET: &'static str = "Раздел 3";
    const HEADER_ROWS: usize = 3;

    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::row("year", "Год", |r| XmlValue::Int(i64::from(r.year))),
        FieldSpec::new("inn", "ИНН", FieldScope::Identity, |r| {
            XmlValue::Text(r.inn.clone())
        }),
        FieldSpec::new("kpp", "КПП", FieldScope::Identity, |r| {
            XmlValue::Text(r.kpp.clone())
        }),
        FieldSpec::row("average_executive_salary", "СредЗПРук", |r| {
            XmlValue::Amount(r.average_executive_salary)
        }),
        FieldSpec::row("average_deputy_salary", "СредЗПЗам", |r| {
            XmlValue::Amount(r.average_deputy_salary)
        }),
        FieldSpec::row("average_chief_accountant_salary", "СредЗПГлБух", |r| {
            XmlValue::Amount(r.average_chief_accountant_salary)
        }),
        FieldSpec::row("average_employee_salary", "РасхОбщФед", |r| {
            XmlValue::Amount(r.average_employee_salary)
        }),
    ];

    fn from_row(row: &mut RowCursor<'_, Self>, _config: &ReportConfig) -> ReportResult<Self> {
        Ok(Self {
            year: row.year()?,
            inn: row.optional_text()?,
            kpp: row.optional_text()?,
            average_executive_salary: row.amount()?,
            average_deputy_salary: row.amount()?,
            average_chief_accountant_salary: row.amount()?,
            average_employee_salary: row.amount()?,
        })
    }
}
