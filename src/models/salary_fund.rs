//! Yearly salary fund spending by budget source (sheet `Раздел 2`).

use rust_decimal::Decimal;

use crate::config::ReportConfig;
use crate::error::ReportResult;

use super::field::{FieldScope, FieldSpec, XmlValue};
use super::record::{RowCursor, SheetRecord};

/// Salary fund totals for one year, split by budget source.
///
/// Each source has a total for all staff and a total for the reported
/// staff categories. Blank amounts hold zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryFund {
    /// Reporting year.
    pub year: i32,
    /// Organization tax id; read but never emitted.
    pub inn: String,
    /// Organization registration code; read but never emitted.
    pub kpp: String,
    /// Government body classifier code (ОКОГУ).
    pub okogu: i64,
    /// `РасхОбщФед`.
    pub federal_budget_total: Decimal,
    /// `РасхКатФед`.
    pub federal_budget_category: Decimal,
    /// `РасхОбщСуб`.
    pub regional_budget_total: Decimal,
    /// `РасхКатСуб`.
    pub regional_budget_category: Decimal,
    /// `РасхОбщМун`.
    pub municipal_budget_total: Decimal,
    /// `РасхКатМун`.
    pub municipal_budget_category: Decimal,
    /// `РасхОбщОМС`.
    pub medical_insurance_total: Decimal,
    /// `РасхКатОМС`.
    pub medical_insurance_category: Decimal,
}

impl SheetRecord for SalaryFund {
    const SHEET: &'static str = "Раздел 2";
    const HEADER_ROWS: usize = 4;

    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::row("year", "Год", |r| XmlValue::Int(i64::from(r.year))),
        FieldSpec::new("inn", "ИНН", FieldScope::Identity, |r| {
            XmlValue::Text(r.inn.clone())
        }),
        FieldSpec::new("kpp", "КПП", FieldScope::Identity, |r| {
            XmlValue::Text(r.kpp.clone())
        }),
        FieldSpec::new("okogu", "ОКОГУ", FieldScope::Organization, |r| {
            XmlValue::Int(r.okogu)
        }),
        FieldSpec::row("federal_budget_total", "РасхОбщФед", |r| {
            XmlValue::Amount(r.federal_budget_total)
        }),
        FieldSpec::row("federal_budget_category", "РасхКатФед", |r| {
            XmlValue::Amount(r.federal_budget_category)
        }),
        FieldSpec::row("regional_budget_total", "РасхОбщСуб", |r| {
            XmlValue::Amount(r.regional_budget_total)
        }),
        FieldSpec::row("regional_budget_category", "РасхКатСуб", |r| {
            XmlValue::Amount(r.regional_budget_category)
        }),
        FieldSpec::row("municipal_budget_total", "РасхОбщМун", |r| {
            XmlValue::Amount(r.municipal_budget_total)
        }),
        FieldSpec::row("municipal_budget_category", "РасхКатМун", |r| {
            XmlValue::Amount(r.municipal_budget_category)
        }),
        FieldSpec::row("medical_insurance_total", "РасхОбщОМС", |r| {
            XmlValue::Amount(r.medical_insurance_total)
        }),
        FieldSpec::row("medical_insurance_category", "РасхКатОМС", |r| {
            XmlValue::Amount(r.medical_insurance_category)
        }),
    ];

    fn from_row(row: &mut RowCursor<'_, Self>, _config: &ReportConfig) -> ReportResult<Self> {
        Ok(Self {
            year: row.year()?,
            inn: row.optional_text()?,
            kpp: row.optional_text()?,
            okogu: row.int()?,
            federal_budget_total: row.amount()?,
            federal_budget_category: row.amount()?,
            regional_budget_total: row.amount()?,
            regional_budget_category: row.amount()?,
            municipal_budget_total: row.amount()?,
            municipal_budget_category: row.amount()?,
            medical_insurance_total: row.amount()?,
            medical_insurance_category: row.amount()?,
        })
    }
}
