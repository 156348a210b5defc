//! Per-employee monthly salary record (sheet `Раздел 1`).

use rust_decimal::Decimal;
use tracing::error;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::normalize::{
    AcademicDegree, EmploymentCondition, LabelSet, PersonName, QualificationCategory,
    decompose_full_name, month_number, normalize_experience, ordinal_of,
};

use super::constraints::{at_least, between, exact_digits};
use super::field::{FieldScope, FieldSpec, XmlValue};
use super::record::{RowCursor, SheetRecord, required};

/// Staff category code used when the cell is blank.
pub const DEFAULT_STAFF_CATEGORY_CODE: i64 = 600;

/// One employee's accruals for one month.
///
/// Optional amounts that were blank in the sheet hold zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    /// Reporting year.
    pub year: i32,
    /// Reporting month, 1-12.
    pub month: u32,
    /// Organization tax id (ИНН), 10 digits.
    pub inn: String,
    /// Organization registration code (КПП), 9 digits.
    pub kpp: String,
    /// Ownership class code (ОКФС), 12-14.
    pub okfs: i64,
    /// Organization type (КТО).
    pub org_type: String,
    /// Employee full name as written in the sheet.
    pub employee_name: String,
    /// Decomposed `employee_name`.
    pub name: PersonName,
    /// Insurance number (СНИЛС).
    pub snils: String,
    /// Total years of experience.
    pub work_experience: i64,
    /// Position title.
    pub position: String,
    /// Staff category code (ККП).
    pub staff_category_code: i64,
    /// Employment condition; `None` when blank.
    pub employment_conditions: Option<EmploymentCondition>,
    /// Work fraction, 0-1.
    pub bid: Decimal,
    /// Scheduled working hours.
    pub number_working_hours_according: Decimal,
    /// Hours actually worked.
    pub actual_time_worked: Decimal,
    /// `НачисленияТариф`.
    pub accruals_based_on_tariff_rates: Decimal,
    /// Working conditions hazard class; 0 when blank.
    pub hazard_class: i64,
    /// `НачисленияОУТ`.
    pub accruals_for_hazard_class: Decimal,
    /// `ДоплатаСовмещение`.
    pub additional_payment_for_combining: Decimal,
    /// `НачисленияИныеФед`.
    pub other_compensation_payments: Decimal,
    /// `НачисленияИныеРег`.
    pub other_compensation_payments_regional: Decimal,
    /// `НачисленияПремии`.
    pub awards: Decimal,
    /// Continuous experience, normalized to `YY.MM`.
    pub experience_for_additional_payments: String,
    /// `ДоплатаСтаж`.
    pub payment_for_work_experience: Decimal,
    /// `ДоплатаСМ`.
    pub rural_surcharge: Decimal,
    /// Qualification category; `None` when blank.
    pub qualification_category: Option<QualificationCategory>,
    /// `ДоплатаКвалКат`.
    pub additional_payment_for_presence_of_qualifying_category: Decimal,
    /// Academic degree; `None` when blank.
    pub academic_degree: Option<AcademicDegree>,
    /// `ДоплатаУС`.
    pub additional_payment_for_academic_degree: Decimal,
    /// `ДоплатаНаставничество`.
    pub additional_payment_for_mentoring: Decimal,
    /// `ДоплатаМолодСпец`.
    pub additional_payment_young_specialists: Decimal,
    /// `ВыплатыИныеСтимул`.
    pub other_additional_payment: Decimal,
    /// `ВыплатыПрочие`.
    pub other_payments: Decimal,
    /// `ВыплатыКомпенс`.
    pub compensation_payments_for_district_regulation: Decimal,
    /// Total accrued.
    pub total_accruals: Decimal,
}

fn code<L: LabelSet>(label: Option<L>) -> XmlValue {
    XmlValue::Int(label.map_or(0, |member| i64::from(member.code())))
}

fn text(value: &str) -> XmlValue {
    XmlValue::Text(value.to_string())
}

impl SheetRecord for Salary {
    const SHEET: &'static str = "Раздел 1";
    const HEADER_ROWS: usize = 5;

    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::row("year", "Год", |r| XmlValue::Int(i64::from(r.year))),
        FieldSpec::row("month", "Месяц", |r| XmlValue::Int(i64::from(r.month))),
        FieldSpec::new("inn", "УТ2:ИНН", FieldScope::Organization, |r| text(&r.inn)),
        FieldSpec::new("kpp", "УТ2:КПП", FieldScope::Organization, |r| text(&r.kpp)),
        FieldSpec::new("okfs", "ОКФС", FieldScope::Organization, |r| {
            XmlValue::Int(r.okfs)
        }),
        FieldSpec::new("org_type", "КТО", FieldScope::Organization, |r| {
            text(&r.org_type)
        }),
        FieldSpec::new("employee_name", "УТ2:ФИО", FieldScope::Employee, |r| {
            text(&r.employee_name)
        }),
        FieldSpec::new("snils", "УТ2:СНИЛС", FieldScope::Employee, |r| text(&r.snils)),
        FieldSpec::new("work_experience", "ОбщийСтаж", FieldScope::Employee, |r| {
            XmlValue::Int(r.work_experience)
        }),
        FieldSpec::row("position", "Должность", |r| text(&r.position)),
        FieldSpec::row("staff_category_code", "ККП", |r| {
            XmlValue::Int(r.staff_category_code)
        }),
        FieldSpec::row("employment_conditions", "УсловиеЗанятости", |r| {
            code(r.employment_conditions)
        }),
        FieldSpec::row("bid", "Ставка", |r| XmlValue::Amount(r.bid)),
        FieldSpec::row("number_working_hours_according", "РабВремяНорма", |r| {
            XmlValue::Amount(r.number_working_hours_according)
        }),
        FieldSpec::row("actual_time_worked", "РабВремяФакт", |r| {
            XmlValue::Amount(r.actual_time_worked)
        }),
        FieldSpec::row("accruals_based_on_tariff_rates", "НачисленияТариф", |r| {
            XmlValue::Amount(r.accruals_based_on_tariff_rates)
        }),
        FieldSpec::row("hazard_class", "ОУТ", |r| XmlValue::Int(r.hazard_class)),
        FieldSpec::row("accruals_for_hazard_class", "НачисленияОУТ", |r| {
            XmlValue::Amount(r.accruals_for_hazard_class)
        }),
        FieldSpec::row("additional_payment_for_combining", "ДоплатаСовмещение", |r| {
            XmlValue::Amount(r.additional_payment_for_combining)
        }),
        FieldSpec::row("other_compensation_payments", "НачисленияИныеФед", |r| {
            XmlValue::Amount(r.other_compensation_payments)
        }),
        FieldSpec::row(
            "other_compensation_payments_regional",
            "НачисленияИныеРег",
            |r| XmlValue::Amount(r.other_compensation_payments_regional),
        ),
        FieldSpec::row("awards", "НачисленияПремии", |r| XmlValue::Amount(r.awards)),
        FieldSpec::row(
            "experience_for_additional_payments",
            "НепрерывныйСтаж",
            |r| text(&r.experience_for_additional_payments),
        ),
        FieldSpec::row("payment_for_work_experience", "ДоплатаСтаж", |r| {
            XmlValue::Amount(r.payment_for_work_experience)
        }),
        FieldSpec::row("rural_surcharge", "ДоплатаСМ", |r| {
            XmlValue::Amount(r.rural_surcharge)
        }),
        FieldSpec::row("qualification_category", "КвалКатегория", |r| {
            code(r.qualification_category)
        }),
        FieldSpec::row(
            "additional_payment_for_presence_of_qualifying_category",
            "ДоплатаКвалКат",
            |r| XmlValue::Amount(r.additional_payment_for_presence_of_qualifying_category),
        ),
        FieldSpec::row("academic_degree", "УченаяСтепень", |r| {
            code(r.academic_degree)
        }),
        FieldSpec::row("additional_payment_for_academic_degree", "ДоплатаУС", |r| {
            XmlValue::Amount(r.additional_payment_for_academic_degree)
        }),
        FieldSpec::row(
            "additional_payment_for_mentoring",
            "ДоплатаНаставничество",
            |r| XmlValue::Amount(r.additional_payment_for_mentoring),
        ),
        FieldSpec::row(
            "additional_payment_young_specialists",
            "ДоплатаМолодСпец",
            |r| XmlValue::Amount(r.additional_payment_young_specialists),
        ),
        FieldSpec::row("other_additional_payment", "ВыплатыИныеСтимул", |r| {
            XmlValue::Amount(r.other_additional_payment)
        }),
        FieldSpec::row("other_payments", "ВыплатыПрочие", |r| {
            XmlValue::Amount(r.other_payments)
        }),
        FieldSpec::row(
            "compensation_payments_for_district_regulation",
            "ВыплатыКомпенс",
            |r| XmlValue::Amount(r.compensation_payments_for_district_regulation),
        ),
        FieldSpec::row("total_accruals", "НачисленияИтого", |r| {
            XmlValue::Amount(r.total_accruals)
        }),
    ];

    fn from_row(row: &mut RowCursor<'_, Self>, config: &ReportConfig) -> ReportResult<Self> {
        let year = row.year()?;
        let month = read_month(row)?;

        let inn = row.text()?;
        exact_digits("inn", &inn, 10)?;
        let kpp = row.text()?;
        exact_digits("kpp", &kpp, 9)?;
        let okfs = row.int()?;
        between("okfs", okfs, 12, 14)?;
        let org_type = row.text()?;

        let employee_name = row.text()?;
        let name = decompose_full_name(&employee_name)?;
        let snils = row.text()?;
        let work_experience = row.int()?;
        let position = row.text()?;

        let staff_category_code = row.int_or(DEFAULT_STAFF_CATEGORY_CODE)?;
        if !config.is_allowed_category(staff_category_code) {
            error!(
                value = staff_category_code,
                allowed = ?config.allow_category_code,
                "Staff category code is not allowed"
            );
            return Err(ReportError::ConstraintViolation {
                field: "staff_category_code",
                value: staff_category_code.to_string(),
                constraint: format!("one of {:?}", config.allow_category_code),
            });
        }

        let employment_conditions = ordinal_of::<EmploymentCondition>(&row.optional_text()?)?;

        let bid = row.decimal()?;
        between("bid", bid, Decimal::ZERO, Decimal::ONE)?;
        let number_working_hours_according = row.decimal()?;
        at_least(
            "number_working_hours_according",
            number_working_hours_according,
            Decimal::ZERO,
        )?;
        let actual_time_worked = row.decimal()?;
        at_least("actual_time_worked", actual_time_worked, Decimal::ZERO)?;

        let accruals_based_on_tariff_rates = row.amount()?;
        let hazard_class = row.int_or(0)?;
        let accruals_for_hazard_class = row.amount()?;
        let additional_payment_for_combining = row.amount()?;
        let other_compensation_payments = row.amount()?;
        let other_compensation_payments_regional = row.amount()?;
        let awards = row.amount()?;
        let experience_for_additional_payments = normalize_experience(&row.text()?)?;
        let payment_for_work_experience = row.amount()?;
        let rural_surcharge = row.amount()?;
        let qualification_category = ordinal_of::<QualificationCategory>(&row.optional_text()?)?;
        let additional_payment_for_presence_of_qualifying_category = row.amount()?;
        let academic_degree = ordinal_of::<AcademicDegree>(&row.optional_text()?)?;

        Ok(Self {
            year,
            month,
            inn,
            kpp,
            okfs,
            org_type,
            employee_name,
            name,
            snils,
            work_experience,
            position,
            staff_category_code,
            employment_conditions,
            bid,
            number_working_hours_according,
            actual_time_worked,
            accruals_based_on_tariff_rates,
            hazard_class,
            accruals_for_hazard_class,
            additional_payment_for_combining,
            other_compensation_payments,
            other_compensation_payments_regional,
            awards,
            experience_for_additional_payments,
            payment_for_work_experience,
            rural_surcharge,
            qualification_category,
            additional_payment_for_presence_of_qualifying_category,
            academic_degree,
            additional_payment_for_academic_degree: row.amount()?,
            additional_payment_for_mentoring: row.amount()?,
            additional_payment_young_specialists: row.amount()?,
            other_additional_payment: row.amount()?,
            other_payments: row.amount()?,
            compensation_payments_for_district_regulation: row.amount()?,
            total_accruals: row.amount()?,
        })
    }
}

/// Month cells hold either a number or a Russian month name.
fn read_month(row: &mut RowCursor<'_, Salary>) -> ReportResult<u32> {
    let (field, cell) = row.take()?;
    match cell.as_int() {
        Ok(Some(number)) => {
            between(field, number, 1, 12)?;
            Ok(number as u32)
        }
        Ok(None) => Err(required(field)),
        Err(_) => month_number(&cell.as_text().unwrap_or_default()),
    }
}
