//! Builds the СИоЗП document tree.

use chrono::{Local, NaiveDateTime};
use tracing::warn;
use uuid::Uuid;

use crate::models::{
    Employee, ExecutiveSalary, FieldScope, Period, Salary, SalaryFund, SheetRecord, XmlValue,
};

use super::node::XmlElement;

/// Default namespace of the form.
pub const SIZP_NS: &str = "http://пф.рф/СИоЗП/2021-03-15";
/// Namespace of shared accounting types (`УТ2:`).
pub const UT2_NS: &str = "http://пф.рф/УТ/2017-08-21";
/// Namespace of document envelope types (`АФ5:`).
pub const AF5_NS: &str = "http://пф.рф/АФ/2018-12-07";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Identity of one generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInfo {
    /// Document id, also used in the file name.
    pub guid: Uuid,
    /// Local creation time.
    pub created_at: NaiveDateTime,
}

impl SystemInfo {
    /// A fresh random id stamped with the current local time.
    pub fn now() -> Self {
        Self {
            guid: Uuid::new_v4(),
            created_at: Local::now().naive_local(),
        }
    }
}

/// Builds the complete document.
///
/// The root `ЭДПФР` holds a single `СИоЗП` element with, in order, the
/// organization block, the per-period salary details, the salary fund,
/// the management salaries and the service information.
pub fn build_document(
    periods: &[Period<'_>],
    salaries: &[Salary],
    funds: &[SalaryFund],
    executives: &[ExecutiveSalary],
    info: &SystemInfo,
) -> XmlElement {
    let mut report = XmlElement::new("СИоЗП");
    report.push(organization(salaries, funds));
    report.push(salary_details(periods));
    report.push(flat_periods("ФондЗП", funds));
    report.push(flat_periods("СЗПРук", executives));
    report.push(service_info(info));

    let mut root = XmlElement::new("ЭДПФР")
        .attribute("xmlns", SIZP_NS)
        .attribute("xmlns:УТ2", UT2_NS)
        .attribute("xmlns:АФ5", AF5_NS);
    root.push(report);
    root
}

fn push_fields(parent: &mut XmlElement, fields: Vec<(&'static str, XmlValue)>) {
    for (tag, value) in fields {
        parent.push(XmlElement::with_text(tag, value.to_string()));
    }
}

fn organization(salaries: &[Salary], funds: &[SalaryFund]) -> XmlElement {
    let mut node = XmlElement::new("Организация");
    match salaries.first() {
        Some(salary) => push_fields(&mut node, salary.fields_in(FieldScope::Organization)),
        None => warn!("No salary records; organization block has no tax ids"),
    }
    match funds.first() {
        Some(fund) => push_fields(&mut node, fund.fields_in(FieldScope::Organization)),
        None => warn!("No salary fund records; organization block has no ОКОГУ"),
    }
    node
}

fn salary_details(periods: &[Period<'_>]) -> XmlElement {
    let mut node = XmlElement::new("СЗП");
    for period in periods {
        let mut period_node = XmlElement::new("Период");

        let mut reporting = XmlElement::new("ОтчетныйПериод");
        reporting.push(XmlElement::with_text("Год", period.year.to_string()));
        reporting.push(XmlElement::with_text("Месяц", period.month.to_string()));
        period_node.push(reporting);

        let mut workers = XmlElement::new("Работник");
        for employee in period.employees.iter().filter(|e| e.has_records()) {
            push_employee(&mut workers, employee);
        }
        period_node.push(workers);
        node.push(period_node);
    }
    node
}

/// Appends one employee's entry to the period's `Работник` block: name,
/// insurance number, experience, then one `СЗПД` per salary record.
fn push_employee(node: &mut XmlElement, employee: &Employee<'_>) {
    let mut name = XmlElement::new("УТ2:ФИО");
    name.push(XmlElement::with_text("УТ2:Фамилия", &employee.name.last));
    name.push(XmlElement::with_text("УТ2:Имя", &employee.name.first));
    name.push(XmlElement::with_text("УТ2:Отчество", &employee.name.middle));
    node.push(name);

    node.push(XmlElement::with_text("УТ2:СНИЛС", &employee.snils));
    node.push(XmlElement::with_text(
        "ОбщийСтаж",
        employee.work_experience.to_string(),
    ));

    for salary in &employee.salaries {
        let mut detail = XmlElement::new("СЗПД");
        push_fields(&mut detail, salary.fields_in(FieldScope::Row));
        node.push(detail);
    }
}

fn flat_periods<R: SheetRecord>(name: &str, records: &[R]) -> XmlElement {
    let mut node = XmlElement::new(name);
    for record in records {
        let mut period = XmlElement::new("Период");
        push_fields(&mut period, record.fields_in(FieldScope::Row));
        node.push(period);
    }
    node
}

fn service_info(info: &SystemInfo) -> XmlElement {
    let mut node = XmlElement::new("СлужебнаяИнформация");
    node.push(XmlElement::with_text("АФ5:GUID", info.guid.to_string()));
    node.push(XmlElement::with_text(
        "АФ5:ДатаВремя",
        info.created_at.format(TIMESTAMP_FORMAT).to_string(),
    ));
    node
}
