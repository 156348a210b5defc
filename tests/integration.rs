//! Integration tests for the СИоЗП report generator.
//!
//! This test suite drives the whole pipeline:
//! - In-memory workbooks through loading, grouping and emission
//! - Degraded output when the salary sheet fails validation
//! - Fatal errors from the fund sheet
//! - A real `.xlsx` file through `generate_report`

use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Workbook, XlsxError};
use uuid::Uuid;

use sizp_report::config::{OutputStyle, ReportConfig};
use sizp_report::error::ReportError;
use sizp_report::loader::InMemoryWorkbook;
use sizp_report::models::CellValue;
use sizp_report::report::{ReportData, generate_report, report_file_name};
use sizp_report::xml::{SystemInfo, XmlElement, to_xml_string};

// =============================================================================
// Test Helpers
// =============================================================================

fn info() -> SystemInfo {
    SystemInfo {
        guid: Uuid::parse_str("6f9619ff-8b86-d011-b42d-00c04fc964ff").unwrap(),
        created_at: NaiveDate::from_ymd_opt(2021, 4, 12)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap(),
    }
}

fn header(rows: usize) -> Vec<Vec<CellValue>> {
    (0..rows)
        .map(|i| vec![CellValue::Text(format!("Заголовок {}", i + 1))])
        .collect()
}

/// A valid `Раздел 1` row for `snils`/`name` in March 2021.
fn salary_row(snils: &str, name: &str, month: CellValue) -> Vec<CellValue> {
    let mut cells = vec![
        CellValue::Int(2021),
        month,
        CellValue::from("7701234567"),
        CellValue::from("770101001"),
        CellValue::Int(14),
        CellValue::from("1"),
        CellValue::from(name),
        CellValue::from(snils),
        CellValue::Int(8),
        CellValue::from("Медицинская сестра"),
        CellValue::Empty,
        CellValue::from("Внутреннее совместительство"),
        CellValue::Float(0.5),
        CellValue::Float(84.0),
        CellValue::Float(84.0),
        CellValue::Float(15_000.0),
        CellValue::Empty,
    ];
    cells.extend(std::iter::repeat_n(CellValue::Empty, 5));
    cells.push(CellValue::from("3 года 2 мес"));
    cells.extend(std::iter::repeat_n(CellValue::Empty, 11));
    cells.push(CellValue::Float(15_000.0));
    cells
}

fn fund_row(okogu: CellValue) -> Vec<CellValue> {
    let mut cells = vec![
        CellValue::Int(2021),
        CellValue::from("7701234567"),
        CellValue::from("770101001"),
        okogu,
        CellValue::Float(1_200_000.0),
        CellValue::Empty,
    ];
    cells.extend(std::iter::repeat_n(CellValue::Float(10_000.0), 6));
    cells
}

fn executive_row() -> Vec<CellValue> {
    vec![
        CellValue::Int(2021),
        CellValue::Empty,
        CellValue::Empty,
        CellValue::Float(95_000.0),
        CellValue::Float(71_000.0),
        CellValue::Float(64_000.0),
        CellValue::Float(42_000.5),
    ]
}

fn workbook(
    salaries: Vec<Vec<CellValue>>,
    funds: Vec<Vec<CellValue>>,
    executives: Vec<Vec<CellValue>>,
) -> InMemoryWorkbook {
    let with_header = |skip: usize, rows: Vec<Vec<CellValue>>| {
        let mut all = header(skip);
        all.extend(rows);
        all
    };
    InMemoryWorkbook::new()
        .with_sheet("Раздел 1", with_header(5, salaries))
        .with_sheet("Раздел 2", with_header(4, funds))
        .with_sheet("Раздел 3", with_header(3, executives))
}

fn report_section<'a>(document: &'a XmlElement, name: &str) -> &'a XmlElement {
    document.children[0]
        .child(name)
        .unwrap_or_else(|| panic!("missing section {name}"))
}

// =============================================================================
// SECTION 1: In-memory pipeline
// =============================================================================

#[test]
fn test_two_employees_in_march_2021() {
    let source = workbook(
        vec![
            salary_row("222-333-444 55", "Петрова Анна Сергеевна", CellValue::from("Март")),
            salary_row("111-222-333 44", "Иванова Мария Петровна", CellValue::Int(3)),
        ],
        vec![fund_row(CellValue::Int(2300229))],
        vec![executive_row()],
    );
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    let document = data.to_document(&info());

    let periods: Vec<&XmlElement> = report_section(&document, "СЗП")
        .children_named("Период")
        .collect();
    assert_eq!(periods.len(), 1);

    let reporting = periods[0].child("ОтчетныйПериод").unwrap();
    assert_eq!(reporting.child_text("Год"), Some("2021"));
    assert_eq!(reporting.child_text("Месяц"), Some("3"));

    assert_eq!(periods[0].children_named("Работник").count(), 1);
    let workers = periods[0].child("Работник").unwrap();

    // Each worker entry is a ФИО / СНИЛС / ОбщийСтаж group followed by its
    // СЗПД details.
    let layout: Vec<&str> = workers.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        layout,
        vec![
            "УТ2:ФИО",
            "УТ2:СНИЛС",
            "ОбщийСтаж",
            "СЗПД",
            "УТ2:ФИО",
            "УТ2:СНИЛС",
            "ОбщийСтаж",
            "СЗПД"
        ]
    );
    let snils: Vec<&str> = workers
        .children_named("УТ2:СНИЛС")
        .filter_map(|n| n.text.as_deref())
        .collect();
    assert_eq!(snils, vec!["111-222-333 44", "222-333-444 55"]);
}

#[test]
fn test_salary_detail_values() {
    let source = workbook(
        vec![salary_row("111", "Иванова Мария Петровна", CellValue::Int(3))],
        vec![fund_row(CellValue::Int(2300229))],
        vec![],
    );
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    let document = data.to_document(&info());

    let detail = report_section(&document, "СЗП")
        .child("Период")
        .and_then(|p| p.child("Работник"))
        .and_then(|w| w.child("СЗПД"))
        .unwrap();
    assert_eq!(detail.child_text("ККП"), Some("600"));
    assert_eq!(detail.child_text("УсловиеЗанятости"), Some("3"));
    assert_eq!(detail.child_text("Ставка"), Some("0.50"));
    assert_eq!(detail.child_text("ОУТ"), Some("0"));
    assert_eq!(detail.child_text("НепрерывныйСтаж"), Some("03.02"));
    assert_eq!(detail.child_text("КвалКатегория"), Some("0"));
    assert_eq!(detail.child_text("НачисленияИтого"), Some("15000.00"));
}

#[test]
fn test_blank_fund_amount_renders_zero() {
    let source = workbook(vec![], vec![fund_row(CellValue::Int(2300229))], vec![]);
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    let document = data.to_document(&info());

    let period = report_section(&document, "ФондЗП").child("Период").unwrap();
    assert_eq!(period.child_text("РасхОбщФед"), Some("1200000.00"));
    assert_eq!(period.child_text("РасхКатФед"), Some("0.00"));
}

#[test]
fn test_organization_block() {
    let source = workbook(
        vec![salary_row("111", "Иванова Мария", CellValue::Int(3))],
        vec![fund_row(CellValue::Int(2300229))],
        vec![executive_row()],
    );
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    let document = data.to_document(&info());

    let organization = report_section(&document, "Организация");
    assert_eq!(organization.child_text("УТ2:ИНН"), Some("7701234567"));
    assert_eq!(organization.child_text("УТ2:КПП"), Some("770101001"));
    assert_eq!(organization.child_text("ОКФС"), Some("14"));
    assert_eq!(organization.child_text("КТО"), Some("1"));
    assert_eq!(organization.child_text("ОКОГУ"), Some("2300229"));
}

#[test]
fn test_invalid_salary_sheet_still_produces_report() {
    let mut bad = salary_row("111", "Иванова Мария", CellValue::Int(3));
    bad[10] = CellValue::Int(999);
    let source = workbook(
        vec![salary_row("222", "Петрова Анна", CellValue::Int(3)), bad],
        vec![fund_row(CellValue::Int(2300229))],
        vec![executive_row()],
    );
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    assert!(data.salaries.is_empty());
    assert_eq!(data.funds.len(), 1);

    let document = data.to_document(&info());
    assert!(report_section(&document, "СЗП").children.is_empty());
    assert_eq!(
        report_section(&document, "ФондЗП")
            .children_named("Период")
            .count(),
        1
    );
}

#[test]
fn test_invalid_fund_sheet_aborts() {
    let source = workbook(
        vec![],
        vec![
            fund_row(CellValue::Int(2300229)),
            fund_row(CellValue::from("нет")),
        ],
        vec![],
    );
    match ReportData::load(source, &ReportConfig::default()) {
        Err(ReportError::BatchValidation { sheet, failures }) => {
            assert_eq!(sheet, "Раздел 2");
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].row, 6);
        }
        other => panic!("Expected BatchValidation, got {other:?}"),
    }
}

#[test]
fn test_serialized_document() {
    let source = workbook(
        vec![salary_row("111", "Иванова Мария", CellValue::Int(3))],
        vec![fund_row(CellValue::Int(2300229))],
        vec![executive_row()],
    );
    let data = ReportData::load(source, &ReportConfig::default()).unwrap();
    let xml = to_xml_string(&data.to_document(&info()), OutputStyle::Compact).unwrap();

    assert!(xml.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><ЭДПФР xmlns=\"http://пф.рф/СИоЗП/2021-03-15\" \
         xmlns:УТ2=\"http://пф.рф/УТ/2017-08-21\" xmlns:АФ5=\"http://пф.рф/АФ/2018-12-07\"><СИоЗП>"
    ));
    assert!(xml.contains("<УТ2:ФИО><УТ2:Фамилия>Иванова</УТ2:Фамилия><УТ2:Имя>Мария</УТ2:Имя><УТ2:Отчество/></УТ2:ФИО>"));
    assert!(xml.contains("<СредЗПРук>95000.00</СредЗПРук>"));
    assert!(xml.contains("<РасхОбщФед>42000.50</РасхОбщФед>"));
    assert!(xml.ends_with(
        "<СлужебнаяИнформация><АФ5:GUID>6f9619ff-8b86-d011-b42d-00c04fc964ff</АФ5:GUID>\
         <АФ5:ДатаВремя>2021-04-12T10:15:00</АФ5:ДатаВремя></СлужебнаяИнформация></СИоЗП></ЭДПФР>"
    ));
}

// =============================================================================
// SECTION 2: Workbook file end to end
// =============================================================================

fn write_rows(
    workbook: &mut Workbook,
    name: &str,
    rows: &[Vec<CellValue>],
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet().set_name(name)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                CellValue::Empty => {}
                CellValue::Int(value) => {
                    sheet.write_number(r, c, *value as f64)?;
                }
                CellValue::Float(value) => {
                    sheet.write_number(r, c, *value)?;
                }
                CellValue::Text(text) => {
                    sheet.write_string(r, c, text)?;
                }
                CellValue::Bool(value) => {
                    sheet.write_boolean(r, c, *value)?;
                }
            }
        }
    }
    Ok(())
}

fn write_fixture(path: &Path, salaries: Vec<Vec<CellValue>>) {
    let with_header = |skip: usize, rows: Vec<Vec<CellValue>>| {
        let mut all = header(skip);
        all.extend(rows);
        all
    };
    let mut workbook = Workbook::new();
    write_rows(&mut workbook, "Раздел 1", &with_header(5, salaries)).unwrap();
    write_rows(
        &mut workbook,
        "Раздел 2",
        &with_header(4, vec![fund_row(CellValue::Int(2300229))]),
    )
    .unwrap();
    write_rows(&mut workbook, "Раздел 3", &with_header(3, vec![executive_row()])).unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn test_generate_report_from_xlsx() {
    let base = tempfile::tempdir().unwrap();
    std::fs::create_dir(base.path().join("input")).unwrap();
    write_fixture(
        &base.path().join("input").join("example.xlsx"),
        vec![
            salary_row("111", "Иванова Мария Петровна", CellValue::from("марта")),
            salary_row("222", "Петрова Анна", CellValue::from("апреля")),
        ],
    );

    let config = ReportConfig::default();
    let path = generate_report(&config, base.path()).unwrap();

    assert_eq!(path.parent(), Some(base.path().join("output").as_path()));
    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("ПФР_201000_СИоЗП_034012008689_"));
    assert!(file_name.ends_with(".xml"));

    let guid = file_name
        .trim_end_matches(".xml")
        .rsplit('_')
        .next()
        .unwrap();
    let xml = std::fs::read_to_string(&path).unwrap();
    assert!(xml.contains(&format!("<АФ5:GUID>{guid}</АФ5:GUID>")));
    assert!(xml.contains("\t<СИоЗП>"));
    assert_eq!(xml.matches("<Работник>").count(), 2);
    assert_eq!(xml.matches("<УТ2:ФИО>").count(), 2);
    assert_eq!(xml.matches("<ОтчетныйПериод>").count(), 2);
    assert!(xml.contains("<УТ2:ИНН>7701234567</УТ2:ИНН>"));
    assert!(xml.contains("<ОКОГУ>2300229</ОКОГУ>"));

    let entries = std::fs::read_dir(base.path().join("output")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_generate_report_compact_style() {
    let base = tempfile::tempdir().unwrap();
    std::fs::create_dir(base.path().join("in")).unwrap();
    write_fixture(
        &base.path().join("in").join("march.xlsx"),
        vec![salary_row("111", "Иванова Мария", CellValue::Int(3))],
    );

    let config = ReportConfig {
        report: "march.xlsx".to_string(),
        input_dir: "in".into(),
        output_dir: "out".into(),
        output_style: OutputStyle::Compact,
        ..Default::default()
    };
    let path = generate_report(&config, base.path()).unwrap();
    let xml = std::fs::read_to_string(&path).unwrap();
    assert!(!xml.contains('\n'));
    assert!(xml.contains("<ККП>600</ККП>"));
}

#[test]
fn test_missing_sheet_in_xlsx() {
    let base = tempfile::tempdir().unwrap();
    let path = base.path().join("partial.xlsx");
    let mut workbook = Workbook::new();
    write_rows(&mut workbook, "Раздел 1", &header(5)).unwrap();
    workbook.save(&path).unwrap();

    let config = ReportConfig {
        report: "partial.xlsx".to_string(),
        input_dir: ".".into(),
        ..Default::default()
    };
    match generate_report(&config, base.path()) {
        Err(ReportError::MissingSheet { sheet }) => assert_eq!(sheet, "Раздел 2"),
        other => panic!("Expected MissingSheet, got {other:?}"),
    }
    assert!(!base.path().join("output").exists());
}

#[test]
fn test_file_name_matches_document_guid() {
    let name = report_file_name(&ReportConfig::default(), &info());
    assert_eq!(
        name,
        "ПФР_201000_СИоЗП_034012008689_20210412_6f9619ff-8b86-d011-b42d-00c04fc964ff.xml"
    );
}
