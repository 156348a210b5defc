//! One report run: workbook in, XML file out.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::grouping::group_by_period;
use crate::loader::{
    SheetSource, XlsxWorkbook, load_executive_salaries, load_salary, load_salary_fund,
};
use crate::models::{ExecutiveSalary, Period, Salary, SalaryFund};
use crate::xml::{SystemInfo, XmlElement, build_document, write_to_file};

/// The validated contents of the three report sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportData {
    /// Sheet `Раздел 1`; empty when that sheet failed validation.
    pub salaries: Vec<Salary>,
    /// Sheet `Раздел 2`.
    pub funds: Vec<SalaryFund>,
    /// Sheet `Раздел 3`.
    pub executives: Vec<ExecutiveSalary>,
}

impl ReportData {
    /// Reads all three sheets from `source`.
    ///
    /// The source is consumed and closed before this returns, whether or
    /// not loading succeeded.
    pub fn load<S: SheetSource>(mut source: S, config: &ReportConfig) -> ReportResult<Self> {
        let salaries = load_salary(&mut source, config)?;
        let funds = load_salary_fund(&mut source, config)?;
        let executives = load_executive_salaries(&mut source, config)?;
        drop(source);

        if salaries.is_empty() {
            warn!("Report has no salary records");
        }
        Ok(Self {
            salaries,
            funds,
            executives,
        })
    }

    /// Groups the salary records and builds the document tree.
    pub fn to_document(&self, info: &SystemInfo) -> XmlElement {
        let periods = group_by_period(&self.salaries);
        info!(
            periods = periods.len(),
            records = periods.iter().map(Period::record_count).sum::<usize>(),
            "Building report document"
        );
        build_document(
            &periods,
            &self.salaries,
            &self.funds,
            &self.executives,
            info,
        )
    }
}

/// Output file name: `ПФР_{code_to}_СИоЗП_{reg_number}_{YYYYMMDD}_{guid}.xml`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sizp_report::config::ReportConfig;
/// use sizp_report::report::report_file_name;
/// use sizp_report::xml::SystemInfo;
/// use uuid::Uuid;
///
/// let info = SystemInfo {
///     guid: Uuid::nil(),
///     created_at: NaiveDate::from_ymd_opt(2021, 4, 10).unwrap().and_hms_opt(9, 0, 0).unwrap(),
/// };
/// assert_eq!(
///     report_file_name(&ReportConfig::default(), &info),
///     "ПФР_201000_СИоЗП_034012008689_20210410_00000000-0000-0000-0000-000000000000.xml"
/// );
/// ```
pub fn report_file_name(config: &ReportConfig, info: &SystemInfo) -> String {
    format!(
        "ПФР_{}_СИоЗП_{}_{}_{}.xml",
        config.code_to,
        config.reg_number,
        info.created_at.format("%Y%m%d"),
        info.guid
    )
}

/// Writes the report for `data` into `output_dir`, creating the directory
/// if needed, and returns the written path.
pub fn write_report(
    data: &ReportData,
    config: &ReportConfig,
    output_dir: &Path,
    info: &SystemInfo,
) -> ReportResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;
    let document = data.to_document(info);
    let path = write_to_file(
        &document,
        output_dir,
        &report_file_name(config, info),
        config.output_style,
    )?;
    info!(path = %path.display(), "Report written");
    Ok(path)
}

/// Runs the whole pipeline for the workbook and output directory that
/// `config` names relative to `base_dir`.
pub fn generate_report(config: &ReportConfig, base_dir: &Path) -> ReportResult<PathBuf> {
    let input = config.report_path(base_dir);
    info!(path = %input.display(), "Reading workbook");
    let data = ReportData::load(XlsxWorkbook::open(&input)?, config)?;
    info!(
        salaries = data.salaries.len(),
        funds = data.funds.len(),
        executives = data.executives.len(),
        "Loaded report data"
    );
    write_report(&data, config, &config.output_path(base_dir), &SystemInfo::now())
}
