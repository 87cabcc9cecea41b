//! Fixed locations and parameters for a report run.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET_PATH: &str = "employee_data.csv";
pub const DEFAULT_CHART_PATH: &str = "department_hist.png";
pub const DEFAULT_REPORT_PATH: &str = "employee_report.html";
pub const DEFAULT_CONTACT: &str = "24f1002401@ds.study.iitm.ac.in";
pub const DEFAULT_DEPARTMENT: &str = "HR";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: usize = 100;

/// Everything a run needs; the binary always uses [`ReportConfig::default`].
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// CSV dataset, loaded if present, generated otherwise.
    pub dataset_path: PathBuf,

    /// PNG side artifact of the chart stage.
    pub chart_path: PathBuf,

    /// HTML report, overwritten on every run.
    pub report_path: PathBuf,

    /// Contact identifier shown in the report.
    pub contact: String,

    /// Department whose frequency is reported.
    pub department: String,

    /// Seed for synthetic generation.
    pub seed: u64,

    /// Number of synthetic records.
    pub rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            contact: DEFAULT_CONTACT.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROWS,
        }
    }
}

impl ReportConfig {
    /// Default configuration with the three files placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dataset_path: dir.join(DEFAULT_DATASET_PATH),
            chart_path: dir.join(DEFAULT_CHART_PATH),
            report_path: dir.join(DEFAULT_REPORT_PATH),
            ..Self::default()
        }
    }

    /// Label used for the statistic, e.g. "Frequency count for HR department".
    pub fn frequency_label(&self) -> String {
        format!("Frequency count for {} department", self.department)
    }
}
