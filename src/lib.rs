//! Employee dataset report generator.
//!
//! Four stages run in order: obtain the dataset (generating it when absent),
//! count one department, render the department chart, and write an HTML
//! report with the chart embedded as a data URI.

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod render;
pub mod stats;

pub use config::ReportConfig;
pub use dataset::{Dataset, DatasetSource, EmployeeRecord};
pub use error::{ReportError, Result};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: DatasetSource,
    pub records: usize,
    pub frequency: usize,
}

/// Run the whole pipeline. Any stage failure aborts the run.
pub fn run(config: &ReportConfig) -> Result<RunSummary> {
    // 1) Dataset.
    let (data, source) = dataset::obtain_dataset(&config.dataset_path, config.seed, config.rows)?;
    match source {
        DatasetSource::Generated => diagnostics::status(format!(
            "dataset: generated {} synthetic employees at {}",
            data.len(),
            config.dataset_path.display()
        )),
        DatasetSource::Loaded => diagnostics::status(format!(
            "dataset: loaded {} employees from {}",
            data.len(),
            config.dataset_path.display()
        )),
    }

    // 2) Aggregate.
    let label = config.frequency_label();
    let frequency = stats::count_department(&data, &config.department);
    diagnostics::status(format!("{}: {}", label, frequency));

    // 3) Chart.
    if data.is_empty() {
        diagnostics::warn("dataset has no records; chart will have no bars");
    }
    render::render_department_distribution(&data, &config.chart_path)?;
    diagnostics::status(format!("chart: wrote {}", config.chart_path.display()));

    // 4) Report.
    render::write_report(
        &config.report_path,
        &config.contact,
        &label,
        frequency,
        &config.chart_path,
    )?;
    diagnostics::status(format!("report: wrote {}", config.report_path.display()));

    Ok(RunSummary {
        source,
        records: data.len(),
        frequency,
    })
}
