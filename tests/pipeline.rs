//! End-to-end runs of the report pipeline in scratch directories.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use employee_report::dataset::{self, EmployeeRecord};
use employee_report::render::html::DATA_URI_PREFIX;
use employee_report::{run, DatasetSource, ReportConfig, ReportError};
use std::fs;
use tempfile::TempDir;

fn embedded_png(html: &str) -> Vec<u8> {
    let start = html.find(DATA_URI_PREFIX).expect("data uri") + DATA_URI_PREFIX.len();
    let end = start + html[start..].find('"').expect("closing quote");
    STANDARD.decode(&html[start..end]).expect("valid base64")
}

fn frequency_line(html: &str) -> usize {
    let marker = "Frequency count for HR department: ";
    let start = html.find(marker).expect("frequency line") + marker.len();
    let digits: String = html[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().expect("numeric frequency")
}

#[test]
fn fresh_run_generates_all_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::in_dir(dir.path());

    let summary = run(&config).unwrap();
    assert_eq!(summary.source, DatasetSource::Generated);
    assert_eq!(summary.records, 100);

    let csv = fs::read_to_string(&config.dataset_path).unwrap();
    assert_eq!(csv.lines().count(), 101);

    let chart = fs::read(&config.chart_path).unwrap();
    assert!(!chart.is_empty());

    let html = fs::read_to_string(&config.report_path).unwrap();
    assert!(html.contains("Employee Performance Report"));
    assert!(html.contains("24f1002401@ds.study.iitm.ac.in"));
    assert!(html.contains("<img src=\"data:image/png;base64,"));

    let frequency = frequency_line(&html);
    assert!(frequency <= 100);
    assert_eq!(frequency, summary.frequency);
    assert_eq!(embedded_png(&html), chart);
}

#[test]
fn second_run_loads_the_same_dataset() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::in_dir(dir.path());

    let first = run(&config).unwrap();
    let csv_after_first = fs::read(&config.dataset_path).unwrap();

    let second = run(&config).unwrap();
    assert_eq!(second.source, DatasetSource::Loaded);
    assert_eq!(second.frequency, first.frequency);
    assert_eq!(fs::read(&config.dataset_path).unwrap(), csv_after_first);
}

#[test]
fn separate_fresh_runs_produce_identical_datasets() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let config_a = ReportConfig::in_dir(a.path());
    let config_b = ReportConfig::in_dir(b.path());

    run(&config_a).unwrap();
    run(&config_b).unwrap();

    assert_eq!(
        fs::read(&config_a.dataset_path).unwrap(),
        fs::read(&config_b.dataset_path).unwrap()
    );
}

#[test]
fn empty_dataset_still_produces_report() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::in_dir(dir.path());
    dataset::write_dataset(&config.dataset_path, &[]).unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(summary.frequency, 0);

    let html = fs::read_to_string(&config.report_path).unwrap();
    assert!(html.contains("Frequency count for HR department: 0"));
    assert!(image::load_from_memory(&embedded_png(&html)).is_ok());
}

#[test]
fn loaded_dataset_with_other_departments_is_counted() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::in_dir(dir.path());
    let records: Vec<EmployeeRecord> = ["HR", "Legal", "HR", "Marketing"]
        .iter()
        .enumerate()
        .map(|(i, d)| EmployeeRecord {
            employee_id: format!("EMP{:03}", i + 1),
            department: d.to_string(),
            region: "Antarctica".to_string(),
            performance_score: 150.25,
            years_experience: 40,
            satisfaction_rating: 9.9,
        })
        .collect();
    dataset::write_dataset(&config.dataset_path, &records).unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(summary.source, DatasetSource::Loaded);
    assert_eq!(summary.frequency, 2);
}

#[test]
fn malformed_dataset_aborts_before_outputs() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::in_dir(dir.path());
    fs::write(&config.dataset_path, "employee_id,department\nEMP001,HR\n").unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ReportError::DataFormat { .. }));
    assert!(!config.chart_path.exists());
    assert!(!config.report_path.exists());
}
