//! Employee dataset: synthetic generation and CSV persistence.

use crate::error::{ReportError, Result};

use csv::{ReaderBuilder, WriterBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header row of the dataset file, in column order.
pub const COLUMNS: [&str; 6] = [
    "employee_id",
    "department",
    "region",
    "performance_score",
    "years_experience",
    "satisfaction_rating",
];

/// Departments drawn from when generating.
pub const DEPARTMENTS: [&str; 6] = ["HR", "Finance", "Sales", "Operations", "R&D", "IT"];

/// Regions drawn from when generating.
pub const REGIONS: [&str; 4] = ["North America", "Europe", "Asia", "Middle East"];

/// One row of the dataset file.
///
/// Department and region stay free-form strings: loaded files may carry values
/// outside the generated enumerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub department: String,
    pub region: String,
    pub performance_score: f64,
    pub years_experience: i64,
    pub satisfaction_rating: f64,
}

pub type Dataset = Vec<EmployeeRecord>;

/// Which branch of [`obtain_dataset`] produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Generated,
    Loaded,
}

/// Load the dataset at `path`, or generate and persist `rows` synthetic
/// records from `seed` when no file exists there.
pub fn obtain_dataset(path: &Path, seed: u64, rows: usize) -> Result<(Dataset, DatasetSource)> {
    let exists = path
        .try_exists()
        .map_err(|e| ReportError::io(path, e))?;

    if exists {
        return Ok((read_dataset(path)?, DatasetSource::Loaded));
    }

    let dataset = generate_dataset(rows, seed);
    write_dataset(path, &dataset)?;
    Ok((dataset, DatasetSource::Generated))
}

/// Generate `rows` records from a generator seeded locally with `seed`.
///
/// Columns are drawn one after another (all departments, then all regions,
/// and so on) so a given seed always yields the same table.
pub fn generate_dataset(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let departments: Vec<&str> = (0..rows)
        .map(|_| DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())])
        .collect();
    let regions: Vec<&str> = (0..rows)
        .map(|_| REGIONS[rng.gen_range(0..REGIONS.len())])
        .collect();
    let scores: Vec<f64> = (0..rows)
        .map(|_| round_to(rng.gen_range(50.0..100.0), 2))
        .collect();
    let years: Vec<i64> = (0..rows).map(|_| rng.gen_range(1..=20)).collect();
    let ratings: Vec<f64> = (0..rows)
        .map(|_| round_to(rng.gen_range(1.0..5.0), 1))
        .collect();

    (0..rows)
        .map(|i| EmployeeRecord {
            employee_id: format!("EMP{:03}", i + 1),
            department: departments[i].to_string(),
            region: regions[i].to_string(),
            performance_score: scores[i],
            years_experience: years[i],
            satisfaction_rating: ratings[i],
        })
        .collect()
}

/// Write `dataset` as CSV with a header row, replacing any existing file.
pub fn write_dataset(path: &Path, dataset: &[EmployeeRecord]) -> Result<()> {
    // Header is written by hand so an empty dataset still produces a loadable file.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| csv_error(path, e))?;
    for record in dataset {
        writer.serialize(record).map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))?;

    Ok(())
}

/// Parse the CSV file at `path`.
///
/// Columns are matched by header name. Values are not range checked.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ReportError::data_format(
                path,
                format!("header is missing column {:?}", column),
            ));
        }
    }

    let mut out = Dataset::new();
    for row in reader.deserialize::<EmployeeRecord>() {
        out.push(row.map_err(|e| csv_error(path, e))?);
    }

    Ok(out)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn csv_error(path: &Path, err: csv::Error) -> ReportError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ReportError::io(path, source),
        _ => ReportError::data_format(path, message),
    }
}
