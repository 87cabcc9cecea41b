//! Aggregation over the dataset.

use crate::dataset::EmployeeRecord;

use std::collections::HashMap;

/// Number of records whose department equals `department` exactly.
pub fn count_department(dataset: &[EmployeeRecord], department: &str) -> usize {
    dataset
        .iter()
        .filter(|r| r.department == department)
        .count()
}

/// Record count per distinct department, in first-seen order.
pub fn department_counts(dataset: &[EmployeeRecord]) -> Vec<(String, usize)> {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in dataset {
        let idx = *slot.entry(record.department.as_str()).or_insert_with(|| {
            counts.push((record.department.clone(), 0));
            counts.len() - 1
        });
        counts[idx].1 += 1;
    }

    counts
}
