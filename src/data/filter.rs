use super::model::{FilterCriteria, Record};

/// Whether a record carries both target labels.
///
/// Comparison is exact: case-sensitive, no trimming.
pub fn matches(record: &Record<'_>, criteria: &FilterCriteria) -> bool {
    record.axis1 == criteria.axis1 && record.axis2 == criteria.axis2
}
