use std::fmt;

use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VacancyError};

// ---------------------------------------------------------------------------
// ColumnLayout – positional schema of the input file
// ---------------------------------------------------------------------------

/// Zero-based column positions of the fields we read from an input row.
/// The default matches the Statistics Canada job vacancy tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub date: usize,
    pub geo: usize,
    pub axis1: usize,
    pub axis2: usize,
    pub statistics: usize,
    pub value: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: 0,
            geo: 1,
            axis1: 3,
            axis2: 4,
            statistics: 5,
            value: 12,
        }
    }
}

impl ColumnLayout {
    /// Minimum field count a row needs under this layout.
    pub fn required_fields(&self) -> usize {
        [
            self.date,
            self.geo,
            self.axis1,
            self.axis2,
            self.statistics,
            self.value,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

// ---------------------------------------------------------------------------
// Record – one input row, borrowed from the CSV reader
// ---------------------------------------------------------------------------

/// Positional view over one input row.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub ref_date: &'a str,
    pub geo: &'a str,
    pub axis1: &'a str,
    pub axis2: &'a str,
    pub statistics: &'a str,
    pub value: &'a str,
}

impl<'a> Record<'a> {
    /// Extract the layout's fields from a raw row.
    ///
    /// `line` is only used to label the error.
    pub fn from_fields(fields: &'a StringRecord, layout: &ColumnLayout, line: u64) -> Result<Self> {
        let get = |idx: usize| {
            fields.get(idx).ok_or_else(|| VacancyError::MalformedRow {
                line,
                fields: fields.len(),
                required: layout.required_fields(),
                row: fields.iter().map(str::to_owned).collect(),
            })
        };
        Ok(Record {
            ref_date: get(layout.date)?,
            geo: get(layout.geo)?,
            axis1: get(layout.axis1)?,
            axis2: get(layout.axis2)?,
            statistics: get(layout.statistics)?,
            value: get(layout.value)?,
        })
    }

    /// Project into the six output fields, substituting `0` for an empty value.
    pub fn project(&self) -> OutputRow {
        let value = if self.value.is_empty() {
            "0".to_string()
        } else {
            self.value.to_string()
        };
        OutputRow {
            ref_date: self.ref_date.to_string(),
            geo: self.geo.to_string(),
            occupation: self.axis1.to_string(),
            characteristic: self.axis2.to_string(),
            statistics: self.statistics.to_string(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// OutputRow – projected row written to dataForPlotting.csv
// ---------------------------------------------------------------------------

pub const OUTPUT_HEADER: [&str; 6] = [
    "Ref Date",
    "Geo",
    "National Occupation Classification",
    "Recruitment Strategy",
    "Statistics",
    "Value",
];

/// The six-field projection of a matching record.
///
/// The axis-2 column keeps the historical "Recruitment Strategy" header even
/// when it holds an education level or a vacancy duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Ref Date")]
    pub ref_date: String,
    #[serde(rename = "Geo")]
    pub geo: String,
    #[serde(rename = "National Occupation Classification")]
    pub occupation: String,
    #[serde(rename = "Recruitment Strategy")]
    pub characteristic: String,
    #[serde(rename = "Statistics")]
    pub statistics: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.ref_date,
            self.geo,
            self.occupation,
            self.characteristic,
            self.statistics,
            self.value
        )
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// The pair of labels a run filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub axis1: String,
    pub axis2: String,
}

impl FilterCriteria {
    pub fn new(axis1: impl Into<String>, axis2: impl Into<String>) -> Self {
        Self {
            axis1: axis1.into(),
            axis2: axis2.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

/// Counters reported by one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-empty rows seen, malformed ones included.
    pub rows_read: u64,
    pub matched: u64,
    pub malformed: u64,
}

// ---------------------------------------------------------------------------
// VacancySeries – chart input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct VacancyPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Dated values in the order they appear in the plotted file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancySeries {
    pub points: Vec<VacancyPoint>,
}

impl VacancySeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
