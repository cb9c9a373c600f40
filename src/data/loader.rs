use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use super::model::{OutputRow, VacancyPoint, VacancySeries};
use crate::error::{Result, VacancyError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a plotting file written by the pipeline.
///
/// Expected layout: the six-column header, then one row per period with
/// `Ref Date` as `YYYY-MM` and a numeric `Value`. Rows keep file order.
pub fn load_series(path: &Path) -> Result<VacancySeries> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VacancyError::FileNotFound(path.to_path_buf()),
        _ => VacancyError::Io(e),
    })?;
    read_series(file)
}

pub fn read_series<R: Read>(source: R) -> Result<VacancySeries> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let mut points = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: OutputRow = record.deserialize(Some(&headers))?;

        let date = parse_ref_date(&row.ref_date).ok_or_else(|| VacancyError::DateParse {
            line,
            value: row.ref_date.clone(),
        })?;
        let value = row
            .value
            .trim()
            .parse::<f64>()
            .map_err(|_| VacancyError::ValueParse {
                line,
                value: row.value.clone(),
            })?;

        points.push(VacancyPoint { date, value });
    }

    Ok(VacancySeries { points })
}

/// Parse a `YYYY-MM` reference period as the first day of that month.
pub fn parse_ref_date(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
