use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use super::filter::matches;
use super::model::{ColumnLayout, FilterCriteria, OUTPUT_HEADER, Record, RunSummary};
use crate::error::{Result, VacancyError};

// ---------------------------------------------------------------------------
// CsvPipeline
// ---------------------------------------------------------------------------

/// Streams an input file through the row filter into the plotting file.
#[derive(Debug, Clone, Default)]
pub struct CsvPipeline {
    pub layout: ColumnLayout,
}

impl CsvPipeline {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Filter `input` into `output`, echoing every matching row to `echo`.
    ///
    /// A missing input is fatal and leaves `output` untouched. The output is
    /// truncated and always starts with the header, even with zero matches.
    pub fn run<E: Write>(
        &self,
        input: &Path,
        output: &Path,
        criteria: &FilterCriteria,
        echo: &mut E,
    ) -> Result<RunSummary> {
        let source = File::open(input).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VacancyError::FileNotFound(input.to_path_buf()),
            _ => VacancyError::Io(e),
        })?;
        let sink = File::create(output)?;

        let summary = self.run_streams(source, sink, criteria, echo)?;
        log::info!(
            "{}: {} rows read, {} matched, {} malformed -> {}",
            input.display(),
            summary.rows_read,
            summary.matched,
            summary.malformed,
            output.display()
        );
        Ok(summary)
    }

    /// Core loop over arbitrary byte streams.
    pub fn run_streams<R: Read, W: Write, E: Write>(
        &self,
        source: R,
        sink: W,
        criteria: &FilterCriteria,
        echo: &mut E,
    ) -> Result<RunSummary> {
        // No header row on the input side: every row is data.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        writer.write_record(OUTPUT_HEADER)?;

        let mut summary = RunSummary::default();
        let mut fields = StringRecord::new();

        loop {
            match reader.read_record(&mut fields) {
                Ok(false) => break,
                Ok(true) => {}
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    // Undecodable row: same treatment as a short one.
                    summary.rows_read += 1;
                    skip_malformed(&mut summary, &e);
                    continue;
                }
            }

            if fields.is_empty() || (fields.len() == 1 && fields[0].is_empty()) {
                continue;
            }
            summary.rows_read += 1;

            let line = fields
                .position()
                .map(|p| p.line())
                .unwrap_or(summary.rows_read);

            let record = match Record::from_fields(&fields, &self.layout, line) {
                Ok(record) => record,
                Err(e) => {
                    skip_malformed(&mut summary, &e);
                    continue;
                }
            };

            if matches(&record, criteria) {
                let row = record.project();
                writeln!(echo, "{row}")?;
                writer.serialize(&row)?;
                summary.matched += 1;
            }
        }

        writer.flush()?;
        Ok(summary)
    }
}

/// Count and report a row that cannot be used.
fn skip_malformed(summary: &mut RunSummary, err: &dyn std::fmt::Display) {
    summary.malformed += 1;
    log::warn!("Error processing row: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use log::{Level, LevelFilter, Log, Metadata};

    thread_local! {
        static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Collects warnings per test thread so parallel tests stay isolated.
    struct WarningCapture;

    impl Log for WarningCapture {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: WarningCapture = WarningCapture;

    fn capture_warnings() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Warn);
        WARNINGS.with(|w| w.borrow_mut().clear());
    }

    fn warnings() -> Vec<String> {
        WARNINGS.with(|w| w.borrow().clone())
    }

    const HEADER: &str =
        "Ref Date,Geo,National Occupation Classification,Recruitment Strategy,Statistics,Value\n";

    /// Build a 13-column dataset row.
    fn row(date: &str, occupation: &str, characteristic: &str, value: &str) -> String {
        format!(
            "{date},Canada,2016A000011124,\"{occupation}\",\"{characteristic}\",Job vacancies,\
             Number,81,units,0,v1,1.1.1,{value}\n"
        )
    }

    fn run(input: &str, criteria: &FilterCriteria) -> (RunSummary, String, String) {
        let mut out = Vec::new();
        let mut echo = Vec::new();
        let summary = CsvPipeline::default()
            .run_streams(input.as_bytes(), &mut out, criteria, &mut echo)
            .unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(echo).unwrap(),
        )
    }

    fn social_media() -> FilterCriteria {
        FilterCriteria::new("Management occupations [0]", "Social Media")
    }

    #[test]
    fn writes_matching_rows_after_header() {
        let input = [
            row("2023-01", "Management occupations [0]", "Social Media", "5000"),
            row("2023-01", "Management occupations [0]", "Newspaper ads", "70"),
            row("2023-04", "Management occupations [0]", "Social Media", "5200"),
        ]
        .concat();
        let (summary, out, echo) = run(&input, &social_media());
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.rows_read, 3);
        assert_eq!(
            out,
            format!(
                "{HEADER}2023-01,Canada,Management occupations [0],Social Media,Job vacancies,5000\n\
                 2023-04,Canada,Management occupations [0],Social Media,Job vacancies,5200\n"
            )
        );
        assert_eq!(
            echo,
            "2023-01, Canada, Management occupations [0], Social Media, Job vacancies, 5000\n\
             2023-04, Canada, Management occupations [0], Social Media, Job vacancies, 5200\n"
        );
    }

    #[test]
    fn zero_matches_leaves_only_header() {
        let input = row("2023-01", "Health occupations [3]", "Social Media", "10");
        let (summary, out, echo) = run(&input, &social_media());
        assert_eq!(summary.matched, 0);
        assert_eq!(out, HEADER);
        assert!(echo.is_empty());
    }

    #[test]
    fn empty_input_still_gets_header() {
        let (summary, out, _) = run("", &social_media());
        assert_eq!(summary, RunSummary::default());
        assert_eq!(out, HEADER);
    }

    #[test]
    fn short_row_is_skipped_and_counted() {
        capture_warnings();
        let input = [
            row("2023-01", "Management occupations [0]", "Social Media", "1"),
            "2023-04,Canada,,Management occupations [0]\n".to_string(),
            row("2023-07", "Management occupations [0]", "Social Media", "3"),
            row("2023-10", "Management occupations [0]", "Social Media", "4"),
            row("2024-01", "Management occupations [0]", "Social Media", "5"),
        ]
        .concat();
        let (summary, out, _) = run(&input, &social_media());
        assert_eq!(summary.matched, 4);
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.rows_read, 5);
        let dates: Vec<&str> = out
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(dates, ["2023-01", "2023-07", "2023-10", "2024-01"]);

        let logged = warnings();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].starts_with("Error processing row: row 2 has 4 fields"));
    }

    #[test]
    fn undecodable_row_is_skipped_and_counted() {
        capture_warnings();
        let mut input = row("2023-01", "Management occupations [0]", "Social Media", "1").into_bytes();
        input.extend_from_slice(
            b"2023-04,Canada,x,\xff\xfe,Social Media,Job vacancies,a,b,c,d,e,f,2\n",
        );
        input.extend(row("2023-07", "Management occupations [0]", "Social Media", "3").into_bytes());

        let mut out = Vec::new();
        let summary = CsvPipeline::default()
            .run_streams(input.as_slice(), &mut out, &social_media(), &mut io::sink())
            .unwrap();

        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.malformed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{HEADER}2023-01,Canada,Management occupations [0],Social Media,Job vacancies,1\n\
                 2023-07,Canada,Management occupations [0],Social Media,Job vacancies,3\n"
            )
        );
        assert_eq!(warnings().len(), 1);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let input = format!(
            "\n{}\n\n",
            row("2023-01", "Management occupations [0]", "Social Media", "9").trim_end()
        );
        let (summary, _, _) = run(&input, &social_media());
        assert_eq!(summary.rows_read, 1);
        assert_eq!(summary.malformed, 0);
        assert_eq!(summary.matched, 1);
    }

    #[test]
    fn empty_value_becomes_zero() {
        let input = row("2023-01", "Management occupations [0]", "Social Media", "");
        let (_, out, echo) = run(&input, &social_media());
        assert!(out.ends_with(",Job vacancies,0\n"));
        assert!(echo.ends_with(", Job vacancies, 0\n"));
    }

    #[test]
    fn labels_with_commas_are_quoted_on_output() {
        let occupation = "Business, finance and administration occupations [1]";
        let input = row("2023-01", occupation, "Social Media", "12");
        let criteria = FilterCriteria::new(occupation, "Social Media");
        let (_, out, _) = run(&input, &criteria);
        assert!(out.contains(
            "2023-01,Canada,\"Business, finance and administration occupations [1]\",Social Media"
        ));
    }

    #[test]
    fn quoted_help_wanted_label_matches() {
        let input = "2023-01,Canada,x,\"Total, all occupations\",\
                     \"Posting a \"\"help-wanted\"\" sign on the storefront of the location\",\
                     Job vacancies,a,b,c,d,e,f,42\n";
        let criteria = FilterCriteria::new(
            "Total, all occupations",
            "Posting a \"help-wanted\" sign on the storefront of the location",
        );
        let (summary, _, _) = run(input, &criteria);
        assert_eq!(summary.matched, 1);
    }

    #[test]
    fn compact_layout_scenario() {
        let layout = ColumnLayout {
            value: 6,
            ..ColumnLayout::default()
        };
        let input = "2023-01,Canada,,Management occupations [0],Social Media,Job vacancies,5000\n";
        let mut out = Vec::new();
        let mut echo = Vec::new();
        let summary = CsvPipeline::new(layout)
            .run_streams(input.as_bytes(), &mut out, &social_media(), &mut echo)
            .unwrap();
        assert_eq!(summary.matched, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{HEADER}2023-01,Canada,Management occupations [0],Social Media,Job vacancies,5000\n"
            )
        );
    }
}
