use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving selections, filtering rows or charting.
#[derive(Debug, Error)]
pub enum VacancyError {
    /// A headless selection fell outside the bound offered for that menu.
    #[error("selection {code} for {catalog} is outside 1..={upper}")]
    InvalidSelection {
        catalog: &'static str,
        code: i64,
        upper: u32,
    },

    #[error("unknown {catalog} category code {code}")]
    UnknownCategory { catalog: &'static str, code: i64 },

    #[error("wrong number of selections: question {question} takes {expected}, got {got}")]
    SelectionCount {
        question: u8,
        expected: usize,
        got: usize,
    },

    #[error("no question numbered {0} (expected 1-4)")]
    UnknownQuestion(u8),

    /// A row lacks a column the layout needs. Logged and skipped, never fatal.
    #[error("row {line} has {fields} fields, need at least {required}: {row:?}")]
    MalformedRow {
        line: u64,
        fields: usize,
        required: usize,
        row: Vec<String>,
    },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("row {line}: '{value}' is not a YYYY-MM date")]
    DateParse { line: u64, value: String },

    #[error("row {line}: '{value}' is not a number")]
    ValueParse { line: u64, value: String },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("chart window failed: {0}")]
    Window(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl VacancyError {
    /// Process exit code for this error, shared by every entry point.
    ///
    /// | code | meaning                                           |
    /// |------|---------------------------------------------------|
    /// | 1    | usage error, invalid selection, unknown category  |
    /// | 2    | input file not found                              |
    /// | 3    | anything else                                     |
    pub fn exit_code(&self) -> u8 {
        match self {
            VacancyError::InvalidSelection { .. }
            | VacancyError::UnknownCategory { .. }
            | VacancyError::SelectionCount { .. }
            | VacancyError::UnknownQuestion(_) => EXIT_USAGE,
            VacancyError::FileNotFound(_) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_FAILURE: u8 = 3;

pub type Result<T> = std::result::Result<T, VacancyError>;
