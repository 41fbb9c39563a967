// src/error.rs
//
// Error types for extraction, loading, querying and export.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failures turning date text into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Month abbreviation not in the Spanish table.
    #[error("unrecognized month abbreviation '{month}'")]
    UnrecognizedMonth { month: String },

    /// Fragment lacks the `<noise> <month> <year>` shape.
    #[error("malformed date fragment '{raw}'")]
    MalformedFragment { raw: String },

    #[error("invalid year '{raw}'")]
    InvalidYear { raw: String },

    /// Not a `YYYY/MM/DD` string naming a real day.
    #[error("not a canonical YYYY/MM/DD date: '{raw}'")]
    InvalidCanonical { raw: String },
}

/// Required entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    ExpeditionDate,
    Enterprise,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::ExpeditionDate => "expeditionDate",
            Field::Enterprise => "enterprise",
        };
        f.write_str(name)
    }
}

/// Extraction failures. `MissingField` and `Date` only cost the one entry;
/// `Selector` is a configuration error and stops the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("entry {entry}: missing required field '{field}'")]
    MissingField { entry: usize, field: Field },

    #[error("entry {entry}: {source}")]
    Date {
        entry: usize,
        #[source]
        source: DateError,
    },

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Start bound lies after the end bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidDateRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Record set (or config file) could not be read.
#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not encode records: {0}")]
    Json(#[from] serde_json::Error),
}
