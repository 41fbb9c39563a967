// src/store.rs
//
// Loading a previously exported record set (JSON array of records).

use std::{fs, path::Path};

use crate::error::ResourceLoadError;
use crate::record::{CertificateRecord, RecordSet};

pub fn load_records(path: &Path) -> Result<RecordSet, ResourceLoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ResourceLoadError::Io { path: path.to_path_buf(), source })?;
    let set = parse_records(&text, path)?;
    logf!("Store: loaded {} records from {}", set.len(), path.display());
    Ok(set)
}

/// `path` is only used for error context.
pub fn parse_records(text: &str, path: &Path) -> Result<RecordSet, ResourceLoadError> {
    let records: Vec<CertificateRecord> = serde_json::from_str(text)
        .map_err(|source| ResourceLoadError::Parse { path: path.to_path_buf(), source })?;
    Ok(RecordSet::new(records))
}
