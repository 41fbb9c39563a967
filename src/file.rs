// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::records_to_tsv;
use crate::error::ExportError;
use crate::export::to_canonical_json;
use crate::record::CertificateRecord;

/// Write the export files enabled in `export`. Returns the paths written.
pub fn write_export(
    export: &ExportOptions,
    records: &[CertificateRecord],
) -> Result<Vec<PathBuf>, ExportError> {
    ensure_directory(&export.out_dir)?;
    let mut written = Vec::with_capacity(2);

    if export.write_tsv {
        let path = export.tsv_path();
        write_text(&path, &records_to_tsv(records))?;
        written.push(path);
    }
    if export.write_json {
        let path = export.json_path();
        write_text(&path, &to_canonical_json(records)?)?;
        written.push(path);
    }

    logf!("Export: wrote {} file(s) to {}", written.len(), export.out_dir.display());
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
