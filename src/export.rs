// src/export.rs
//
// Canonical JSON and the console report.
//
// JSON output is re-sorted by expedition date (stable, ascending), keys are
// alphabetical within each object and indentation is four spaces. Feeding
// the output back through `to_canonical_json` yields identical text.
// Only record fields are written; unknown keys in loaded input are dropped.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::{
    config::consts::JSON_INDENT,
    csv::records_to_tsv,
    error::ExportError,
    record::CertificateRecord,
};

/// Records in expedition-date order; ties keep their input order.
pub fn sorted_by_expedition(records: &[CertificateRecord]) -> Vec<&CertificateRecord> {
    let mut out: Vec<&CertificateRecord> = records.iter().collect();
    out.sort_by_key(|r| r.expedition_date);
    out
}

/// Key-sorted object for one record.
fn canonical_object(rec: &CertificateRecord) -> Result<BTreeMap<String, Value>, ExportError> {
    match serde_json::to_value(rec)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        // A struct always serializes to an object.
        other => Ok(BTreeMap::from([(s!("value"), other)])),
    }
}

pub fn to_canonical_json(records: &[CertificateRecord]) -> Result<String, ExportError> {
    let objects = sorted_by_expedition(records)
        .into_iter()
        .map(canonical_object)
        .collect::<Result<Vec<_>, _>>()?;

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    objects.serialize(&mut ser)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `CSV`, the tab-separated rows (document order), a blank line, `JSON`, the
/// canonical JSON, a blank line.
pub fn console_report(records: &[CertificateRecord]) -> Result<String, ExportError> {
    let tsv = records_to_tsv(records);
    let json = to_canonical_json(records)?;
    Ok(format!("CSV\n{tsv}\n\nJSON\n{json}\n\n"))
}
