// src/csv.rs
use std::io::{self, Write};

use crate::record::CertificateRecord;

/// Tabular column order.
pub const TSV_COLUMNS: [&str; 6] =
    ["title", "enterprise", "id", "link", "expeditionDate", "expireDate"];

pub const TAB: char = '\t';

/* ---------------- Writing ---------------- */

/// Only a separator or line break can corrupt a row; quotes are written as-is.
fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Records → text ---------------- */

/// One tab-separated line per record, no header, lines joined by `\n`
/// (no trailing newline). Order is the caller's.
pub fn records_to_tsv<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a CertificateRecord>,
{
    let mut buf: Vec<u8> = Vec::new();
    for rec in records {
        // Writing into a Vec cannot fail.
        let _ = write_row(&mut buf, &rec.tsv_row(), TAB);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
