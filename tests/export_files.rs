// tests/export_files.rs
use std::fs;

use cert_catalog::config::options::ExportOptions;
use cert_catalog::error::{ExportError, ResourceLoadError};
use cert_catalog::export::to_canonical_json;
use cert_catalog::file::write_export;
use cert_catalog::record::{CanonicalDate, CertificateRecord};
use cert_catalog::store::load_records;

fn records() -> Vec<CertificateRecord> {
    let d = |s: &str| CanonicalDate::parse(s).unwrap();
    let mut a = CertificateRecord::new("Zeta", "Issuer Z", d("2023/05/01"));
    a.id = "Z-1".into();
    a.link = "https://z.example/c".into();
    a.expire_date = Some(d("2026/05/01"));
    let b = CertificateRecord::new("Alpha", "Issuer A", d("2021/01/01"));
    let c = CertificateRecord::new("Mid", "Issuer M", d("2022/07/01"));
    vec![a, b, c]
}

#[test]
fn writes_tsv_and_json_into_new_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let export = ExportOptions {
        out_dir: tmp.path().join("nested").join("out"),
        stem: "certs".into(),
        ..ExportOptions::default()
    };

    let written = write_export(&export, &records()).unwrap();
    assert_eq!(written, vec![export.tsv_path(), export.json_path()]);

    let tsv = fs::read_to_string(export.tsv_path()).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Zeta\tIssuer Z\tZ-1\thttps://z.example/c\t2023/05/01\t2026/05/01");
    assert!(!tsv.ends_with('\n'));

    let json = fs::read_to_string(export.json_path()).unwrap();
    let alpha = json.find("\"Alpha\"").unwrap();
    let mid = json.find("\"Mid\"").unwrap();
    let zeta = json.find("\"Zeta\"").unwrap();
    assert!(alpha < mid && mid < zeta);
}

#[test]
fn only_enabled_formats_are_written() {
    let tmp = tempfile::tempdir().unwrap();
    let export = ExportOptions {
        out_dir: tmp.path().to_path_buf(),
        write_tsv: false,
        ..ExportOptions::default()
    };
    let written = write_export(&export, &records()).unwrap();
    assert_eq!(written, vec![export.json_path()]);
    assert!(!export.tsv_path().exists());
}

#[test]
fn out_dir_that_is_a_file_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("taken");
    fs::write(&file, "x").unwrap();
    let export = ExportOptions { out_dir: file, ..ExportOptions::default() };
    assert!(matches!(write_export(&export, &records()), Err(ExportError::NotADirectory(_))));
}

#[test]
fn exported_json_reloads_and_reserializes_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let export = ExportOptions { out_dir: tmp.path().to_path_buf(), ..ExportOptions::default() };
    write_export(&export, &records()).unwrap();

    let first = fs::read_to_string(export.json_path()).unwrap();
    let set = load_records(&export.json_path()).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(to_canonical_json(set.records()).unwrap(), first);
}

#[test]
fn malformed_record_file_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, r#"[{"title": "x""#).unwrap();
    assert!(matches!(load_records(&path), Err(ResourceLoadError::Parse { .. })));
}

#[test]
fn canonical_json_keeps_only_record_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("legacy.json");
    fs::write(
        &path,
        r#"[{"title":"Old","enterprise":"E","expeditionDate":"2020/02/01",
             "expiryDate":"2022/02/01","notes":"scraped by hand","rank":3}]"#,
    )
    .unwrap();

    let set = load_records(&path).unwrap();
    let json = to_canonical_json(set.records()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = value[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["enterprise", "expeditionDate", "expireDate", "id", "link", "title"]);
    assert!(!json.contains("notes"));
}
