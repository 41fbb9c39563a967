// tests/query_session.rs
//
// Drives the session the way the UI does: one input at a time.

use chrono::NaiveDate;

use cert_catalog::config::options::EngineOptions;
use cert_catalog::engine::{FilterKind, LoadState, Session, SortField, SortOrder};
use cert_catalog::record::{CanonicalDate, CertificateRecord, RecordSet};
use cert_catalog::store::parse_records;

const RECORDS: &str = r#"[
    {"title": "AWS Cloud Practitioner", "enterprise": "Amazon Web Services", "expeditionDate": "2021/01/01", "link": "undefined"},
    {"title": "Professional Scrum Master", "enterprise": "Scrum.org", "expeditionDate": "2023/05/01"},
    {"title": "Google Data Analytics", "enterprise": "Google", "expeditionDate": "2022/07/01", "expireDate": "2025/07/01"},
    {"title": "aws solutions architect", "enterprise": "Amazon Web Services", "expeditionDate": "2023/05/01"}
]"#;

fn session(pins: &[usize]) -> Session {
    let mut set = parse_records(RECORDS, std::path::Path::new("inline.json")).unwrap();
    set.pin_positions(pins);
    Session::with_records(EngineOptions::default(), set)
}

fn titles(s: &Session) -> Vec<&str> {
    s.visible().map(|r| r.title.as_str()).collect()
}

fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn initial_view_is_date_desc_with_stable_ties() {
    let s = session(&[]);
    assert!(matches!(s.load_state(), LoadState::Ready));
    assert_eq!(
        titles(&s),
        vec![
            "Professional Scrum Master",
            "aws solutions architect",
            "Google Data Analytics",
            "AWS Cloud Practitioner",
        ]
    );
    assert_eq!(s.result_count(), 4);
}

#[test]
fn pinned_record_leads_every_ordering() {
    let mut s = session(&[0]);
    assert_eq!(titles(&s)[0], "AWS Cloud Practitioner");

    s.toggle_sort(SortField::Name);
    assert_eq!(s.query().sort_order, SortOrder::Asc);
    assert_eq!(
        titles(&s),
        vec![
            "AWS Cloud Practitioner",
            "aws solutions architect",
            "Google Data Analytics",
            "Professional Scrum Master",
        ]
    );
}

#[test]
fn search_and_bounds_combine() {
    let mut s = session(&[]);
    s.set_search("amazon");
    assert_eq!(s.result_count(), 2);

    s.set_start_date(day(2022, 1, 1));
    assert_eq!(titles(&s), vec!["aws solutions architect"]);

    let kinds: Vec<FilterKind> = s.active_filters().into_iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FilterKind::Search, FilterKind::StartDate]);

    s.clear_all();
    assert_eq!(s.result_count(), 4);
    assert!(s.active_filters().is_empty());
}

#[test]
fn inverted_range_reports_and_keeps_what_was_shown() {
    let mut s = session(&[]);
    s.set_search("google");
    let before: Vec<String> = s.visible().map(|r| r.title.clone()).collect();

    s.set_start_date(day(2023, 6, 1));
    s.set_end_date(day(2023, 1, 1));
    let err = s.validation().copied().unwrap();
    assert_eq!(err.start, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

    // Still whatever was on screen when the range went bad.
    let after: Vec<String> = s.visible().map(|r| r.title.clone()).collect();
    assert_eq!(after, vec!["Google Data Analytics"]);
    assert_eq!(before, after);

    s.set_end_date(None);
    assert!(s.validation().is_none());
}

#[test]
fn undefined_link_is_not_a_link() {
    let s = session(&[]);
    let aws = s.visible().find(|r| r.title == "AWS Cloud Practitioner").unwrap();
    assert!(!aws.has_link());
}

#[test]
fn no_matches_is_an_empty_view_not_an_error() {
    let mut s = session(&[]);
    s.set_search("zzzz");
    assert_eq!(s.result_count(), 0);
    assert!(s.validation().is_none());
}

#[test]
fn reload_discards_old_records() {
    let mut s = session(&[]);
    s.begin_load();
    assert_eq!(s.result_count(), 0);
    let d = CanonicalDate::parse("2020/01/01").unwrap();
    s.finish_load(Ok(RecordSet::new(vec![CertificateRecord::new("Only", "E", d)])));
    assert_eq!(titles(&s), vec!["Only"]);
}
