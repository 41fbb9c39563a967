// benches/search.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cert_catalog::{
    config::options::EngineOptions,
    engine::{engine::apply, QueryState, SortField},
    record::{CanonicalDate, CertificateRecord, RecordSet},
};

const ISSUERS: [&str; 5] = ["Amazon Web Services", "Google", "Microsoft", "Scrum.org", "Coursera"];
const TOPICS: [&str; 6] = ["Cloud", "Data", "Security", "Agile", "Machine Learning", "DevOps"];

fn synthetic_set(n: usize) -> RecordSet {
    let records = (0..n)
        .map(|i| {
            let year = 2015 + (i % 10) as i32;
            let month = 1 + (i % 12) as u32;
            let date = CanonicalDate::from_ymd(year, month, 1).expect("valid synthetic date");
            let title = format!("{} Certificate {}", TOPICS[i % TOPICS.len()], i);
            let mut rec = CertificateRecord::new(title, ISSUERS[i % ISSUERS.len()], date);
            if i % 17 == 0 {
                rec.highlight = Some(true);
            }
            rec
        })
        .collect();
    RecordSet::new(records)
}

fn bench_search(c: &mut Criterion) {
    let set = synthetic_set(2_000);
    let opts = EngineOptions::default();

    c.bench_function("apply_default", |b| {
        let q = QueryState::default();
        b.iter(|| black_box(apply(black_box(&set), &q, &opts).map(|v| v.len())))
    });

    c.bench_function("apply_fuzzy_term", |b| {
        let q = QueryState { search_term: "clgoo".into(), ..QueryState::default() };
        b.iter(|| black_box(apply(black_box(&set), &q, &opts).map(|v| v.len())))
    });

    c.bench_function("apply_name_sort_with_bounds", |b| {
        let mut q = QueryState::default();
        q.toggle_sort(SortField::Name);
        q.start_date = chrono::NaiveDate::from_ymd_opt(2018, 1, 1);
        q.end_date = chrono::NaiveDate::from_ymd_opt(2022, 12, 31);
        b.iter(|| black_box(apply(black_box(&set), &q, &opts).map(|v| v.len())))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
