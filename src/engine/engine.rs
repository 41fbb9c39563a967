// src/engine/engine.rs
//
// QueryState + RecordSet -> OrderedView.
//
// Pipeline, each step narrowing or reordering the previous one:
//   1. range validation (fails the whole pass, nothing else runs)
//   2. text filter
//   3. inclusive date bounds
//   4. stable sort on the active field
//   5. stable partition: highlighted records first

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::config::options::EngineOptions;
use crate::data::OrderedView;
use crate::engine::fuzzy;
use crate::engine::types::{QueryState, SortField};
use crate::error::InvalidDateRangeError;
use crate::record::{CertificateRecord, RecordSet};

pub fn apply(
    set: &RecordSet,
    state: &QueryState,
    opts: &EngineOptions,
) -> Result<OrderedView, InvalidDateRangeError> {
    if opts.date_range_filter {
        state.validate_range()?;
    }

    let term = state.search_term.trim();
    let mut row_ix: Vec<usize> = set
        .iter()
        .enumerate()
        .filter(|(_, rec)| text_matches(rec, term, opts.fuzzy_search))
        .filter(|(_, rec)| !opts.date_range_filter || within_bounds(rec, state))
        .map(|(ix, _)| ix)
        .collect();

    // `sort_by` is stable; equal keys keep load order.
    row_ix.sort_by(|&a, &b| {
        let (ra, rb) = (&set.records()[a], &set.records()[b]);
        state.sort_order.apply(compare(ra, rb, state.sort_field))
    });

    pin_first(&mut row_ix, set);
    Ok(OrderedView::new(row_ix))
}

/// Fuzzy on `"title enterprise"`, or verbatim containment in either field.
pub fn text_matches(rec: &CertificateRecord, term: &str, fuzzy_search: bool) -> bool {
    if term.is_empty() {
        return true;
    }
    if fuzzy_search {
        let composite = join!(&rec.title, " ", &rec.enterprise);
        fuzzy::matches(term, &composite)
    } else {
        fuzzy::contains_ci(&rec.title, term) || fuzzy::contains_ci(&rec.enterprise, term)
    }
}

/// Both bounds inclusive; an unset bound does not constrain.
pub fn within_bounds(rec: &CertificateRecord, state: &QueryState) -> bool {
    let day = rec.expedition_date.date();
    state.start_date.is_none_or(|start| day >= start) && state.end_date.is_none_or(|end| day <= end)
}

/// Ascending comparison on `field`.
pub fn compare(a: &CertificateRecord, b: &CertificateRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.expedition_date.cmp(&b.expedition_date),
        SortField::Name => name_key(&a.title)
            .cmp(&name_key(&b.title))
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
    }
}

/// Accent-folded, lowercased title, so "Éxito" sorts with the E's.
fn name_key(title: &str) -> String {
    deunicode(title).to_lowercase()
}

/// Stable partition: pinned records move ahead, both groups keep their order.
pub fn pin_first(row_ix: &mut Vec<usize>, set: &RecordSet) {
    let (pinned, rest): (Vec<usize>, Vec<usize>) = row_ix
        .iter()
        .partition(|&&ix| set.get(ix).is_some_and(CertificateRecord::is_pinned));
    row_ix.clear();
    row_ix.extend(pinned);
    row_ix.extend(rest);
}
