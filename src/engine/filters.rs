// src/engine/filters.rs
//
// Active-filter descriptors: a projection of QueryState, recomputed on
// demand. Removing one clears exactly the field it was derived from.

use crate::config::options::EngineOptions;
use crate::engine::types::QueryState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Search,
    StartDate,
    EndDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveFilter {
    pub kind: FilterKind,
    pub label: String,
}

pub fn active_filters(state: &QueryState, opts: &EngineOptions) -> Vec<ActiveFilter> {
    if !opts.active_filter_tags {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(3);
    if state.has_search() {
        out.push(ActiveFilter {
            kind: FilterKind::Search,
            label: format!("Search: \"{}\"", state.search_term.trim()),
        });
    }
    if opts.date_range_filter {
        if let Some(d) = state.start_date {
            out.push(ActiveFilter { kind: FilterKind::StartDate, label: format!("From: {}", d.format("%b %-d, %Y")) });
        }
        if let Some(d) = state.end_date {
            out.push(ActiveFilter { kind: FilterKind::EndDate, label: format!("To: {}", d.format("%b %-d, %Y")) });
        }
    }
    out
}

pub fn remove_filter(state: &mut QueryState, kind: FilterKind) {
    match kind {
        FilterKind::Search => state.search_term.clear(),
        FilterKind::StartDate => state.start_date = None,
        FilterKind::EndDate => state.end_date = None,
    }
}

/// Clear every filter; the sort survives.
pub fn clear_all(state: &mut QueryState) {
    state.search_term.clear();
    state.start_date = None;
    state.end_date = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::SortField;
    use chrono::NaiveDate;

    #[test]
    fn search_term_yields_one_descriptor() {
        let mut q = QueryState::default();
        q.search_term = s!("aws");
        let tags = active_filters(&q, &EngineOptions::default());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, FilterKind::Search);
        assert_eq!(tags[0].label, "Search: \"aws\"");

        remove_filter(&mut q, FilterKind::Search);
        assert!(q.search_term.is_empty());
        assert!(active_filters(&q, &EngineOptions::default()).is_empty());
    }

    #[test]
    fn each_bound_is_its_own_descriptor() {
        let mut q = QueryState::default();
        q.start_date = NaiveDate::from_ymd_opt(2023, 1, 1);
        q.end_date = NaiveDate::from_ymd_opt(2023, 6, 1);
        let kinds: Vec<FilterKind> = active_filters(&q, &EngineOptions::default()).into_iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FilterKind::StartDate, FilterKind::EndDate]);

        remove_filter(&mut q, FilterKind::StartDate);
        assert_eq!(q.start_date, None);
        assert!(q.end_date.is_some());
    }

    #[test]
    fn clear_all_keeps_sort() {
        let mut q = QueryState::default();
        q.toggle_sort(SortField::Name);
        q.search_term = s!("x");
        q.end_date = NaiveDate::from_ymd_opt(2023, 6, 1);
        clear_all(&mut q);
        assert!(active_filters(&q, &EngineOptions::default()).is_empty());
        assert_eq!(q.sort_field, SortField::Name);
    }

    #[test]
    fn tags_can_be_switched_off() {
        let mut q = QueryState::default();
        q.search_term = s!("aws");
        let off = EngineOptions { active_filter_tags: false, ..EngineOptions::default() };
        assert!(active_filters(&q, &off).is_empty());
    }
}
