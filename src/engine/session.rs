// src/engine/session.rs
//
// The input-handling boundary. Every user action lands here, mutates the
// QueryState and re-runs the engine. Expected failures become state:
// - invalid range: `validation` is set and the previous view stays
// - load failure: `LoadState::Failed`, no records, retry via `begin_load`

use chrono::NaiveDate;

use crate::config::options::EngineOptions;
use crate::data::OrderedView;
use crate::engine::{
    engine,
    filters::{self, ActiveFilter, FilterKind},
    types::{QueryState, SortField, SortOrder},
};
use crate::error::{InvalidDateRangeError, ResourceLoadError};
use crate::record::{CertificateRecord, RecordSet};

#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(ResourceLoadError),
}

#[derive(Debug, Default)]
pub struct Session {
    options: EngineOptions,
    state: QueryState,
    load: LoadState,
    records: RecordSet,
    view: OrderedView,
    validation: Option<InvalidDateRangeError>,
}

impl Session {
    /// A session waiting for its record set.
    pub fn new(options: EngineOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// A session over an already loaded set.
    pub fn with_records(options: EngineOptions, records: RecordSet) -> Self {
        let mut s = Self::new(options);
        s.finish_load(Ok(records));
        s
    }

    /* ---------------- Loading ---------------- */

    /// Enter the loading state. Any previous data is dropped.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
        self.records = RecordSet::default();
        self.view = OrderedView::default();
        self.validation = None;
    }

    pub fn finish_load(&mut self, result: Result<RecordSet, ResourceLoadError>) {
        match result {
            Ok(set) => {
                logf!("Session: {} records ready", set.len());
                self.records = set;
                self.load = LoadState::Ready;
                self.refresh();
            }
            Err(e) => {
                loge!("Session: load failed: {e}");
                self.records = RecordSet::default();
                self.view = OrderedView::default();
                self.load = LoadState::Failed(e);
            }
        }
    }

    /* ---------------- Inputs ---------------- */

    pub fn set_search(&mut self, term: &str) {
        logd!("Input: search '{term}'");
        self.state.search_term = s!(term);
        self.refresh();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        logd!("Input: start date {date:?}");
        self.state.start_date = date;
        self.refresh();
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        logd!("Input: end date {date:?}");
        self.state.end_date = date;
        self.refresh();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.state.toggle_sort(field);
        logd!("Input: sort {:?} {}", self.state.sort_field, self.state.sort_order);
        self.refresh();
    }

    /// Set field and order directly (command line).
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.state.sort_field = field;
        self.state.sort_order = order;
        self.refresh();
    }

    pub fn remove_filter(&mut self, kind: FilterKind) {
        logd!("Input: remove filter {kind:?}");
        filters::remove_filter(&mut self.state, kind);
        self.refresh();
    }

    pub fn clear_all(&mut self) {
        logd!("Input: clear all filters");
        filters::clear_all(&mut self.state);
        self.refresh();
    }

    /// Re-run the engine. On an invalid range the current view is kept.
    pub fn refresh(&mut self) {
        if !self.is_ready() {
            return;
        }
        match engine::apply(&self.records, &self.state, &self.options) {
            Ok(view) => {
                self.view = view;
                self.validation = None;
            }
            Err(e) => {
                logw!("Session: {e}");
                self.validation = Some(e);
            }
        }
    }

    /* ---------------- Outputs ---------------- */

    pub fn load_state(&self) -> &LoadState { &self.load }
    pub fn is_ready(&self) -> bool { matches!(self.load, LoadState::Ready) }
    pub fn query(&self) -> &QueryState { &self.state }
    pub fn options(&self) -> &EngineOptions { &self.options }
    pub fn records(&self) -> &RecordSet { &self.records }
    pub fn view(&self) -> &OrderedView { &self.view }
    pub fn validation(&self) -> Option<&InvalidDateRangeError> { self.validation.as_ref() }

    pub fn result_count(&self) -> usize {
        self.view.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &CertificateRecord> + '_ {
        self.view.iter(&self.records)
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        filters::active_filters(&self.state, &self.options)
    }
}
