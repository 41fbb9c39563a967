// src/gui/components/filters_panel.rs
//
// Collapsible date bounds, active-filter chips, clear-all and the range
// validation message.

use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

/// Which bound a text field feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound { Start, End }

/// Parse notice per bound; editing one field never clears the other's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundErrors {
    start: Option<String>,
    end: Option<String>,
}

impl BoundErrors {
    pub fn get(&self, bound: Bound) -> Option<&str> {
        match bound {
            Bound::Start => self.start.as_deref(),
            Bound::End => self.end.as_deref(),
        }
    }

    fn slot(&mut self, bound: Bound) -> &mut Option<String> {
        match bound {
            Bound::Start => &mut self.start,
            Bound::End => &mut self.end,
        }
    }
}

/// Read a bound field. `Some(date)` is the new bound for the query (`None`
/// inside clears it); `None` means the text is not a date yet and the query
/// stays as it is.
pub fn read_bound(errors: &mut BoundErrors, bound: Bound, text: &str) -> Option<Option<NaiveDate>> {
    let raw = text.trim();
    if raw.is_empty() {
        *errors.slot(bound) = None;
        return Some(None);
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => {
            *errors.slot(bound) = None;
            Some(Some(date))
        }
        // Half-typed dates are normal; the query only changes on a full date.
        Err(_) => {
            *errors.slot(bound) = Some(format!("'{raw}' is not a YYYY-MM-DD date"));
            None
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let opts = *app.session.options();

    ui.horizontal(|ui| {
        if opts.date_range_filter {
            let collapsed = app.state.gui.filters_collapsed;
            let arrow = if collapsed { "▶" } else { "▼" };
            if ui.button(format!("{arrow} Filters")).clicked() {
                app.state.gui.filters_collapsed = !collapsed;
                logd!("UI: filters panel collapsed → {}", !collapsed);
            }
        }

        for tag in app.session.active_filters() {
            let chip = egui::Button::new(format!("{} ×", tag.label)).small();
            if ui.add(chip).on_hover_text("Remove this filter").clicked() {
                logf!("UI: remove filter {:?}", tag.kind);
                app.session.remove_filter(tag.kind);
                app.sync_inputs_from_query();
            }
        }

        let any = !app.session.active_filters().is_empty()
            || !app.search_text.is_empty()
            || !app.start_text.is_empty()
            || !app.end_text.is_empty();
        if any && ui.button("Clear all").clicked() {
            logf!("UI: clear all filters");
            app.session.clear_all();
            app.sync_inputs_from_query();
        }
    });

    if opts.date_range_filter && !app.state.gui.filters_collapsed {
        ui.horizontal(|ui| {
            date_field(ui, app, Bound::Start);
            date_field(ui, app, Bound::End);
        });
    }

    for bound in [Bound::Start, Bound::End] {
        if let Some(msg) = app.date_errors.get(bound) {
            ui.label(RichText::new(msg).color(Color32::from_rgb(0xF0, 0xD2, 0x3C)));
        }
    }
    if let Some(err) = app.session.validation() {
        ui.label(RichText::new(format!("Invalid range: {err}")).color(Color32::from_rgb(0xDC, 0x61, 0x49)));
    }
}

fn date_field(ui: &mut egui::Ui, app: &mut App, bound: Bound) {
    let (label, text) = match bound {
        Bound::Start => ("From:", &mut app.start_text),
        Bound::End => ("To:", &mut app.end_text),
    };
    ui.label(label);
    let resp = ui.add(egui::TextEdit::singleline(&mut *text).hint_text("YYYY-MM-DD").desired_width(100.0));
    if !resp.changed() {
        return;
    }

    let Some(date) = read_bound(&mut app.date_errors, bound, text.as_str()) else {
        return;
    };
    match bound {
        Bound::Start => app.session.set_start_date(date),
        Bound::End => app.session.set_end_date(date),
    }
}
