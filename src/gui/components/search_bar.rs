// src/gui/components/search_bar.rs
//
// Search field, sort toggles, result count and copy.
// Esc clears a non-empty search; Ctrl/Cmd+K focuses the field.

use eframe::egui::{self, Key, RichText};

use crate::{
    engine::SortField,
    gui::{actions, app::App},
};

const SEARCH_ID: &str = "search_field";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let (focus_key, escape) = ctx.input(|i| {
        (i.modifiers.command && i.key_pressed(Key::K), i.key_pressed(Key::Escape))
    });
    if focus_key {
        app.focus_search = true;
    }

    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .id(egui::Id::new(SEARCH_ID))
                .hint_text("title or issuer (Ctrl+K)")
                .desired_width(280.0),
        );
        if app.focus_search {
            resp.request_focus();
            app.focus_search = false;
        }

        let mut changed = resp.changed();
        if escape && !app.search_text.is_empty() {
            app.search_text.clear();
            changed = true;
        }
        if !app.search_text.is_empty() && ui.small_button("×").on_hover_text("Clear search").clicked() {
            app.search_text.clear();
            changed = true;
        }
        if changed {
            let term = app.search_text.clone();
            app.session.set_search(&term);
        }

        ui.separator();
        ui.label("Sort:");
        for field in [SortField::Date, SortField::Name] {
            let active = app.session.query().sort_field == field;
            let text = if active {
                format!("{} {}", field.label(), app.session.query().sort_order.arrow())
            } else {
                s!(field.label())
            };
            if ui.selectable_label(active, text).clicked() {
                app.session.toggle_sort(field);
                logf!("UI: sort → {:?} {}", app.session.query().sort_field, app.session.query().sort_order);
            }
        }

        ui.separator();
        let n = app.session.result_count();
        ui.label(RichText::new(format!("{n} result(s)")).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(n > 0, egui::Button::new("Copy TSV")).clicked() {
                actions::copy(app, &ctx);
            }
        });
    });
}
