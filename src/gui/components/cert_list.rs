// src/gui/components/cert_list.rs
//
// The result list. Purely a view over `Session::visible()`, except for the
// Retry button in the error state.

use chrono::Local;
use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    engine::LoadState,
    gui::{actions, app::App},
    record::CertificateRecord,
};

const PIN_COLOR: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
const EXPIRED_COLOR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let failure = match app.session.load_state() {
        LoadState::Loading => {
            ui.centered_and_justified(|ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::widgets::Spinner::new().size(16.0));
                    ui.label("Loading certifications…");
                });
            });
            return;
        }
        LoadState::Failed(e) => Some(e.to_string()),
        LoadState::Ready => None,
    };

    if let Some(msg) = failure {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("Could not load certifications").strong().color(EXPIRED_COLOR));
            ui.label(msg);
            if ui.button("Retry").clicked() {
                logf!("UI: retry load");
                let ctx = ui.ctx().clone();
                actions::load(app, &ctx);
            }
        });
        return;
    }

    if app.session.result_count() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("No certifications found").heading());
            if !app.session.active_filters().is_empty() {
                ui.label("Try removing a filter.");
            }
        });
        return;
    }

    let rows: Vec<&CertificateRecord> = app.session.visible().collect();
    table(ui, &rows);
}

fn table(ui: &mut egui::Ui, rows: &[&CertificateRecord]) {
    let today = Local::now().date_naive();

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(18.0))
        .column(Column::initial(320.0).resizable(true).clip(true))
        .column(Column::initial(180.0).resizable(true).clip(true))
        .column(Column::initial(90.0))
        .column(Column::initial(140.0))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            for title in ["", "Title", "Issuer", "Issued", "Expiry", "Credential id"] {
                header.col(|ui| { ui.strong(title); });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let Some(rec) = rows.get(row.index()) else { return };
                let pinned = rec.is_pinned();

                row.col(|ui| {
                    if pinned {
                        ui.label(RichText::new("★").color(PIN_COLOR));
                    }
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    let mut title = RichText::new(&rec.title);
                    if pinned {
                        title = title.strong().color(PIN_COLOR);
                    }
                    if rec.has_link() {
                        ui.hyperlink_to(title, &rec.link).on_hover_text(&rec.link);
                    } else {
                        ui.label(title);
                    }
                });
                row.col(|ui| { ui.label(&rec.enterprise); });
                row.col(|ui| {
                    ui.label(rec.expedition_date.display_month_year())
                        .on_hover_text(rec.expedition_date.display_long());
                });
                row.col(|ui| {
                    match rec.expire_date {
                        Some(d) if rec.is_expired(today) => {
                            ui.label(RichText::new(format!("Expired {}", d.display_month_year())).color(EXPIRED_COLOR));
                        }
                        Some(d) => { ui.label(format!("Expires {}", d.display_month_year())); }
                        None => { ui.weak("No expiry"); }
                    }
                });
                row.col(|ui| { ui.monospace(&rec.id); });
            });
        });
}
