// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::records_to_tsv, gui::app::App};

/// Current view, in display order, as TSV on the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let n = app.session.result_count();
    if n == 0 {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but the view is empty");
        return;
    }

    let txt = records_to_tsv(app.session.visible());
    logf!("Copy: rows={n}");

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {n} row(s) to clipboard"));
}
