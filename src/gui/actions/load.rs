// src/gui/actions/load.rs
//
// One-shot record set load on a worker thread. The UI stays in the loading
// state until `poll` picks up the result.

use std::{
    io,
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{error::ResourceLoadError, gui::app::App, store};

pub fn load(app: &mut App, ctx: &egui::Context) {
    if app.running() { return; }

    let path = app.state.options.source.clone();
    let pins = app.state.options.pins.clone();
    let status_arc = app.status.clone();
    let ctx2 = ctx.clone();

    app.session.begin_load();
    app.status(format!("Loading {}…", path.display()));
    logf!("Load: Begin {}", path.display());

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let res = store::load_records(&path).map(|mut set| {
            if !pins.is_empty() {
                let marked = set.pin_positions(&pins);
                logd!("Load: pinned {marked} of {} positions", pins.len());
            }
            set
        });
        let msg = match &res {
            Ok(set) => format!("Ready: {} certifications", set.len()),
            Err(e) => format!("Error: {e}"),
        };
        if let Ok(mut s) = status_arc.lock() {
            *s = msg;
        }
        // Receiver gone means the window closed; nothing to report to.
        let _ = tx.send(res);
        ctx2.request_repaint();
    });

    app.loader = Some(rx);
}

/// Hand a finished load to the session. Cheap when nothing is pending.
pub fn poll(app: &mut App) {
    let Some(rx) = &app.loader else { return };

    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(ResourceLoadError::Io {
            path: app.state.options.source.clone(),
            source: io::Error::other("loader stopped without a result"),
        }),
    };

    app.loader = None;
    if let Err(e) = &res {
        app.status(format!("Error: {e}"));
    }
    app.session.finish_load(res);
}
