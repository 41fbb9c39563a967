// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    engine::Session,
    error::ResourceLoadError,
    record::RecordSet,
};

use super::{actions, components, components::filters_panel::BoundErrors};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Certifications",
        options,
        Box::new(|cc| {
            let mut app = App::new(state);
            actions::load(&mut app, &cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub type LoadResult = Result<RecordSet, ResourceLoadError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    // text the user is typing; parsed into the session on change
    pub search_text: String,
    pub start_text: String,
    pub end_text: String,
    /// Date text that does not parse, per bound (query untouched)
    pub date_errors: BoundErrors,
    pub focus_search: bool,

    // status (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    pub loader: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let session = Session::new(state.options.engine);
        logf!(
            "Init: source={}, pins={:?}",
            state.options.source.display(),
            state.options.pins
        );
        Self {
            state,
            session,
            search_text: s!(),
            start_text: s!(),
            end_text: s!(),
            date_errors: BoundErrors::default(),
            focus_search: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            loader: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool { self.loader.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Keep the text fields in step after a filter was removed elsewhere.
    pub fn sync_inputs_from_query(&mut self) {
        let q = self.session.query();
        self.search_text = q.search_term.clone();
        self.start_text = q.start_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        self.end_text = q.end_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        self.date_errors = BoundErrors::default();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running() {
                    ui.add(egui::widgets::Spinner::new().size(14.0));
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::filters_panel::draw(ui, self);
            ui.separator();
            components::cert_list::draw(ui, self);
        });
    }
}
