// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Instant,
};

use eframe::egui;

use crate::{
    config::options::Outcome,
    controller::ButtonController,
    dom::Document,
    runner::{self, RunEvent, RunHandle, RunPoll},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Ranking UI",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

/// One line in the transition log table.
pub struct EventRow {
    pub t_secs: f32,
    pub what: &'static str,
    pub detail: String,
}

pub struct App {
    // single source of truth (UI thread only)
    pub doc: Document,
    pub controller: ButtonController,

    // demo knobs
    pub outcome: Outcome,
    pub delay_secs: u32,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub run: Option<RunHandle>,

    // transition log for the bottom table
    pub events: Vec<EventRow>,
    started: Instant,
}

impl App {
    pub fn new() -> Self {
        let doc = Document::parse(crate::demo_page());
        let controller = ButtonController::attach(&doc);
        logf!("Init: {} ranking button(s) bound", controller.bound_ids().len());

        Self {
            doc,
            controller,
            outcome: Outcome::Success,
            delay_secs: 3,
            status: Arc::new(Mutex::new(s!("Esperando órdenes"))),
            run: None,
            events: Vec::new(),
            started: Instant::now(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn push_event(&mut self, what: &'static str, detail: String) {
        let t_secs = self.started.elapsed().as_secs_f32();
        self.events.push(EventRow { t_secs, what, detail });
    }

    /// Worker replies become page mutations; the controller's observer
    /// picks them up on the next pump.
    fn drain_run_events(&mut self) {
        let Some(run) = &self.run else { return };
        match run.poll() {
            RunPoll::Ready(RunEvent::Finished { markup }) => {
                let target = runner::results_container(&self.doc);
                self.doc.append_html(target, &markup);
                self.run = None;
                self.status("Respuesta recibida");
                self.push_event("respuesta", s!("el backend insertó el resultado"));
                logf!("UI: run finished, result appended");
            }
            RunPoll::Gone => {
                // Silent outcome: the deadline fallback owns recovery now.
                self.run = None;
                self.status("El backend no responde");
                self.push_event("silencio", s!("el backend cerró sin responder"));
            }
            RunPoll::Pending => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_run_events();
        let summary = self.controller.pump(&mut self.doc, now);
        if summary.restored > 0 {
            if summary.success_seen {
                self.status("Listo");
                self.push_event(
                    "restaurado",
                    format!("{} botón(es) por señal de éxito", summary.restored),
                );
            } else {
                self.status("Sin respuesta; botón liberado por tiempo");
                self.push_event(
                    "restaurado",
                    format!("{} botón(es) por tiempo agotado", summary.restored),
                );
            }
        }

        egui::TopBottomPanel::bottom("event_log")
            .resizable(false)
            .exact_height(150.0)
            .show(ctx, |ui| {
                crate::gui::components::event_log::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::control_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::page_view::draw(ui, self);
        });

        // Keep frames coming while a deadline or a worker reply is pending.
        if self.run.is_some() || self.controller.any_loading(&self.doc) {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
