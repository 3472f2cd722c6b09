// src/gui/components/control_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::options::Outcome,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Demo knobs: what the fake backend does, and how fast ---
    ui.horizontal(|ui| {
        ui.label("Backend:");
        let prev = app.outcome;
        ui.selectable_value(&mut app.outcome, Outcome::Success, "Responde");
        ui.selectable_value(&mut app.outcome, Outcome::Silent, "Se queda callado");
        if app.outcome != prev {
            logf!("UI: outcome → {:?}", app.outcome);
        }

        ui.separator();

        ui.label("Respuesta en:");
        for (label, secs) in [("1 s", 1u32), ("3 s", 3), ("10 s", 10)] {
            ui.selectable_value(&mut app.delay_secs, secs, label);
        }
    });

    // --- Actions + live status ---
    ui.horizontal(|ui| {
        if ui.button("Reiniciar página").clicked() {
            actions::reset(app);
        }

        if app.run.is_some() || app.controller.any_loading(&app.doc) {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}
