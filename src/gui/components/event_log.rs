// src/gui/components/event_log.rs
//
// Transition log: one row per observable state change (click, backend
// reply, restore). Read-only view of App.events.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.label(RichText::new("Transiciones").strong());

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(60.0))
        .column(Column::exact(110.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("t").strong());
            });
            header.col(|ui| {
                ui.label(RichText::new("Evento").strong());
            });
            header.col(|ui| {
                ui.label(RichText::new("Detalle").strong());
            });
        })
        .body(|body| {
            body.rows(18.0, app.events.len(), |mut row| {
                let ev = &app.events[row.index()];
                row.col(|ui| {
                    ui.label(format!("{:>6.1}s", ev.t_secs));
                });
                row.col(|ui| {
                    ui.label(ev.what);
                });
                row.col(|ui| {
                    ui.label(ev.detail.as_str());
                });
            });
        });
}
