// src/gui/actions/reset.rs
use crate::{controller::ButtonController, dom::Document, gui::app::App};

/// Rebuild the demo page from scratch: fresh document, fresh bindings,
/// empty log. Any pending run is dropped on the floor.
pub fn reset(app: &mut App) {
    app.doc = Document::parse(crate::demo_page());
    app.controller = ButtonController::attach(&app.doc);
    app.run = None;
    app.events.clear();
    app.status("Esperando órdenes");
    logf!("UI: page reset");
}
