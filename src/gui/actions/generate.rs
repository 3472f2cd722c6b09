// src/gui/actions/generate.rs
use std::time::{Duration, Instant};

use crate::{
    config::options::RunOptions,
    core::html::normalize_ws,
    dom::NodeId,
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Click-side of the demo: let the controller flip the button into its
/// loading state, then hand the "ranking" off to the fake backend.
pub fn generate(app: &mut App, id: NodeId) {
    let now = Instant::now();
    if !app.controller.click(&mut app.doc, id, now) {
        logd!("UI: click on unbound node {id:?}, ignored");
        return;
    }

    let label = app
        .controller
        .original_label(id)
        .map(normalize_ws)
        .unwrap_or_default();
    app.push_event("clic", format!("\"{label}\" → cargando"));

    // One pending run at a time; a second click rides on the first reply.
    if app.run.is_some() {
        logd!("UI: run already pending, not spawning another");
        return;
    }

    let opts = RunOptions {
        outcome: app.outcome,
        response_delay: Duration::from_secs(app.delay_secs as u64),
        ..RunOptions::default()
    };
    let mut prog = GuiProgress::new(app.status.clone());
    app.run = Some(runner::start(&opts, Some(&mut prog)));
}
