// tests/restore.rs
//
// The two ways back from the loading state: the success signal and the
// deadline fallback, and how they interact.
//
use std::time::{Duration, Instant};

use ranking_ui::config::consts::{LOADING_LABEL, RESTORE_DEADLINE_MS, SUCCESS_PHRASE};
use ranking_ui::config::options::{Outcome, RunOptions};
use ranking_ui::controller::ButtonController;
use ranking_ui::dom::{Document, NodeId};
use ranking_ui::runner::{self, RunEvent};

const PAGE: &str = r#"
<div class="container">
  <button>🔄 Generar Ranking</button>
  <button id="ranking-fast" class="generate-ranking-btn">⚡ Ranking rápido</button>
  <div id="status-box">Esperando</div>
  <div id="results"></div>
</div>
"#;

fn find_button(doc: &Document, needle: &str) -> NodeId {
    doc.all()
        .into_iter()
        .find(|&id| doc.get(id).tag == "button" && doc.text_of(id).contains(needle))
        .expect("button present")
}

#[test]
fn click_effects_are_synchronous() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    assert!(ctl.click(&mut doc, plain, Instant::now()));
    assert_eq!(doc.text_of(plain), LOADING_LABEL);
    assert!(doc.get(plain).disabled);
}

#[test]
fn deadline_restores_the_button() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    let t0 = Instant::now();
    ctl.click(&mut doc, plain, t0);

    // One millisecond short: nothing happens.
    let summary = ctl.pump(&mut doc, t0 + Duration::from_millis(RESTORE_DEADLINE_MS - 1));
    assert_eq!(summary.restored, 0);
    assert!(doc.get(plain).disabled);

    // On the deadline: label and enabled state come back.
    let summary = ctl.pump(&mut doc, t0 + Duration::from_millis(RESTORE_DEADLINE_MS));
    assert_eq!(summary.restored, 1);
    assert!(!summary.success_seen);
    assert_eq!(doc.text_of(plain), "🔄 Generar Ranking");
    assert!(!doc.get(plain).disabled);
}

#[test]
fn success_signal_restores_each_button_to_its_own_label() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");
    let styled = find_button(&doc, "rápido");

    let t0 = Instant::now();
    ctl.click(&mut doc, plain, t0);
    ctl.click(&mut doc, styled, t0);

    doc.append_html(
        doc.root(),
        "<div>✅ Ranking generado con éxito para 8 ideas.</div>",
    );
    let summary = ctl.pump(&mut doc, t0 + Duration::from_secs(1));

    assert!(summary.success_seen);
    assert_eq!(summary.restored, 2);
    assert_eq!(doc.text_of(plain), "🔄 Generar Ranking");
    assert_eq!(doc.text_of(styled), "⚡ Ranking rápido");
    assert!(!doc.get(plain).disabled);
    assert!(!doc.get(styled).disabled);
}

#[test]
fn late_deadline_after_success_is_a_noop() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    let t0 = Instant::now();
    ctl.click(&mut doc, plain, t0);
    doc.append_html(doc.root(), "<div>Ranking generado con éxito</div>");
    ctl.pump(&mut doc, t0 + Duration::from_secs(1));

    // The timer would have fired later; by then there is nothing to do.
    let summary = ctl.pump(&mut doc, t0 + Duration::from_millis(RESTORE_DEADLINE_MS + 1));
    assert_eq!(summary.restored, 0);
    assert_eq!(doc.text_of(plain), "🔄 Generar Ranking");
}

#[test]
fn unrelated_insertions_do_not_restore() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    let t0 = Instant::now();
    ctl.click(&mut doc, plain, t0);
    doc.append_html(doc.root(), "<div>Otro resultado cualquiera</div>");

    let summary = ctl.pump(&mut doc, t0 + Duration::from_secs(1));
    assert!(!summary.success_seen);
    assert_eq!(doc.text_of(plain), LOADING_LABEL);
    assert!(doc.get(plain).disabled);
}

#[test]
fn worker_reply_drives_the_success_path() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    let t0 = Instant::now();
    ctl.click(&mut doc, plain, t0);

    let opts = RunOptions {
        outcome: Outcome::Success,
        response_delay: Duration::from_millis(10),
        ideas: 3,
    };
    let handle = runner::start(&opts, None);
    let RunEvent::Finished { markup } = handle.wait_event().expect("worker replies");
    assert!(markup.contains(SUCCESS_PHRASE));
    assert!(markup.contains("3 ideas"));

    let target = runner::results_container(&doc);
    doc.append_html(target, &markup);
    let summary = ctl.pump(&mut doc, t0 + Duration::from_secs(1));
    assert!(summary.success_seen);
    assert_eq!(doc.text_of(plain), "🔄 Generar Ranking");
}

#[test]
fn silent_worker_never_replies() {
    let opts = RunOptions {
        outcome: Outcome::Silent,
        response_delay: Duration::from_millis(10),
        ideas: 3,
    };
    let handle = runner::start(&opts, None);
    assert!(handle.wait_event().is_none());
}
