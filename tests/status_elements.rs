// tests/status_elements.rs
//
// Status displays: who gets the processing message on click, and who is
// left alone.
//
use std::time::Instant;

use ranking_ui::config::consts::PROCESSING_MESSAGE;
use ranking_ui::controller::ButtonController;
use ranking_ui::dom::{Document, NodeId};

const PAGE: &str = r#"
<div class="container">
  <button>Generar Ranking</button>
  <div id="status-box">Esperando</div>
  <div class="job-status"></div>
  <p class="status-line">mostrando estado actual</p>
  <div id="status-main">Listo para exportar</div>
  <span class="status">Esperando</span>
  <p id="status-p">Esperando</p>
</div>
"#;

fn by_pos(doc: &Document, tag: &str, nth: usize) -> NodeId {
    doc.all()
        .into_iter()
        .filter(|&id| doc.get(id).tag == tag)
        .nth(nth)
        .expect("element present")
}

fn click_the_button(doc: &mut Document) {
    let mut ctl = ButtonController::attach(doc);
    let button = by_pos(doc, "button", 0);
    assert!(ctl.click(doc, button, Instant::now()));
}

#[test]
fn idle_status_elements_get_the_processing_message() {
    let mut doc = Document::parse(PAGE);
    click_the_button(&mut doc);

    // Waiting marker, empty text, and the "estado" placeholder all count
    // as idle and get overwritten.
    let waiting = by_pos(&doc, "div", 1); // #status-box
    let empty = by_pos(&doc, "div", 2); // .job-status
    let placeholder = by_pos(&doc, "p", 0); // .status-line
    assert_eq!(doc.text_of(waiting), PROCESSING_MESSAGE);
    assert_eq!(doc.text_of(empty), PROCESSING_MESSAGE);
    assert_eq!(doc.text_of(placeholder), PROCESSING_MESSAGE);
}

#[test]
fn busy_status_elements_are_left_alone() {
    let mut doc = Document::parse(PAGE);
    click_the_button(&mut doc);

    // A status element already showing a real message keeps it.
    let busy = by_pos(&doc, "div", 3); // #status-main
    assert_eq!(doc.text_of(busy), "Listo para exportar");
}

#[test]
fn only_divs_and_ps_match_the_heuristic() {
    let mut doc = Document::parse(PAGE);
    click_the_button(&mut doc);

    // span.status: wrong tag. p#status-p: p only matches via class.
    let span = by_pos(&doc, "span", 0);
    let p_by_id = by_pos(&doc, "p", 1);
    assert_eq!(doc.text_of(span), "Esperando");
    assert_eq!(doc.text_of(p_by_id), "Esperando");
}
