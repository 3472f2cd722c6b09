// tests/discovery.rs
//
// Discovery and binding: which buttons get wired, dedup across criteria,
// and idempotent re-binding.
//
use std::time::Instant;

use ranking_ui::controller::ButtonController;
use ranking_ui::dom::{Document, NodeId};

const PAGE: &str = r#"
<div class="container">
  <button>🔄 Generar Ranking</button>
  <button id="ranking-fast" class="generate-ranking-btn">⚡ Ranking rápido</button>
  <button id="export-btn">Exportar</button>
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
fn binds_plain_and_styled_buttons_once() {
    let doc = Document::parse(PAGE);
    let ctl = ButtonController::attach(&doc);

    // Two qualifying buttons. The styled one matches both the class arm
    // and the button-id arm, but the bound set keeps it to one binding.
    assert_eq!(ctl.bound_ids().len(), 2);

    let plain = find_button(&doc, "Generar Ranking");
    let styled = find_button(&doc, "rápido");
    let export = find_button(&doc, "Exportar");
    assert!(ctl.is_bound(plain));
    assert!(ctl.is_bound(styled));
    assert!(!ctl.is_bound(export));
}

#[test]
fn label_criterion_requires_a_bare_button() {
    // Carrying any class knocks a button out of the label criterion, and
    // the label alone never qualifies a non-button element.
    let doc = Document::parse(
        r#"
        <button class="primary">Generar Ranking</button>
        <div>Generar Ranking</div>
        "#,
    );
    let ctl = ButtonController::attach(&doc);
    assert!(ctl.bound_ids().is_empty());
}

#[test]
fn id_criterion_only_applies_to_buttons() {
    let doc = Document::parse(
        r#"
        <div id="ranking-panel"><button id="ranking-go">Ir</button></div>
        "#,
    );
    let ctl = ButtonController::attach(&doc);
    let ids = ctl.bound_ids();
    assert_eq!(ids.len(), 1);
    assert_eq!(doc.get(ids[0]).tag, "button");
}

#[test]
fn rebinding_keeps_the_captured_label() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let plain = find_button(&doc, "Generar Ranking");

    let t0 = Instant::now();
    assert!(ctl.click(&mut doc, plain, t0));

    // A second scan while the button is mid-load must not re-capture the
    // loading text as the "original" label, nor bind anything twice.
    ctl.rescan(&doc);
    assert_eq!(ctl.bound_ids().len(), 2);

    doc.append_html(doc.root(), "<div>Ranking generado con éxito</div>");
    ctl.pump(&mut doc, t0);
    assert_eq!(doc.text_of(plain), "🔄 Generar Ranking");
    assert!(!doc.get(plain).disabled);
}

#[test]
fn clicks_on_unbound_nodes_are_ignored() {
    let mut doc = Document::parse(PAGE);
    let mut ctl = ButtonController::attach(&doc);
    let export = find_button(&doc, "Exportar");

    assert!(!ctl.click(&mut doc, export, Instant::now()));
    assert_eq!(doc.text_of(export), "Exportar");
    assert!(!doc.get(export).disabled);
}
