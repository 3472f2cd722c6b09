// src/gui/components/page_view.rs
//
// Renders the host-page document as egui widgets. Purely a view over the
// element tree: buttons become egui buttons (enabled per the element's
// disabled flag, label straight from its text), everything else is labels.

use eframe::egui::{self, RichText};

use crate::{
    controller::is_status_element,
    core::html::normalize_ws,
    dom::{Element, NodeId},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<NodeId> = None;
    draw_node(ui, app, app.doc.root(), &mut clicked);

    // Route the click after the immutable walk ends.
    if let Some(id) = clicked {
        actions::generate(app, id);
    }
}

fn draw_node(ui: &mut egui::Ui, app: &App, id: NodeId, clicked: &mut Option<NodeId>) {
    let el = app.doc.get(id);
    match el.tag.as_str() {
        "button" => {
            let label = normalize_ws(&app.doc.text_of(id));
            let resp = ui.add_enabled(!el.disabled, egui::Button::new(label));
            if resp.clicked() {
                *clicked = Some(id);
            }
        }
        "h1" | "h2" | "h3" => {
            ui.heading(normalize_ws(&app.doc.text_of(id)));
        }
        _ => {
            let text = normalize_ws(&el.text);
            if !text.is_empty() {
                ui.label(style_text(el, text));
            }
            for &c in app.doc.children(id) {
                draw_node(ui, app, c, clicked);
            }
        }
    }
}

fn style_text(el: &Element, text: String) -> RichText {
    if el.class_contains("ranking-result") {
        RichText::new(text).color(egui::Color32::from_rgb(0x4C, 0xAF, 0x50))
    } else if is_status_element(el) {
        RichText::new(text).italics()
    } else {
        RichText::new(text)
    }
}
