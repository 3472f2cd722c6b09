// src/controller.rs
// Wires loading-state behavior onto the page's ranking buttons: discovery,
// busy state on click, and two independent ways back — the success signal
// and a deadline fallback — both funneled through one guarded restore.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::consts::*;
use crate::dom::{Document, Element, NodeId};
use crate::watch::SuccessWatch;

#[derive(Clone, Debug)]
struct BoundButton {
    /// Captured once, at bind time. Re-capturing on click would read the
    /// loading label back as the "original" and lose the real one.
    original_label: String,
    deadline: Option<Instant>,
}

/// What one `pump` pass did, for status lines and logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PumpSummary {
    pub success_seen: bool,
    pub restored: usize,
}

#[derive(Clone)]
pub struct ButtonController {
    // Side-table keyed by element identity. Per-button labels live here,
    // never in a shared slot: restoring N buttons must give back N labels.
    bound: HashMap<NodeId, BoundButton>,
    watch: SuccessWatch,
}

impl ButtonController {
    /// Scan the document and bind every qualifying button.
    pub fn attach(doc: &Document) -> Self {
        let mut controller = ButtonController {
            bound: HashMap::new(),
            watch: SuccessWatch::new(SUCCESS_PHRASE),
        };
        controller.rescan(doc);
        controller
    }

    /// Re-run discovery. Binding is idempotent: nodes already bound keep
    /// their captured label and nothing double-fires.
    pub fn rescan(&mut self, doc: &Document) {
        for id in doc.all() {
            let el = doc.get(id);
            // (a) unstyled buttons carrying the trigger label
            let plain = el.tag == "button"
                && el.id.is_none()
                && el.classes.is_empty()
                && doc.text_of(id).contains(TRIGGER_LABEL);
            // (b) the dedicated class, or a button id naming the feature.
            // One node can match both arms; the bound set dedups.
            let styled = el.has_class(TRIGGER_CLASS)
                || (el.tag == "button" && el.id_contains(TRIGGER_ID_FRAGMENT));
            if plain || styled {
                self.bind(doc, id);
            }
        }
        logd!("Controller: rescan → {} bound", self.bound.len());
    }

    pub fn bind(&mut self, doc: &Document, id: NodeId) {
        self.bound.entry(id).or_insert_with(|| BoundButton {
            original_label: doc.text_of(id),
            deadline: None,
        });
    }

    pub fn is_bound(&self, id: NodeId) -> bool {
        self.bound.contains_key(&id)
    }

    /// Bound buttons in document order.
    pub fn bound_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.bound.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn original_label(&self, id: NodeId) -> Option<&str> {
        self.bound.get(&id).map(|b| b.original_label.as_str())
    }

    /// Click handler. Synchronous side effects only: loading label, disable,
    /// status-element messages, deadline armed. Returns false for unbound
    /// nodes (nothing listens there).
    pub fn click(&mut self, doc: &mut Document, id: NodeId, now: Instant) -> bool {
        let Some(b) = self.bound.get_mut(&id) else {
            return false;
        };
        doc.set_text(id, LOADING_LABEL);
        doc.set_disabled(id, true);
        // Earliest deadline wins; a repeat click must not push it out.
        if b.deadline.is_none() {
            b.deadline = Some(now + Duration::from_millis(RESTORE_DEADLINE_MS));
        }
        mark_status_elements(doc);
        logf!("Controller: click → loading ({:?})", id);
        true
    }

    /// Drain the document's mutation records and advance the clock: the
    /// success signal restores everything loading, then due deadlines fire.
    pub fn pump(&mut self, doc: &mut Document, now: Instant) -> PumpSummary {
        let mut summary = PumpSummary::default();
        let records = doc.take_mutations();
        if self.watch.triggered(doc, &records) {
            summary.success_seen = true;
            summary.restored += self.restore_loading(doc);
            logf!("Controller: success signal, {} restored", summary.restored);
        }
        summary.restored += self.tick(doc, now);
        summary
    }

    /// Deadline fallback. Fires one-shot per armed button; firing on a
    /// button that already recovered is a no-op.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> usize {
        let due: Vec<NodeId> = self
            .bound
            .iter()
            .filter(|(_, b)| b.deadline.is_some_and(|d| d <= now))
            .map(|(&id, _)| id)
            .collect();
        let mut restored = 0;
        for id in due {
            logd!("Controller: deadline fired ({id:?})");
            if self.restore(doc, id) {
                restored += 1;
            }
        }
        restored
    }

    /// Restore every bound button currently showing the loading label.
    pub fn restore_loading(&mut self, doc: &mut Document) -> usize {
        let mut restored = 0;
        for id in self.bound_ids() {
            if self.restore(doc, id) {
                restored += 1;
            }
        }
        restored
    }

    /// The single restore path both triggers converge on. Guarded by the
    /// current text so a late trigger cannot double-restore, and disarms
    /// the deadline either way.
    fn restore(&mut self, doc: &mut Document, id: NodeId) -> bool {
        let Some(b) = self.bound.get_mut(&id) else {
            return false;
        };
        b.deadline = None;
        if !doc.text_of(id).contains(LOADING_MARKER) {
            return false;
        }
        doc.set_text(id, b.original_label.clone());
        doc.set_disabled(id, false);
        true
    }

    pub fn any_loading(&self, doc: &Document) -> bool {
        self.bound
            .keys()
            .any(|&id| doc.text_of(id).contains(LOADING_MARKER))
    }
}

/// The heuristic the page uses for free-text progress displays: a div with
/// "status" in its id or class, or a p with it in its class.
pub fn is_status_element(el: &Element) -> bool {
    match el.tag.as_str() {
        "div" => el.id_contains(STATUS_FRAGMENT) || el.class_contains(STATUS_FRAGMENT),
        "p" => el.class_contains(STATUS_FRAGMENT),
        _ => false,
    }
}

/// Push the processing message into idle status displays. Anything already
/// carrying a real message is left alone.
fn mark_status_elements(doc: &mut Document) {
    let targets: Vec<NodeId> = doc
        .all()
        .into_iter()
        .filter(|&id| is_status_element(doc.get(id)) && is_idle_text(&doc.text_of(id)))
        .collect();
    for id in targets {
        doc.set_text(id, PROCESSING_MESSAGE);
    }
}

fn is_idle_text(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || IDLE_MARKERS.iter().any(|m| trimmed.contains(m))
}
