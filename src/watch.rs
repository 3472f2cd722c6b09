// src/watch.rs
// Observer half of completion detection: watches childList mutation records
// for the success phrase. Kept apart from the deadline fallback so both
// triggers funnel into the controller's one restore path.

use crate::dom::{Document, MutationRecord, NodeId};

#[derive(Clone)]
pub struct SuccessWatch {
    phrase: String,
}

impl SuccessWatch {
    pub fn new(phrase: &str) -> Self {
        SuccessWatch { phrase: s!(phrase) }
    }

    /// True if any node added by these records carries the phrase, in its
    /// subtree text or its serialized markup.
    pub fn triggered(&self, doc: &Document, records: &[MutationRecord]) -> bool {
        records
            .iter()
            .flat_map(|r| r.added.iter())
            .any(|&id| self.node_matches(doc, id))
    }

    fn node_matches(&self, doc: &Document, id: NodeId) -> bool {
        doc.text_of(id).contains(&self.phrase) || doc.markup_of(id).contains(&self.phrase)
    }
}