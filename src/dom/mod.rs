// src/dom/mod.rs
// Element-tree model of the host page. Stands in for the browser DOM the
// ranking page lives in: enough structure for discovery queries, text and
// disabled-state mutation, and childList-style mutation records.

use crate::core::html::{self, TagKind};

/// Stable per-element identity, and the side-table key everything else
/// (captured labels, deadlines) hangs off.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Element {
    /// Lowercased tag name.
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Direct character data of this element. Interleaving with child
    /// elements is not preserved; subtree order is close enough for the
    /// substring checks this crate does.
    pub text: String,
    pub disabled: bool,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: html::to_lower(tag),
            id: None,
            classes: Vec::new(),
            text: s!(),
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Exact class-token match (the `.foo` selector).
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    /// Substring match on the id attribute (the `[id*=...]` selector).
    pub fn id_contains(&self, fragment: &str) -> bool {
        self.id.as_deref().is_some_and(|i| i.contains(fragment))
    }

    /// Substring match across class tokens (the `[class*=...]` selector).
    pub fn class_contains(&self, fragment: &str) -> bool {
        self.classes.iter().any(|c| c.contains(fragment))
    }
}

/// One childList change: the elements added by a single insertion.
#[derive(Clone, Debug)]
pub struct MutationRecord {
    pub added: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    journal: Vec<MutationRecord>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            nodes: vec![Element::new("body")],
            root: NodeId(0),
            journal: Vec::new(),
        }
    }

    /// Best-effort parse of a page snippet. Malformed input degrades to
    /// whatever tree could be built; it never fails.
    pub fn parse(snippet: &str) -> Self {
        let mut doc = Document::new();
        let root = doc.root;
        doc.parse_into(root, snippet, false);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// All elements in document order, root included.
    pub fn all(&self) -> Vec<NodeId> {
        self.subtree(self.root)
    }

    /// Preorder walk of `id` and everything under it.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_subtree(id, &mut out);
        out
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &c in &self.nodes[id.0].children {
            self.collect_subtree(c, out);
        }
    }

    /// Concatenated subtree text, a la `textContent`.
    pub fn text_of(&self, id: NodeId) -> String {
        let mut out = s!();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let el = &self.nodes[id.0];
        out.push_str(&el.text);
        for &c in &el.children {
            self.collect_text(c, out);
        }
    }

    /// Serialized subtree markup, a la `outerHTML`.
    pub fn markup_of(&self, id: NodeId) -> String {
        let mut out = s!();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        let el = &self.nodes[id.0];
        out.push('<');
        out.push_str(&el.tag);
        if let Some(idv) = &el.id {
            out.push_str(" id=\"");
            out.push_str(idv);
            out.push('"');
        }
        if !el.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&el.classes.join(" "));
            out.push('"');
        }
        if el.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        out.push_str(&el.text);
        for &c in &el.children {
            self.write_markup(c, out);
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
    }

    /// Replace the whole subtree text with a single run of character data,
    /// the way a `textContent` assignment does. Orphaned children stay in
    /// the arena; nothing reaches them again.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        let el = &mut self.nodes[id.0];
        el.text = text.into();
        el.children.clear();
    }

    pub fn set_disabled(&mut self, id: NodeId, on: bool) {
        self.nodes[id.0].disabled = on;
    }

    /// Insert a built element and record the childList change.
    pub fn append_element(&mut self, parent: NodeId, el: Element) -> NodeId {
        let id = self.alloc(parent, el);
        self.journal.push(MutationRecord { added: vec![id] });
        id
    }

    /// Parse a fragment under `parent` and record the top-level insertions.
    /// Returns the ids of the newly added top-level elements.
    pub fn append_html(&mut self, parent: NodeId, fragment: &str) -> Vec<NodeId> {
        let added = self.parse_into(parent, fragment, true);
        if !added.is_empty() {
            self.journal.push(MutationRecord { added: added.clone() });
        }
        added
    }

    /// Drain pending mutation records. The observer half of completion
    /// detection consumes these; text/attribute edits are never recorded.
    pub fn take_mutations(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.journal)
    }

    fn alloc(&mut self, parent: NodeId, el: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(el);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Shared scanner for whole-page parse and fragment insertion.
    /// `track_top_level` collects the elements created directly under
    /// `parent` so insertions can be journaled by the caller.
    fn parse_into(&mut self, parent: NodeId, snippet: &str, track_top_level: bool) -> Vec<NodeId> {
        let mut stack: Vec<NodeId> = vec![parent];
        let mut top_level = Vec::new();
        let mut pos = 0usize;

        loop {
            let cur = *stack.last().unwrap_or(&parent);
            match html::next_tag(snippet, pos) {
                Some(tag) => {
                    self.push_text(cur, &snippet[pos..tag.start]);
                    pos = tag.end;
                    match tag.kind {
                        TagKind::Skip => {}
                        TagKind::Close => {
                            // Pop to the matching open tag; ignore strays.
                            if let Some(ix) =
                                stack.iter().rposition(|&n| self.nodes[n.0].tag == tag.name)
                            {
                                if ix > 0 {
                                    stack.truncate(ix);
                                }
                            }
                        }
                        TagKind::Open | TagKind::SelfClose => {
                            let mut el = Element::new(&tag.name);
                            el.id = html::attr_value(tag.attrs, "id").map(|v| s!(v));
                            el.classes = html::attr_value(tag.attrs, "class")
                                .map(|v| v.split_whitespace().map(|t| s!(t)).collect())
                                .unwrap_or_default();
                            el.disabled = html::has_attr(tag.attrs, "disabled");
                            let id = self.alloc(cur, el);
                            if track_top_level && cur == parent {
                                top_level.push(id);
                            }
                            if tag.kind == TagKind::Open && !is_void_tag(&tag.name) {
                                stack.push(id);
                            }
                        }
                    }
                }
                None => {
                    self.push_text(cur, &snippet[pos..]);
                    break;
                }
            }
        }
        top_level
    }

    fn push_text(&mut self, id: NodeId, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.nodes[id.0]
            .text
            .push_str(&html::normalize_entities(raw));
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn is_void_tag(name: &str) -> bool {
    matches!(name, "br" | "hr" | "img" | "input" | "meta" | "link")
}
