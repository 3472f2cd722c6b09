// src/core/html.rs
// Low-level HTML string scanning helpers.
// These are deliberately naive but tailored to the markup the ranking page
// emits. They operate case-insensitively on ASCII tag/attribute names.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TagKind {
    Open,
    Close,
    SelfClose,
    /// Comments, doctype, processing instructions. Step over these.
    Skip,
}

/// One scanned tag token.
pub struct Tag<'a> {
    /// Lowercased tag name ("button", "div", ...).
    pub name: String,
    /// Raw attribute slice between the name and the closing '>'.
    pub attrs: &'a str,
    pub kind: TagKind,
    /// Byte offset of the '<'.
    pub start: usize,
    /// Byte offset just past the '>'.
    pub end: usize,
}

/// Scan the next tag from `from` onwards.
/// Text between `from` and the returned tag's `start` is character data.
pub fn next_tag(s: &str, from: usize) -> Option<Tag<'_>> {
    let start = s.get(from..)?.find('<')? + from;
    let gt = s[start..].find('>')? + start;
    let end = gt + 1;
    let inner = &s[start + 1..gt];

    if inner.starts_with('!') || inner.starts_with('?') {
        return Some(Tag { name: s!(), attrs: "", kind: TagKind::Skip, start, end });
    }

    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let (self_closing, inner) = match inner.strip_suffix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let inner = inner.trim();
    let name_end = inner
        .find(|c: char| c.is_whitespace())
        .unwrap_or(inner.len());
    let name = to_lower(&inner[..name_end]);
    if name.is_empty() {
        return Some(Tag { name, attrs: "", kind: TagKind::Skip, start, end });
    }
    let attrs = inner[name_end..].trim();

    let kind = if closing {
        TagKind::Close
    } else if self_closing {
        TagKind::SelfClose
    } else {
        TagKind::Open
    };
    Some(Tag { name, attrs, kind, start, end })
}

/// Extract the value of a named attribute from a raw attribute slice.
/// Handles `name="v"`, `name='v'` and bare `name=v`.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(attrs);
    let needle = to_lower(name);
    let bytes = attrs.as_bytes();
    let mut from = 0;
    while let Some(rel) = lc.get(from..)?.find(&needle) {
        let at = from + rel;
        from = at + needle.len();
        // Token boundary on the left, otherwise "id" matches inside "data-id".
        if at > 0 && is_name_byte(bytes[at - 1]) {
            continue;
        }
        let mut j = at + needle.len();
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != b'=' {
            continue;
        }
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= bytes.len() {
            return None;
        }
        if bytes[j] == b'"' || bytes[j] == b'\'' {
            let quote = bytes[j] as char;
            let vstart = j + 1;
            let vend = attrs[vstart..].find(quote)? + vstart;
            return Some(&attrs[vstart..vend]);
        }
        let vstart = j;
        let vend = attrs[vstart..]
            .find(|c: char| c.is_whitespace())
            .map_or(attrs.len(), |k| k + vstart);
        return Some(&attrs[vstart..vend]);
    }
    None
}

/// True if the attribute is present at all, bare (`disabled`) or valued
/// (`disabled="disabled"`). Presence is what matters for boolean attributes.
/// Quoted attribute VALUES can fool the scan; good enough for these pages.
pub fn has_attr(attrs: &str, name: &str) -> bool {
    let lc = to_lower(attrs);
    let needle = to_lower(name);
    let bytes = lc.as_bytes();
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();
        if at > 0 && is_name_byte(bytes[at - 1]) {
            continue;
        }
        let j = at + needle.len();
        if j < bytes.len() && is_name_byte(bytes[j]) {
            continue;
        }
        return true;
    }
    false
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Minimal HTML entity decoding: handle `&nbsp;` and `&amp;` only.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
