//! XML utilities: raw tree types and the shared field-access layer
//! used by every decode and encode path.

mod namespace;
mod raw;

pub use namespace::*;
pub use raw::{RawXmlElement, RawXmlNode};

/// A closed string-valued enumeration with canonical KML literals.
///
/// Decoding maps an exact literal to a variant; anything else is absent.
/// Encoding always emits the canonical literal.
pub trait ModeLiteral: Sized + Copy {
    /// Map a trimmed string against the canonical literals
    fn from_literal(s: &str) -> Option<Self>;
    /// The canonical wire literal for this variant
    fn literal(&self) -> &'static str;
}

/// Trimmed text at `path`: a child element's text, or an attribute when
/// the path starts with `@`. Missing path or empty trimmed text is `None`.
pub fn get(el: &RawXmlElement, path: &str) -> Option<String> {
    let raw = if let Some(attr) = path.strip_prefix('@') {
        el.attr(attr)?.to_string()
    } else {
        el.child(path)?.text()
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Double at `path`; unparseable text is absent, never an error
pub fn get_f64(el: &RawXmlElement, path: &str) -> Option<f64> {
    get(el, path)?.parse().ok()
}

/// Integer at `path`; unparseable text is absent, never an error
pub fn get_i32(el: &RawXmlElement, path: &str) -> Option<i32> {
    get(el, path)?.parse().ok()
}

/// Boolean at `path`. Accepts `1`/`true` and `0`/`false`, case-insensitive;
/// anything else is absent.
pub fn get_bool(el: &RawXmlElement, path: &str) -> Option<bool> {
    match get(el, path)?.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Enumerated value at `path`; an unrecognized literal is absent
pub fn get_mode<E: ModeLiteral>(el: &RawXmlElement, path: &str) -> Option<E> {
    get(el, path).and_then(|s| E::from_literal(&s))
}

/// An element holding only text
pub fn text_element(name: &str, text: impl Into<String>) -> RawXmlElement {
    RawXmlElement::new(name).with_text(text)
}

/// Append `<name>value</name>` when present; absent fields emit nothing
pub fn push_str(el: &mut RawXmlElement, name: &str, value: &Option<String>) {
    if let Some(v) = value {
        el.push_child(text_element(name, v.clone()));
    }
}

/// Append a numeric child when present
pub fn push_f64(el: &mut RawXmlElement, name: &str, value: Option<f64>) {
    if let Some(v) = value {
        el.push_child(text_element(name, v.to_string()));
    }
}

/// Append an integer child when present
pub fn push_i32(el: &mut RawXmlElement, name: &str, value: Option<i32>) {
    if let Some(v) = value {
        el.push_child(text_element(name, v.to_string()));
    }
}

/// Append a boolean child when present; booleans render `1`/`0` on the wire
pub fn push_bool(el: &mut RawXmlElement, name: &str, value: Option<bool>) {
    if let Some(v) = value {
        el.push_child(text_element(name, if v { "1" } else { "0" }));
    }
}

/// Append an enumerated child when present, using its canonical literal
pub fn push_mode<E: ModeLiteral>(el: &mut RawXmlElement, name: &str, value: Option<E>) {
    if let Some(v) = value {
        el.push_child(text_element(name, v.literal()));
    }
}

/// Set an attribute when present
pub fn push_attr(el: &mut RawXmlElement, name: &str, value: &Option<String>) {
    if let Some(v) = value {
        el.attributes.push((name.to_string(), v.clone()));
    }
}
