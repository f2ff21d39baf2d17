//! Common base shared by nearly every KML element type

use crate::xml::{get, push_attr, RawXmlElement, RawXmlNode};

/// The `id`/`targetId` attributes and the opaque extension bag carried by
/// every KML object.
///
/// `other` holds child elements that no known field claimed. They are never
/// interpreted, only re-emitted after the known children on encode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectBase {
    /// Element id attribute
    pub id: Option<String>,
    /// targetId attribute (used by `<Update>` targeting)
    pub target_id: Option<String>,
    /// Unrecognized child elements, preserved for round-trip
    pub other: Vec<RawXmlNode>,
}

impl ObjectBase {
    /// Create a base with an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Decode the common attributes and collect extension children.
    ///
    /// `known` lists the child names the caller's own fields claim; every
    /// other child element lands in the opaque bag.
    pub fn from_element(el: &RawXmlElement, known: &[&[&str]]) -> Self {
        let other = el
            .children
            .iter()
            .filter(|node| match node {
                RawXmlNode::Element(c) => !known.iter().any(|g| g.contains(&c.name.as_str())),
                _ => false,
            })
            .cloned()
            .collect();

        Self {
            id: get(el, "@id"),
            target_id: get(el, "@targetId"),
            other,
        }
    }

    /// Write id/targetId onto the element when present
    pub fn write_attrs(&self, el: &mut RawXmlElement) {
        push_attr(el, "id", &self.id);
        push_attr(el, "targetId", &self.target_id);
    }

    /// Re-emit the preserved extension children
    pub fn write_other(&self, el: &mut RawXmlElement) {
        el.children.extend(self.other.iter().cloned());
    }
}
