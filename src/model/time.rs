//! Time primitives: TimeStamp and TimeSpan

use crate::model::ObjectBase;
use crate::xml::{get, push_str, RawXmlElement};

/// A single instant (`<TimeStamp>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeStamp {
    pub object: ObjectBase,
    /// dateTime text, kept verbatim
    pub when: Option<String>,
}

/// A period with optional bounds (`<TimeSpan>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSpan {
    pub object: ObjectBase,
    pub begin: Option<String>,
    pub end: Option<String>,
}

/// The TimePrimitive substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum TimePrimitive {
    TimeStamp(TimeStamp),
    TimeSpan(TimeSpan),
}

impl TimeStamp {
    const FIELDS: &'static [&'static str] = &["when"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            when: get(el, "when"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("TimeStamp");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "when", &self.when);
        self.object.write_other(&mut el);
        el
    }
}

impl TimeSpan {
    const FIELDS: &'static [&'static str] = &["begin", "end"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            begin: get(el, "begin"),
            end: get(el, "end"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("TimeSpan");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "begin", &self.begin);
        push_str(&mut el, "end", &self.end);
        self.object.write_other(&mut el);
        el
    }
}

impl TimePrimitive {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &["TimeStamp", "TimeSpan"];

    /// First declared tag present in `parent` wins
    pub fn from_parent(parent: &RawXmlElement) -> Option<Self> {
        for tag in Self::TAGS {
            if let Some(el) = parent.child(tag) {
                if let Some(t) = Self::from_element(el) {
                    return Some(t);
                }
            }
        }
        None
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "TimeStamp" => TimeStamp::from_element(el).map(TimePrimitive::TimeStamp),
            "TimeSpan" => TimeSpan::from_element(el).map(TimePrimitive::TimeSpan),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            TimePrimitive::TimeStamp(t) => t.to_element(),
            TimePrimitive::TimeSpan(t) => t.to_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::text_element;

    #[test]
    fn test_timespan_optional_bounds() {
        let el = RawXmlElement::new("TimeSpan").with_child(text_element("begin", "2024-01-01"));
        let span = TimeSpan::from_element(&el).unwrap();
        assert_eq!(span.begin.as_deref(), Some("2024-01-01"));
        assert_eq!(span.end, None);

        let out = span.to_element();
        assert!(out.child("begin").is_some());
        assert!(out.child("end").is_none());
    }

    #[test]
    fn test_empty_element_is_absent() {
        let el = RawXmlElement::new("TimeStamp");
        assert_eq!(TimeStamp::from_element(&el), None);
    }

    #[test]
    fn test_family_resolution_order() {
        let parent = RawXmlElement::new("Placemark")
            .with_child(RawXmlElement::new("TimeSpan").with_child(text_element("end", "2025")))
            .with_child(RawXmlElement::new("TimeStamp").with_child(text_element("when", "2024")));

        // TimeStamp is declared first, so it wins even though TimeSpan
        // appears earlier in the document
        match TimePrimitive::from_parent(&parent) {
            Some(TimePrimitive::TimeStamp(t)) => assert_eq!(t.when.as_deref(), Some("2024")),
            other => panic!("expected TimeStamp, got {:?}", other),
        }
    }
}
