//! The `<kml>` document root

use crate::error::Result;
use crate::model::{Feature, NetworkLinkControl};
use crate::xml::{get, kml_namespaces, push_attr, RawXmlElement, RawXmlNode};

/// A KML document root: at most one NetworkLinkControl and one feature
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kml {
    pub hint: Option<String>,
    pub network_link_control: Option<NetworkLinkControl>,
    pub feature: Option<Feature>,
    /// Unrecognized root children, preserved for round-trip
    pub other: Vec<RawXmlNode>,
}

impl Kml {
    const FIELDS: &'static [&'static str] = &["NetworkLinkControl"];

    /// Root holding a single feature
    pub fn new(feature: Feature) -> Self {
        Self {
            feature: Some(feature),
            ..Default::default()
        }
    }

    /// Parse a KML document string.
    ///
    /// `Ok(None)` means the input had no recognizable `<kml>` root; XML
    /// well-formedness errors still surface as `Err`.
    pub fn parse(xml: &str) -> Result<Option<Self>> {
        match RawXmlElement::parse_document(xml)? {
            Some(root) => Ok(Self::from_element(&root)),
            None => Ok(None),
        }
    }

    /// Decode from a root element; a non-`<kml>` root is absent, not an
    /// error
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.name != "kml" {
            return None;
        }
        let known: &[&[&str]] = &[Self::FIELDS, Feature::TAGS];
        let other = el
            .children
            .iter()
            .filter(|n| match n {
                RawXmlNode::Element(c) => !known.iter().any(|g| g.contains(&c.name.as_str())),
                _ => false,
            })
            .cloned()
            .collect();
        Some(Self {
            hint: get(el, "@hint"),
            network_link_control: el
                .child("NetworkLinkControl")
                .and_then(NetworkLinkControl::from_element),
            feature: Feature::from_parent(el),
            other,
        })
    }

    /// Encode as the document root, declaring the KML/atom/xal/gx
    /// namespaces
    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("kml");
        for (name, uri) in kml_namespaces() {
            el.attributes.push((name.to_string(), uri.to_string()));
        }
        push_attr(&mut el, "hint", &self.hint);
        if let Some(control) = &self.network_link_control {
            el.push_child(control.to_element());
        }
        if let Some(feature) = &self.feature {
            el.push_child(feature.to_element());
        }
        el.children.extend(self.other.iter().cloned());
        el
    }

    /// Serialize to a standalone KML document string
    pub fn to_document_string(&self) -> Result<String> {
        self.to_element().to_document_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, Geometry, Placemark, Point};

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>A</name>
    <Point>
      <coordinates>1,2,3</coordinates>
    </Point>
  </Placemark>
</kml>"#;

    #[test]
    fn test_parse_minimal_placemark() {
        let kml = Kml::parse(MINIMAL).unwrap().unwrap();

        let placemark = match kml.feature {
            Some(Feature::Placemark(ref p)) => p,
            ref other => panic!("expected Placemark, got {:?}", other),
        };
        assert_eq!(placemark.feature.name.as_deref(), Some("A"));
        match placemark.geometry {
            Some(Geometry::Point(ref point)) => {
                assert_eq!(
                    point.coordinates,
                    Some(Coordinate::with_altitude(1.0, 2.0, 3.0))
                );
            }
            ref other => panic!("expected Point, got {:?}", other),
        }
    }

    #[test]
    fn test_reencode_parses_to_same_model() {
        let kml = Kml::parse(MINIMAL).unwrap().unwrap();
        let xml = kml.to_document_string().unwrap();
        let again = Kml::parse(&xml).unwrap().unwrap();
        assert_eq!(again, kml);
    }

    #[test]
    fn test_root_declares_namespaces() {
        let kml = Kml::new(Feature::Placemark(Placemark::new(
            "x",
            Geometry::Point(Point::new(Coordinate::new(0.0, 0.0))),
        )));
        let el = kml.to_element();
        assert_eq!(el.attr("xmlns"), Some("http://www.opengis.net/kml/2.2"));
        assert_eq!(el.attr("xmlns:gx"), Some("http://www.google.com/kml/ext/2.2"));
        // children do not redeclare anything
        let placemark = el.child("Placemark").unwrap();
        assert!(placemark.attributes.iter().all(|(k, _)| !k.starts_with("xmlns")));
    }

    #[test]
    fn test_unrecognized_root_is_absent() {
        assert_eq!(Kml::parse("<gpx></gpx>").unwrap(), None);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(Kml::parse("<kml><Placemark></kml>").is_err());
    }

    #[test]
    fn test_hint_attribute() {
        let kml = Kml::parse(r#"<kml hint="target=moon"></kml>"#).unwrap().unwrap();
        assert_eq!(kml.hint.as_deref(), Some("target=moon"));
        assert_eq!(kml.to_element().attr("hint"), Some("target=moon"));
    }
}
