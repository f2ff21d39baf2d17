//! Features: the common feature bundle, Placemark and the containers

use crate::model::{
    AbstractView, AtomAuthor, AtomLink, ExtendedData, Geometry, GroundOverlay, NetworkLink,
    ObjectBase, PhotoOverlay, Region, Schema, ScreenOverlay, Snippet, StyleSelector,
    TimePrimitive, Tour,
};
use crate::xml::{get, get_bool, push_bool, push_str, RawXmlElement};

/// The fields every feature variant shares
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeaturePart {
    pub name: Option<String>,
    pub visibility: Option<bool>,
    pub open: Option<bool>,
    pub author: Option<AtomAuthor>,
    pub atom_link: Option<AtomLink>,
    pub address: Option<String>,
    /// Structured xAL address, carried opaquely
    pub address_details: Option<RawXmlElement>,
    pub phone_number: Option<String>,
    pub snippet: Option<Snippet>,
    pub description: Option<String>,
    pub view: Option<AbstractView>,
    pub time: Option<TimePrimitive>,
    pub style_url: Option<String>,
    /// Inline style selectors; an inline style wins over a resolved
    /// shared style, which is the application's concern, not ours
    pub style_selectors: Vec<StyleSelector>,
    pub region: Option<Region>,
    pub extended_data: Option<ExtendedData>,
    pub gx_balloon_visibility: Option<bool>,
}

/// The Feature substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum Feature {
    Document(Document),
    Folder(Folder),
    Placemark(Placemark),
    NetworkLink(NetworkLink),
    PhotoOverlay(PhotoOverlay),
    ScreenOverlay(ScreenOverlay),
    GroundOverlay(GroundOverlay),
    Tour(Tour),
}

/// The Container subset of Feature (used by `<Create>`)
#[derive(Clone, Debug, PartialEq)]
pub enum Container {
    Document(Document),
    Folder(Folder),
}

/// A feature with a geometry (`<Placemark>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placemark {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub geometry: Option<Geometry>,
}

/// The root-level container with shared styles and schemas (`<Document>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub schemas: Vec<Schema>,
    pub features: Vec<Feature>,
}

/// A plain grouping container (`<Folder>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Folder {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub features: Vec<Feature>,
}

impl FeaturePart {
    /// Child names the common bundle claims; concrete features append
    /// their own
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "visibility",
        "open",
        "atom:author",
        "atom:link",
        "address",
        "xal:AddressDetails",
        "phoneNumber",
        "Snippet",
        "description",
        "Camera",
        "LookAt",
        "TimeStamp",
        "TimeSpan",
        "styleUrl",
        "Style",
        "StyleMap",
        "Region",
        "ExtendedData",
        "gx:balloonVisibility",
    ];

    pub fn from_element(el: &RawXmlElement) -> Self {
        Self {
            name: get(el, "name"),
            visibility: get_bool(el, "visibility"),
            open: get_bool(el, "open"),
            author: el.child("atom:author").and_then(AtomAuthor::from_element),
            atom_link: el.child("atom:link").and_then(AtomLink::from_element),
            address: get(el, "address"),
            address_details: el.child("xal:AddressDetails").cloned(),
            phone_number: get(el, "phoneNumber"),
            snippet: el.child("Snippet").and_then(Snippet::from_element),
            description: get(el, "description"),
            view: AbstractView::from_parent(el),
            time: TimePrimitive::from_parent(el),
            style_url: get(el, "styleUrl"),
            style_selectors: StyleSelector::seq_from_parent(el),
            region: el.child("Region").and_then(Region::from_element),
            extended_data: el.child("ExtendedData").and_then(ExtendedData::from_element),
            gx_balloon_visibility: get_bool(el, "gx:balloonVisibility"),
        }
    }

    /// Emit the common children in schema order
    pub fn write_children(&self, el: &mut RawXmlElement) {
        push_str(el, "name", &self.name);
        push_bool(el, "visibility", self.visibility);
        push_bool(el, "open", self.open);
        if let Some(author) = &self.author {
            el.push_child(author.to_element());
        }
        if let Some(link) = &self.atom_link {
            el.push_child(link.to_element());
        }
        push_str(el, "address", &self.address);
        if let Some(details) = &self.address_details {
            el.push_child(details.clone());
        }
        push_str(el, "phoneNumber", &self.phone_number);
        if let Some(snippet) = &self.snippet {
            el.push_child(snippet.to_element_as("Snippet"));
        }
        push_str(el, "description", &self.description);
        if let Some(view) = &self.view {
            el.push_child(view.to_element());
        }
        if let Some(time) = &self.time {
            el.push_child(time.to_element());
        }
        push_str(el, "styleUrl", &self.style_url);
        for selector in &self.style_selectors {
            el.push_child(selector.to_element());
        }
        if let Some(region) = &self.region {
            el.push_child(region.to_element());
        }
        if let Some(data) = &self.extended_data {
            el.push_child(data.to_element());
        }
        push_bool(el, "gx:balloonVisibility", self.gx_balloon_visibility);
    }
}

impl Placemark {
    /// Placemark with a name and geometry
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            feature: FeaturePart {
                name: Some(name.into()),
                ..Default::default()
            },
            geometry: Some(geometry),
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[FeaturePart::FIELDS, Geometry::TAGS]),
            feature: FeaturePart::from_element(el),
            geometry: Geometry::from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Placemark");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        if let Some(g) = &self.geometry {
            el.push_child(g.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Document {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(
                el,
                &[FeaturePart::FIELDS, &["Schema"], Feature::TAGS],
            ),
            feature: FeaturePart::from_element(el),
            schemas: el.children_named("Schema").filter_map(Schema::from_element).collect(),
            features: Feature::seq_from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Document");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        for schema in &self.schemas {
            el.push_child(schema.to_element());
        }
        for feature in &self.features {
            el.push_child(feature.to_element());
        }
        self.object.write_other(&mut el);
        el
    }

    /// Append a feature, copy-on-write style
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

impl Folder {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[FeaturePart::FIELDS, Feature::TAGS]),
            feature: FeaturePart::from_element(el),
            features: Feature::seq_from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Folder");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        for feature in &self.features {
            el.push_child(feature.to_element());
        }
        self.object.write_other(&mut el);
        el
    }

    /// Append a feature, copy-on-write style
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

impl Feature {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &[
        "Document",
        "Folder",
        "Placemark",
        "NetworkLink",
        "PhotoOverlay",
        "ScreenOverlay",
        "GroundOverlay",
        "gx:Tour",
    ];

    /// First declared tag present in `parent` wins
    pub fn from_parent(parent: &RawXmlElement) -> Option<Self> {
        for tag in Self::TAGS {
            if let Some(el) = parent.child(tag) {
                if let Some(f) = Self::from_element(el) {
                    return Some(f);
                }
            }
        }
        None
    }

    /// All features among `parent`'s children, in document order
    pub fn seq_from_parent(parent: &RawXmlElement) -> Vec<Self> {
        parent
            .child_elements()
            .filter_map(Self::from_element)
            .collect()
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Document" => Document::from_element(el).map(Feature::Document),
            "Folder" => Folder::from_element(el).map(Feature::Folder),
            "Placemark" => Placemark::from_element(el).map(Feature::Placemark),
            "NetworkLink" => NetworkLink::from_element(el).map(Feature::NetworkLink),
            "PhotoOverlay" => PhotoOverlay::from_element(el).map(Feature::PhotoOverlay),
            "ScreenOverlay" => ScreenOverlay::from_element(el).map(Feature::ScreenOverlay),
            "GroundOverlay" => GroundOverlay::from_element(el).map(Feature::GroundOverlay),
            "gx:Tour" => Tour::from_element(el).map(Feature::Tour),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            Feature::Document(f) => f.to_element(),
            Feature::Folder(f) => f.to_element(),
            Feature::Placemark(f) => f.to_element(),
            Feature::NetworkLink(f) => f.to_element(),
            Feature::PhotoOverlay(f) => f.to_element(),
            Feature::ScreenOverlay(f) => f.to_element(),
            Feature::GroundOverlay(f) => f.to_element(),
            Feature::Tour(f) => f.to_element(),
        }
    }

    /// The common feature bundle of any variant
    pub fn feature_part(&self) -> &FeaturePart {
        match self {
            Feature::Document(f) => &f.feature,
            Feature::Folder(f) => &f.feature,
            Feature::Placemark(f) => &f.feature,
            Feature::NetworkLink(f) => &f.feature,
            Feature::PhotoOverlay(f) => &f.feature,
            Feature::ScreenOverlay(f) => &f.feature,
            Feature::GroundOverlay(f) => &f.feature,
            Feature::Tour(f) => &f.feature,
        }
    }

    /// Feature name, when present
    pub fn name(&self) -> Option<&str> {
        self.feature_part().name.as_deref()
    }
}

impl Container {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &["Document", "Folder"];

    /// All containers among `parent`'s children, in document order
    pub fn seq_from_parent(parent: &RawXmlElement) -> Vec<Self> {
        parent
            .child_elements()
            .filter_map(Self::from_element)
            .collect()
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Document" => Document::from_element(el).map(Container::Document),
            "Folder" => Folder::from_element(el).map(Container::Folder),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            Container::Document(c) => c.to_element(),
            Container::Folder(c) => c.to_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, Point, Style, StyleMap};
    use crate::xml::text_element;

    #[test]
    fn test_placemark_roundtrip() {
        let placemark = Placemark::new(
            "Test Pin",
            Geometry::Point(Point::new(Coordinate::with_altitude(1.0, 2.0, 3.0))),
        );
        assert_eq!(
            Placemark::from_element(&placemark.to_element()),
            Some(placemark)
        );
    }

    #[test]
    fn test_document_keeps_feature_order() {
        let doc = Document::default()
            .with_feature(Feature::Placemark(Placemark::new(
                "first",
                Geometry::Point(Point::new(Coordinate::new(0.0, 0.0))),
            )))
            .with_feature(Feature::Folder(Folder {
                feature: FeaturePart {
                    name: Some("second".into()),
                    ..Default::default()
                },
                ..Default::default()
            }));

        let decoded = Document::from_element(&doc.to_element()).unwrap();
        assert_eq!(decoded.features.len(), 2);
        assert_eq!(decoded.features[0].name(), Some("first"));
        assert_eq!(decoded.features[1].name(), Some("second"));
    }

    #[test]
    fn test_inline_styles_and_style_url_coexist() {
        let el = RawXmlElement::new("Placemark")
            .with_child(text_element("styleUrl", "#shared"))
            .with_child(RawXmlElement::new("Style").with_child(
                RawXmlElement::new("LineStyle").with_child(text_element("width", "3")),
            ))
            .with_child(RawXmlElement::new("StyleMap").with_child(
                RawXmlElement::new("Pair").with_child(text_element("key", "normal")),
            ));

        let placemark = Placemark::from_element(&el).unwrap();
        assert_eq!(placemark.feature.style_url.as_deref(), Some("#shared"));
        assert_eq!(placemark.feature.style_selectors.len(), 2);
        assert!(matches!(
            placemark.feature.style_selectors[0],
            StyleSelector::Style(Style { .. })
        ));
        assert!(matches!(
            placemark.feature.style_selectors[1],
            StyleSelector::StyleMap(StyleMap { .. })
        ));
    }

    #[test]
    fn test_address_details_passthrough() {
        let xal = RawXmlElement::new("xal:AddressDetails").with_child(
            RawXmlElement::new("xal:Country").with_text("NZ"),
        );
        let el = RawXmlElement::new("Placemark").with_child(xal.clone());

        let placemark = Placemark::from_element(&el).unwrap();
        assert_eq!(placemark.feature.address_details, Some(xal));

        let out = placemark.to_element();
        assert!(out.child("xal:AddressDetails").is_some());
    }

    #[test]
    fn test_absent_fields_emit_no_tags() {
        let placemark = Placemark {
            object: ObjectBase::with_id("p1"),
            ..Default::default()
        };
        let el = placemark.to_element();
        assert_eq!(el.attr("id"), Some("p1"));
        assert!(el.children.is_empty());
    }
}
