//! Network-linked content: NetworkLink, NetworkLinkControl and updates

use crate::model::{
    AbstractView, Camera, Container, Document, Feature, FeaturePart, Folder, GroundOverlay, Icon,
    ItemIcon, LatLonAltBox, LatLonBox, LineString, LinearRing, Link, Location, Lod, LookAt, Model,
    MultiGeometry, ObjectBase, Orientation, Pair, PhotoOverlay, Placemark, Point, Polygon, Region,
    Scale, ScreenOverlay, Snippet, Style, StyleMap, TimeSpan, TimeStamp, Tour,
};
use crate::xml::{get, get_bool, get_f64, push_bool, push_f64, push_str, RawXmlElement, RawXmlNode};

/// A feature that pulls its content from a fetched link (`<NetworkLink>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLink {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub refresh_visibility: Option<bool>,
    pub fly_to_view: Option<bool>,
    pub link: Option<Link>,
}

/// Server-side control block for network links (`<NetworkLinkControl>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLinkControl {
    pub min_refresh_period: Option<f64>,
    pub max_session_length: Option<f64>,
    pub cookie: Option<String>,
    pub message: Option<String>,
    pub link_name: Option<String>,
    pub link_description: Option<String>,
    pub link_snippet: Option<Snippet>,
    pub expires: Option<String>,
    pub update: Option<Update>,
    pub view: Option<AbstractView>,
    /// Unrecognized child elements, preserved for round-trip
    pub other: Vec<RawXmlNode>,
}

/// The KML diffing mechanism (`<Update>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    pub target_href: Option<String>,
    pub options: Vec<UpdateOption>,
}

/// One update operation, in document order
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOption {
    Create(Create),
    Delete(Delete),
    Change(Change),
}

/// Adds containers to a targeted document (`<Create>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Create {
    pub containers: Vec<Container>,
}

/// Removes targeted features (`<Delete>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Delete {
    pub features: Vec<Feature>,
}

/// Replaces fields of targeted objects (`<Change>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Change {
    pub objects: Vec<KmlObject>,
}

/// The full variant catalogue usable inside `<Change>`
#[derive(Clone, Debug, PartialEq)]
pub enum KmlObject {
    Document(Document),
    Folder(Folder),
    Placemark(Placemark),
    NetworkLink(NetworkLink),
    GroundOverlay(GroundOverlay),
    PhotoOverlay(PhotoOverlay),
    ScreenOverlay(ScreenOverlay),
    Tour(Tour),
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
    Model(Model),
    Style(Style),
    StyleMap(StyleMap),
    Camera(Camera),
    LookAt(LookAt),
    TimeStamp(TimeStamp),
    TimeSpan(TimeSpan),
    Region(Region),
    LatLonBox(LatLonBox),
    LatLonAltBox(LatLonAltBox),
    Lod(Lod),
    Link(Link),
    Icon(Icon),
    Location(Location),
    Orientation(Orientation),
    Scale(Scale),
    Pair(Pair),
    ItemIcon(ItemIcon),
}

impl NetworkLink {
    const FIELDS: &'static [&'static str] =
        &["refreshVisibility", "flyToView", "Link", "Url"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        // legacy <Url> is accepted on decode; encode always writes <Link>
        let link = el
            .child("Link")
            .and_then(Link::from_element)
            .or_else(|| el.child("Url").and_then(Link::from_element));
        Some(Self {
            object: ObjectBase::from_element(el, &[FeaturePart::FIELDS, Self::FIELDS]),
            feature: FeaturePart::from_element(el),
            refresh_visibility: get_bool(el, "refreshVisibility"),
            fly_to_view: get_bool(el, "flyToView"),
            link,
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("NetworkLink");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        push_bool(&mut el, "refreshVisibility", self.refresh_visibility);
        push_bool(&mut el, "flyToView", self.fly_to_view);
        if let Some(link) = &self.link {
            el.push_child(link.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl NetworkLinkControl {
    const FIELDS: &'static [&'static str] = &[
        "minRefreshPeriod",
        "maxSessionLength",
        "cookie",
        "message",
        "linkName",
        "linkDescription",
        "linkSnippet",
        "expires",
        "Update",
        "Camera",
        "LookAt",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        let other = el
            .children
            .iter()
            .filter(|n| match n {
                RawXmlNode::Element(c) => !Self::FIELDS.contains(&c.name.as_str()),
                _ => false,
            })
            .cloned()
            .collect();
        Some(Self {
            min_refresh_period: get_f64(el, "minRefreshPeriod"),
            max_session_length: get_f64(el, "maxSessionLength"),
            cookie: get(el, "cookie"),
            message: get(el, "message"),
            link_name: get(el, "linkName"),
            link_description: get(el, "linkDescription"),
            link_snippet: el.child("linkSnippet").and_then(Snippet::from_element),
            expires: get(el, "expires"),
            update: el.child("Update").and_then(Update::from_element),
            view: AbstractView::from_parent(el),
            other,
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("NetworkLinkControl");
        push_f64(&mut el, "minRefreshPeriod", self.min_refresh_period);
        push_f64(&mut el, "maxSessionLength", self.max_session_length);
        push_str(&mut el, "cookie", &self.cookie);
        push_str(&mut el, "message", &self.message);
        push_str(&mut el, "linkName", &self.link_name);
        push_str(&mut el, "linkDescription", &self.link_description);
        if let Some(snippet) = &self.link_snippet {
            el.push_child(snippet.to_element_as("linkSnippet"));
        }
        push_str(&mut el, "expires", &self.expires);
        if let Some(update) = &self.update {
            el.push_child(update.to_element());
        }
        if let Some(view) = &self.view {
            el.push_child(view.to_element());
        }
        el.children.extend(self.other.iter().cloned());
        el
    }
}

impl Update {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        let options = el
            .child_elements()
            .filter_map(UpdateOption::from_element)
            .collect();
        Some(Self {
            target_href: get(el, "targetHref"),
            options,
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Update");
        push_str(&mut el, "targetHref", &self.target_href);
        for option in &self.options {
            el.push_child(option.to_element());
        }
        el
    }
}

impl UpdateOption {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Create" => Create::from_element(el).map(UpdateOption::Create),
            "Delete" => Delete::from_element(el).map(UpdateOption::Delete),
            "Change" => Change::from_element(el).map(UpdateOption::Change),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            UpdateOption::Create(o) => o.to_element(),
            UpdateOption::Delete(o) => o.to_element(),
            UpdateOption::Change(o) => o.to_element(),
        }
    }
}

impl Create {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            containers: Container::seq_from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Create");
        for container in &self.containers {
            el.push_child(container.to_element());
        }
        el
    }
}

impl Delete {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            features: Feature::seq_from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Delete");
        for feature in &self.features {
            el.push_child(feature.to_element());
        }
        el
    }
}

impl Change {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            objects: el
                .child_elements()
                .filter_map(KmlObject::from_element)
                .collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Change");
        for object in &self.objects {
            el.push_child(object.to_element());
        }
        el
    }
}

impl KmlObject {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Document" => Document::from_element(el).map(KmlObject::Document),
            "Folder" => Folder::from_element(el).map(KmlObject::Folder),
            "Placemark" => Placemark::from_element(el).map(KmlObject::Placemark),
            "NetworkLink" => NetworkLink::from_element(el).map(KmlObject::NetworkLink),
            "GroundOverlay" => GroundOverlay::from_element(el).map(KmlObject::GroundOverlay),
            "PhotoOverlay" => PhotoOverlay::from_element(el).map(KmlObject::PhotoOverlay),
            "ScreenOverlay" => ScreenOverlay::from_element(el).map(KmlObject::ScreenOverlay),
            "gx:Tour" => Tour::from_element(el).map(KmlObject::Tour),
            "Point" => Point::from_element(el).map(KmlObject::Point),
            "LineString" => LineString::from_element(el).map(KmlObject::LineString),
            "LinearRing" => LinearRing::from_element(el).map(KmlObject::LinearRing),
            "Polygon" => Polygon::from_element(el).map(KmlObject::Polygon),
            "MultiGeometry" => MultiGeometry::from_element(el).map(KmlObject::MultiGeometry),
            "Model" => Model::from_element(el).map(KmlObject::Model),
            "Style" => Style::from_element(el).map(KmlObject::Style),
            "StyleMap" => StyleMap::from_element(el).map(KmlObject::StyleMap),
            "Camera" => Camera::from_element(el).map(KmlObject::Camera),
            "LookAt" => LookAt::from_element(el).map(KmlObject::LookAt),
            "TimeStamp" => TimeStamp::from_element(el).map(KmlObject::TimeStamp),
            "TimeSpan" => TimeSpan::from_element(el).map(KmlObject::TimeSpan),
            "Region" => Region::from_element(el).map(KmlObject::Region),
            "LatLonBox" => LatLonBox::from_element(el).map(KmlObject::LatLonBox),
            "LatLonAltBox" => LatLonAltBox::from_element(el).map(KmlObject::LatLonAltBox),
            "Lod" => Lod::from_element(el).map(KmlObject::Lod),
            "Link" => Link::from_element(el).map(KmlObject::Link),
            "Icon" => Icon::from_element(el).map(KmlObject::Icon),
            "Location" => Location::from_element(el).map(KmlObject::Location),
            "Orientation" => Orientation::from_element(el).map(KmlObject::Orientation),
            "Scale" => Scale::from_element(el).map(KmlObject::Scale),
            "Pair" => Pair::from_element(el).map(KmlObject::Pair),
            "ItemIcon" => ItemIcon::from_element(el).map(KmlObject::ItemIcon),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            KmlObject::Document(o) => o.to_element(),
            KmlObject::Folder(o) => o.to_element(),
            KmlObject::Placemark(o) => o.to_element(),
            KmlObject::NetworkLink(o) => o.to_element(),
            KmlObject::GroundOverlay(o) => o.to_element(),
            KmlObject::PhotoOverlay(o) => o.to_element(),
            KmlObject::ScreenOverlay(o) => o.to_element(),
            KmlObject::Tour(o) => o.to_element(),
            KmlObject::Point(o) => o.to_element(),
            KmlObject::LineString(o) => o.to_element(),
            KmlObject::LinearRing(o) => o.to_element(),
            KmlObject::Polygon(o) => o.to_element(),
            KmlObject::MultiGeometry(o) => o.to_element(),
            KmlObject::Model(o) => o.to_element(),
            KmlObject::Style(o) => o.to_element(),
            KmlObject::StyleMap(o) => o.to_element(),
            KmlObject::Camera(o) => o.to_element(),
            KmlObject::LookAt(o) => o.to_element(),
            KmlObject::TimeStamp(o) => o.to_element(),
            KmlObject::TimeSpan(o) => o.to_element(),
            KmlObject::Region(o) => o.to_element(),
            KmlObject::LatLonBox(o) => o.to_element(),
            KmlObject::LatLonAltBox(o) => o.to_element(),
            KmlObject::Lod(o) => o.to_element(),
            KmlObject::Link(o) => o.to_element(),
            KmlObject::Icon(o) => o.to_element(),
            KmlObject::Location(o) => o.to_element(),
            KmlObject::Orientation(o) => o.to_element(),
            KmlObject::Scale(o) => o.to_element(),
            KmlObject::Pair(o) => o.to_element(),
            KmlObject::ItemIcon(o) => o.to_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use crate::xml::text_element;

    #[test]
    fn test_network_link_roundtrip() {
        let link = NetworkLink {
            feature: FeaturePart {
                name: Some("remote layer".into()),
                ..Default::default()
            },
            refresh_visibility: Some(false),
            fly_to_view: Some(true),
            link: Some(Link::new("http://example.com/feed.kml")),
            ..Default::default()
        };
        assert_eq!(NetworkLink::from_element(&link.to_element()), Some(link));
    }

    #[test]
    fn test_legacy_url_decodes_as_link() {
        let el = RawXmlElement::new("NetworkLink").with_child(
            RawXmlElement::new("Url").with_child(text_element("href", "http://example.com/a.kml")),
        );
        let link = NetworkLink::from_element(&el).unwrap();
        assert_eq!(
            link.link.as_ref().and_then(|l| l.href.as_deref()),
            Some("http://example.com/a.kml")
        );
        // encode normalizes to <Link>
        assert!(link.to_element().child("Link").is_some());
    }

    #[test]
    fn test_update_change_targets_point() {
        let update = Update {
            target_href: Some("http://example.com/base.kml".into()),
            options: vec![UpdateOption::Change(Change {
                objects: vec![KmlObject::Point(Point {
                    object: ObjectBase {
                        target_id: Some("pt1".into()),
                        ..Default::default()
                    },
                    coordinates: Some(Coordinate::new(10.0, 20.0)),
                    ..Default::default()
                })],
            })],
        };

        let decoded = Update::from_element(&update.to_element()).unwrap();
        assert_eq!(decoded, update);
        match &decoded.options[0] {
            UpdateOption::Change(change) => match &change.objects[0] {
                KmlObject::Point(p) => {
                    assert_eq!(p.object.target_id.as_deref(), Some("pt1"))
                }
                other => panic!("expected Point, got {:?}", other),
            },
            other => panic!("expected Change, got {:?}", other),
        }
    }

    #[test]
    fn test_update_keeps_option_order() {
        let update = Update {
            target_href: None,
            options: vec![
                UpdateOption::Delete(Delete {
                    features: vec![Feature::Placemark(Placemark {
                        object: ObjectBase {
                            target_id: Some("gone".into()),
                            ..Default::default()
                        },
                        ..Default::default()
                    })],
                }),
                UpdateOption::Create(Create {
                    containers: vec![Container::Folder(Folder::default())],
                }),
            ],
        };
        let decoded = Update::from_element(&update.to_element()).unwrap();
        assert!(matches!(decoded.options[0], UpdateOption::Delete(_)));
        assert!(matches!(decoded.options[1], UpdateOption::Create(_)));
    }

    #[test]
    fn test_network_link_control_roundtrip() {
        let control = NetworkLinkControl {
            min_refresh_period: Some(30.0),
            message: Some("update available".into()),
            link_snippet: Some(Snippet::new("fresh data")),
            update: Some(Update {
                target_href: Some("base.kml".into()),
                options: Vec::new(),
            }),
            ..Default::default()
        };
        assert_eq!(
            NetworkLinkControl::from_element(&control.to_element()),
            Some(control)
        );
    }
}
