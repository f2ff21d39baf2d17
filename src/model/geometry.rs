//! Geometry primitives and the Geometry substitution group

use crate::model::coordinates::{
    coordinate_from, coordinates_from, push_coordinate, push_coordinates,
};
use crate::model::{AltitudeMode, Coordinate, Link, ObjectBase};
use crate::xml::{get, get_bool, get_f64, get_mode, push_bool, push_f64, push_mode, push_str, RawXmlElement};

/// A single position (`<Point>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub object: ObjectBase,
    pub extrude: Option<bool>,
    pub altitude_mode: Option<AltitudeMode>,
    pub coordinates: Option<Coordinate>,
}

/// A connected line (`<LineString>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub object: ObjectBase,
    pub extrude: Option<bool>,
    pub tessellate: Option<bool>,
    pub altitude_mode: Option<AltitudeMode>,
    pub coordinates: Vec<Coordinate>,
}

/// A closed line (`<LinearRing>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRing {
    pub object: ObjectBase,
    pub extrude: Option<bool>,
    pub tessellate: Option<bool>,
    pub altitude_mode: Option<AltitudeMode>,
    pub coordinates: Vec<Coordinate>,
}

/// A ring wrapper (`<outerBoundaryIs>` / `<innerBoundaryIs>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Boundary {
    pub linear_ring: Option<LinearRing>,
}

/// A polygon with one outer ring and any number of holes (`<Polygon>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub object: ObjectBase,
    pub extrude: Option<bool>,
    pub tessellate: Option<bool>,
    pub altitude_mode: Option<AltitudeMode>,
    pub outer_boundary: Option<Boundary>,
    pub inner_boundaries: Vec<Boundary>,
}

/// A recursive bundle of geometries (`<MultiGeometry>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiGeometry {
    pub object: ObjectBase,
    pub geometries: Vec<Geometry>,
}

/// A textured 3D model reference (`<Model>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub object: ObjectBase,
    pub altitude_mode: Option<AltitudeMode>,
    pub location: Option<Location>,
    pub orientation: Option<Orientation>,
    pub scale: Option<Scale>,
    pub link: Option<Link>,
    pub resource_map: Option<ResourceMap>,
}

/// Model placement (`<Location>`); discrete child elements, altitude stays
/// absent when missing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub object: ObjectBase,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,
}

/// Model rotation (`<Orientation>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Orientation {
    pub object: ObjectBase,
    pub heading: Option<f64>,
    pub tilt: Option<f64>,
    pub roll: Option<f64>,
}

/// Model scaling (`<Scale>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scale {
    pub object: ObjectBase,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Texture file remapping (`<ResourceMap>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceMap {
    pub object: ObjectBase,
    pub aliases: Vec<Alias>,
}

/// One texture remap entry (`<Alias>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alias {
    pub object: ObjectBase,
    pub target_href: Option<String>,
    pub source_href: Option<String>,
}

/// The Geometry substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
    Model(Model),
}

impl Point {
    const FIELDS: &'static [&'static str] = &["extrude", "altitudeMode", "coordinates"];

    /// Point at a position
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinates: Some(coordinate),
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            extrude: get_bool(el, "extrude"),
            altitude_mode: get_mode(el, "altitudeMode"),
            coordinates: coordinate_from(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Point");
        self.object.write_attrs(&mut el);
        push_bool(&mut el, "extrude", self.extrude);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        push_coordinate(&mut el, self.coordinates);
        self.object.write_other(&mut el);
        el
    }
}

impl LineString {
    const FIELDS: &'static [&'static str] =
        &["extrude", "tessellate", "altitudeMode", "coordinates"];

    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            extrude: get_bool(el, "extrude"),
            tessellate: get_bool(el, "tessellate"),
            altitude_mode: get_mode(el, "altitudeMode"),
            coordinates: coordinates_from(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LineString");
        self.object.write_attrs(&mut el);
        push_bool(&mut el, "extrude", self.extrude);
        push_bool(&mut el, "tessellate", self.tessellate);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        push_coordinates(&mut el, &self.coordinates);
        self.object.write_other(&mut el);
        el
    }
}

impl LinearRing {
    const FIELDS: &'static [&'static str] =
        &["extrude", "tessellate", "altitudeMode", "coordinates"];

    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            extrude: get_bool(el, "extrude"),
            tessellate: get_bool(el, "tessellate"),
            altitude_mode: get_mode(el, "altitudeMode"),
            coordinates: coordinates_from(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LinearRing");
        self.object.write_attrs(&mut el);
        push_bool(&mut el, "extrude", self.extrude);
        push_bool(&mut el, "tessellate", self.tessellate);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        push_coordinates(&mut el, &self.coordinates);
        self.object.write_other(&mut el);
        el
    }
}

impl Boundary {
    pub fn new(ring: LinearRing) -> Self {
        Self {
            linear_ring: Some(ring),
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            linear_ring: el.child("LinearRing").and_then(LinearRing::from_element),
        })
    }

    pub fn to_element_as(&self, name: &str) -> RawXmlElement {
        let mut el = RawXmlElement::new(name);
        if let Some(ring) = &self.linear_ring {
            el.push_child(ring.to_element());
        }
        el
    }
}

impl Polygon {
    const FIELDS: &'static [&'static str] = &[
        "extrude",
        "tessellate",
        "altitudeMode",
        "outerBoundaryIs",
        "innerBoundaryIs",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            extrude: get_bool(el, "extrude"),
            tessellate: get_bool(el, "tessellate"),
            altitude_mode: get_mode(el, "altitudeMode"),
            outer_boundary: el.child("outerBoundaryIs").and_then(Boundary::from_element),
            inner_boundaries: el
                .children_named("innerBoundaryIs")
                .filter_map(Boundary::from_element)
                .collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Polygon");
        self.object.write_attrs(&mut el);
        push_bool(&mut el, "extrude", self.extrude);
        push_bool(&mut el, "tessellate", self.tessellate);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        if let Some(outer) = &self.outer_boundary {
            el.push_child(outer.to_element_as("outerBoundaryIs"));
        }
        for inner in &self.inner_boundaries {
            el.push_child(inner.to_element_as("innerBoundaryIs"));
        }
        self.object.write_other(&mut el);
        el
    }
}

impl MultiGeometry {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Geometry::TAGS]),
            geometries: Geometry::seq_from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("MultiGeometry");
        self.object.write_attrs(&mut el);
        for g in &self.geometries {
            el.push_child(g.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Model {
    const FIELDS: &'static [&'static str] = &[
        "altitudeMode",
        "Location",
        "Orientation",
        "Scale",
        "Link",
        "ResourceMap",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            altitude_mode: get_mode(el, "altitudeMode"),
            location: el.child("Location").and_then(Location::from_element),
            orientation: el.child("Orientation").and_then(Orientation::from_element),
            scale: el.child("Scale").and_then(Scale::from_element),
            link: el.child("Link").and_then(Link::from_element),
            resource_map: el.child("ResourceMap").and_then(ResourceMap::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Model");
        self.object.write_attrs(&mut el);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        if let Some(l) = &self.location {
            el.push_child(l.to_element());
        }
        if let Some(o) = &self.orientation {
            el.push_child(o.to_element());
        }
        if let Some(s) = &self.scale {
            el.push_child(s.to_element());
        }
        if let Some(l) = &self.link {
            el.push_child(l.to_element());
        }
        if let Some(r) = &self.resource_map {
            el.push_child(r.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Location {
    const FIELDS: &'static [&'static str] = &["longitude", "latitude", "altitude"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            longitude: get_f64(el, "longitude"),
            latitude: get_f64(el, "latitude"),
            altitude: get_f64(el, "altitude"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Location");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "longitude", self.longitude);
        push_f64(&mut el, "latitude", self.latitude);
        push_f64(&mut el, "altitude", self.altitude);
        self.object.write_other(&mut el);
        el
    }
}

impl Orientation {
    const FIELDS: &'static [&'static str] = &["heading", "tilt", "roll"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            heading: get_f64(el, "heading"),
            tilt: get_f64(el, "tilt"),
            roll: get_f64(el, "roll"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Orientation");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "heading", self.heading);
        push_f64(&mut el, "tilt", self.tilt);
        push_f64(&mut el, "roll", self.roll);
        self.object.write_other(&mut el);
        el
    }
}

impl Scale {
    const FIELDS: &'static [&'static str] = &["x", "y", "z"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            x: get_f64(el, "x"),
            y: get_f64(el, "y"),
            z: get_f64(el, "z"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Scale");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "x", self.x);
        push_f64(&mut el, "y", self.y);
        push_f64(&mut el, "z", self.z);
        self.object.write_other(&mut el);
        el
    }
}

impl ResourceMap {
    const FIELDS: &'static [&'static str] = &["Alias"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            aliases: el.children_named("Alias").filter_map(Alias::from_element).collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ResourceMap");
        self.object.write_attrs(&mut el);
        for a in &self.aliases {
            el.push_child(a.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Alias {
    const FIELDS: &'static [&'static str] = &["targetHref", "sourceHref"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            target_href: get(el, "targetHref"),
            source_href: get(el, "sourceHref"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Alias");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "targetHref", &self.target_href);
        push_str(&mut el, "sourceHref", &self.source_href);
        self.object.write_other(&mut el);
        el
    }
}

impl Geometry {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &[
        "Point",
        "LineString",
        "LinearRing",
        "Polygon",
        "MultiGeometry",
        "Model",
    ];

    /// First declared tag present in `parent` wins
    pub fn from_parent(parent: &RawXmlElement) -> Option<Self> {
        for tag in Self::TAGS {
            if let Some(el) = parent.child(tag) {
                if let Some(g) = Self::from_element(el) {
                    return Some(g);
                }
            }
        }
        None
    }

    /// All geometries among `parent`'s children, in document order
    pub fn seq_from_parent(parent: &RawXmlElement) -> Vec<Self> {
        parent
            .child_elements()
            .filter_map(Self::from_element)
            .collect()
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Point" => Point::from_element(el).map(Geometry::Point),
            "LineString" => LineString::from_element(el).map(Geometry::LineString),
            "LinearRing" => LinearRing::from_element(el).map(Geometry::LinearRing),
            "Polygon" => Polygon::from_element(el).map(Geometry::Polygon),
            "MultiGeometry" => MultiGeometry::from_element(el).map(Geometry::MultiGeometry),
            "Model" => Model::from_element(el).map(Geometry::Model),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            Geometry::Point(g) => g.to_element(),
            Geometry::LineString(g) => g.to_element(),
            Geometry::LinearRing(g) => g.to_element(),
            Geometry::Polygon(g) => g.to_element(),
            Geometry::MultiGeometry(g) => g.to_element(),
            Geometry::Model(g) => g.to_element(),
        }
    }
}
