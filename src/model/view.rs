//! Abstract views: Camera and LookAt

use crate::model::{AltitudeMode, ObjectBase};
use crate::xml::{get_f64, get_mode, push_f64, push_mode, RawXmlElement};

/// Free viewpoint (`<Camera>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Camera {
    pub object: ObjectBase,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub tilt: Option<f64>,
    pub roll: Option<f64>,
    pub altitude_mode: Option<AltitudeMode>,
}

/// Target-relative viewpoint (`<LookAt>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookAt {
    pub object: ObjectBase,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub tilt: Option<f64>,
    /// Distance from the look-at point to the camera, in meters
    pub range: Option<f64>,
    pub altitude_mode: Option<AltitudeMode>,
}

/// The AbstractView substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum AbstractView {
    Camera(Camera),
    LookAt(LookAt),
}

impl Camera {
    const FIELDS: &'static [&'static str] = &[
        "longitude",
        "latitude",
        "altitude",
        "heading",
        "tilt",
        "roll",
        "altitudeMode",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            longitude: get_f64(el, "longitude"),
            latitude: get_f64(el, "latitude"),
            altitude: get_f64(el, "altitude"),
            heading: get_f64(el, "heading"),
            tilt: get_f64(el, "tilt"),
            roll: get_f64(el, "roll"),
            altitude_mode: get_mode(el, "altitudeMode"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Camera");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "longitude", self.longitude);
        push_f64(&mut el, "latitude", self.latitude);
        push_f64(&mut el, "altitude", self.altitude);
        push_f64(&mut el, "heading", self.heading);
        push_f64(&mut el, "tilt", self.tilt);
        push_f64(&mut el, "roll", self.roll);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        self.object.write_other(&mut el);
        el
    }
}

impl LookAt {
    const FIELDS: &'static [&'static str] = &[
        "longitude",
        "latitude",
        "altitude",
        "heading",
        "tilt",
        "range",
        "altitudeMode",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            longitude: get_f64(el, "longitude"),
            latitude: get_f64(el, "latitude"),
            altitude: get_f64(el, "altitude"),
            heading: get_f64(el, "heading"),
            tilt: get_f64(el, "tilt"),
            range: get_f64(el, "range"),
            altitude_mode: get_mode(el, "altitudeMode"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LookAt");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "longitude", self.longitude);
        push_f64(&mut el, "latitude", self.latitude);
        push_f64(&mut el, "altitude", self.altitude);
        push_f64(&mut el, "heading", self.heading);
        push_f64(&mut el, "tilt", self.tilt);
        push_f64(&mut el, "range", self.range);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        self.object.write_other(&mut el);
        el
    }
}

impl AbstractView {
    /// Camera is declared before LookAt; with both physically present the
    /// Camera wins
    pub const TAGS: &'static [&'static str] = &["Camera", "LookAt"];

    pub fn from_parent(parent: &RawXmlElement) -> Option<Self> {
        for tag in Self::TAGS {
            if let Some(el) = parent.child(tag) {
                if let Some(v) = Self::from_element(el) {
                    return Some(v);
                }
            }
        }
        None
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Camera" => Camera::from_element(el).map(AbstractView::Camera),
            "LookAt" => LookAt::from_element(el).map(AbstractView::LookAt),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            AbstractView::Camera(v) => v.to_element(),
            AbstractView::LookAt(v) => v.to_element(),
        }
    }
}
