//! Region-based visibility: Region, LatLonAltBox, Lod

use crate::model::{AltitudeMode, ObjectBase};
use crate::xml::{get_f64, get_mode, push_f64, push_mode, RawXmlElement};

/// Culling region attached to a feature (`<Region>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub object: ObjectBase,
    pub lat_lon_alt_box: Option<LatLonAltBox>,
    pub lod: Option<Lod>,
}

/// Geographic bounding box with altitude range (`<LatLonAltBox>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatLonAltBox {
    pub object: ObjectBase,
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub east: Option<f64>,
    pub west: Option<f64>,
    pub min_altitude: Option<f64>,
    pub max_altitude: Option<f64>,
    pub altitude_mode: Option<AltitudeMode>,
}

/// Level-of-detail projection thresholds (`<Lod>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lod {
    pub object: ObjectBase,
    pub min_lod_pixels: Option<f64>,
    pub max_lod_pixels: Option<f64>,
    pub min_fade_extent: Option<f64>,
    pub max_fade_extent: Option<f64>,
}

impl Region {
    const FIELDS: &'static [&'static str] = &["LatLonAltBox", "Lod"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            lat_lon_alt_box: el.child("LatLonAltBox").and_then(LatLonAltBox::from_element),
            lod: el.child("Lod").and_then(Lod::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Region");
        self.object.write_attrs(&mut el);
        if let Some(b) = &self.lat_lon_alt_box {
            el.push_child(b.to_element());
        }
        if let Some(l) = &self.lod {
            el.push_child(l.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl LatLonAltBox {
    const FIELDS: &'static [&'static str] = &[
        "north",
        "south",
        "east",
        "west",
        "minAltitude",
        "maxAltitude",
        "altitudeMode",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            north: get_f64(el, "north"),
            south: get_f64(el, "south"),
            east: get_f64(el, "east"),
            west: get_f64(el, "west"),
            min_altitude: get_f64(el, "minAltitude"),
            max_altitude: get_f64(el, "maxAltitude"),
            altitude_mode: get_mode(el, "altitudeMode"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LatLonAltBox");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "north", self.north);
        push_f64(&mut el, "south", self.south);
        push_f64(&mut el, "east", self.east);
        push_f64(&mut el, "west", self.west);
        push_f64(&mut el, "minAltitude", self.min_altitude);
        push_f64(&mut el, "maxAltitude", self.max_altitude);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        self.object.write_other(&mut el);
        el
    }
}

impl Lod {
    const FIELDS: &'static [&'static str] = &[
        "minLodPixels",
        "maxLodPixels",
        "minFadeExtent",
        "maxFadeExtent",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            min_lod_pixels: get_f64(el, "minLodPixels"),
            max_lod_pixels: get_f64(el, "maxLodPixels"),
            min_fade_extent: get_f64(el, "minFadeExtent"),
            max_fade_extent: get_f64(el, "maxFadeExtent"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Lod");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "minLodPixels", self.min_lod_pixels);
        push_f64(&mut el, "maxLodPixels", self.max_lod_pixels);
        push_f64(&mut el, "minFadeExtent", self.min_fade_extent);
        push_f64(&mut el, "maxFadeExtent", self.max_fade_extent);
        self.object.write_other(&mut el);
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_roundtrip() {
        let region = Region {
            lat_lon_alt_box: Some(LatLonAltBox {
                north: Some(43.0),
                south: Some(42.0),
                east: Some(-121.0),
                west: Some(-122.0),
                ..Default::default()
            }),
            lod: Some(Lod {
                min_lod_pixels: Some(128.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(Region::from_element(&region.to_element()), Some(region));
    }

    #[test]
    fn test_empty_region_is_absent() {
        assert_eq!(Region::from_element(&RawXmlElement::new("Region")), None);
    }
}
