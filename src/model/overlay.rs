//! Image overlays: ground, screen and photo

use crate::model::coordinates::{coordinates_from, push_coordinates};
use crate::model::{
    AltitudeMode, Coordinate, FeaturePart, GridOrigin, Icon, ObjectBase, Point, Shape, Vec2,
};
use crate::xml::{
    get, get_f64, get_i32, get_mode, push_f64, push_i32, push_mode, push_str, RawXmlElement,
};

/// The fields every overlay variant shares
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayPart {
    /// Blend color in aabbggrr hex
    pub color: Option<String>,
    pub draw_order: Option<i32>,
    pub icon: Option<Icon>,
}

/// An image draped over terrain (`<GroundOverlay>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroundOverlay {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub overlay: OverlayPart,
    pub altitude: Option<f64>,
    pub altitude_mode: Option<AltitudeMode>,
    pub lat_lon_box: Option<LatLonBox>,
    pub gx_lat_lon_quad: Option<LatLonQuad>,
}

/// Axis-aligned overlay footprint (`<LatLonBox>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatLonBox {
    pub object: ObjectBase,
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub east: Option<f64>,
    pub west: Option<f64>,
    pub rotation: Option<f64>,
}

/// Free quadrilateral overlay footprint (`<gx:LatLonQuad>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatLonQuad {
    pub object: ObjectBase,
    /// Four corners, counter-clockwise from lower-left
    pub coordinates: Vec<Coordinate>,
}

/// An image fixed to the screen (`<ScreenOverlay>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenOverlay {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub overlay: OverlayPart,
    pub overlay_xy: Option<Vec2>,
    pub screen_xy: Option<Vec2>,
    pub rotation_xy: Option<Vec2>,
    pub size: Option<Vec2>,
    pub rotation: Option<f64>,
}

/// A photo placed in the scene (`<PhotoOverlay>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoOverlay {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub overlay: OverlayPart,
    pub rotation: Option<f64>,
    pub view_volume: Option<ViewVolume>,
    pub image_pyramid: Option<ImagePyramid>,
    pub point: Option<Point>,
    pub shape: Option<Shape>,
}

/// Visible frustum of a photo (`<ViewVolume>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewVolume {
    pub object: ObjectBase,
    pub left_fov: Option<f64>,
    pub right_fov: Option<f64>,
    pub bottom_fov: Option<f64>,
    pub top_fov: Option<f64>,
    pub near: Option<f64>,
}

/// Tiling description for very large photos (`<ImagePyramid>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImagePyramid {
    pub object: ObjectBase,
    pub tile_size: Option<i32>,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
    pub grid_origin: Option<GridOrigin>,
}

impl OverlayPart {
    pub const FIELDS: &'static [&'static str] = &["color", "drawOrder", "Icon"];

    pub fn from_element(el: &RawXmlElement) -> Self {
        Self {
            color: get(el, "color"),
            draw_order: get_i32(el, "drawOrder"),
            icon: el.child("Icon").and_then(Icon::from_element),
        }
    }

    pub fn write_children(&self, el: &mut RawXmlElement) {
        push_str(el, "color", &self.color);
        push_i32(el, "drawOrder", self.draw_order);
        if let Some(icon) = &self.icon {
            el.push_child(icon.to_element());
        }
    }
}

impl GroundOverlay {
    const FIELDS: &'static [&'static str] =
        &["altitude", "altitudeMode", "LatLonBox", "gx:LatLonQuad"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(
                el,
                &[FeaturePart::FIELDS, OverlayPart::FIELDS, Self::FIELDS],
            ),
            feature: FeaturePart::from_element(el),
            overlay: OverlayPart::from_element(el),
            altitude: get_f64(el, "altitude"),
            altitude_mode: get_mode(el, "altitudeMode"),
            lat_lon_box: el.child("LatLonBox").and_then(LatLonBox::from_element),
            gx_lat_lon_quad: el.child("gx:LatLonQuad").and_then(LatLonQuad::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("GroundOverlay");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        self.overlay.write_children(&mut el);
        push_f64(&mut el, "altitude", self.altitude);
        push_mode(&mut el, "altitudeMode", self.altitude_mode);
        if let Some(b) = &self.lat_lon_box {
            el.push_child(b.to_element());
        }
        if let Some(q) = &self.gx_lat_lon_quad {
            el.push_child(q.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl LatLonBox {
    const FIELDS: &'static [&'static str] = &["north", "south", "east", "west", "rotation"];

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
            rotation: get_f64(el, "rotation"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LatLonBox");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "north", self.north);
        push_f64(&mut el, "south", self.south);
        push_f64(&mut el, "east", self.east);
        push_f64(&mut el, "west", self.west);
        push_f64(&mut el, "rotation", self.rotation);
        self.object.write_other(&mut el);
        el
    }
}

impl LatLonQuad {
    const FIELDS: &'static [&'static str] = &["coordinates"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            coordinates: coordinates_from(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:LatLonQuad");
        self.object.write_attrs(&mut el);
        push_coordinates(&mut el, &self.coordinates);
        self.object.write_other(&mut el);
        el
    }
}

impl ScreenOverlay {
    const FIELDS: &'static [&'static str] =
        &["overlayXY", "screenXY", "rotationXY", "size", "rotation"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(
                el,
                &[FeaturePart::FIELDS, OverlayPart::FIELDS, Self::FIELDS],
            ),
            feature: FeaturePart::from_element(el),
            overlay: OverlayPart::from_element(el),
            overlay_xy: el.child("overlayXY").and_then(Vec2::from_element),
            screen_xy: el.child("screenXY").and_then(Vec2::from_element),
            rotation_xy: el.child("rotationXY").and_then(Vec2::from_element),
            size: el.child("size").and_then(Vec2::from_element),
            rotation: get_f64(el, "rotation"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ScreenOverlay");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        self.overlay.write_children(&mut el);
        if let Some(v) = &self.overlay_xy {
            el.push_child(v.to_element_as("overlayXY"));
        }
        if let Some(v) = &self.screen_xy {
            el.push_child(v.to_element_as("screenXY"));
        }
        if let Some(v) = &self.rotation_xy {
            el.push_child(v.to_element_as("rotationXY"));
        }
        if let Some(v) = &self.size {
            el.push_child(v.to_element_as("size"));
        }
        push_f64(&mut el, "rotation", self.rotation);
        self.object.write_other(&mut el);
        el
    }
}

impl PhotoOverlay {
    const FIELDS: &'static [&'static str] =
        &["rotation", "ViewVolume", "ImagePyramid", "Point", "shape"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(
                el,
                &[FeaturePart::FIELDS, OverlayPart::FIELDS, Self::FIELDS],
            ),
            feature: FeaturePart::from_element(el),
            overlay: OverlayPart::from_element(el),
            rotation: get_f64(el, "rotation"),
            view_volume: el.child("ViewVolume").and_then(ViewVolume::from_element),
            image_pyramid: el.child("ImagePyramid").and_then(ImagePyramid::from_element),
            point: el.child("Point").and_then(Point::from_element),
            shape: get_mode(el, "shape"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("PhotoOverlay");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        self.overlay.write_children(&mut el);
        push_f64(&mut el, "rotation", self.rotation);
        if let Some(v) = &self.view_volume {
            el.push_child(v.to_element());
        }
        if let Some(p) = &self.image_pyramid {
            el.push_child(p.to_element());
        }
        if let Some(p) = &self.point {
            el.push_child(p.to_element());
        }
        push_mode(&mut el, "shape", self.shape);
        self.object.write_other(&mut el);
        el
    }
}

impl ViewVolume {
    const FIELDS: &'static [&'static str] =
        &["leftFov", "rightFov", "bottomFov", "topFov", "near"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            left_fov: get_f64(el, "leftFov"),
            right_fov: get_f64(el, "rightFov"),
            bottom_fov: get_f64(el, "bottomFov"),
            top_fov: get_f64(el, "topFov"),
            near: get_f64(el, "near"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ViewVolume");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "leftFov", self.left_fov);
        push_f64(&mut el, "rightFov", self.right_fov);
        push_f64(&mut el, "bottomFov", self.bottom_fov);
        push_f64(&mut el, "topFov", self.top_fov);
        push_f64(&mut el, "near", self.near);
        self.object.write_other(&mut el);
        el
    }
}

impl ImagePyramid {
    const FIELDS: &'static [&'static str] =
        &["tileSize", "maxWidth", "maxHeight", "gridOrigin"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            tile_size: get_i32(el, "tileSize"),
            max_width: get_i32(el, "maxWidth"),
            max_height: get_i32(el, "maxHeight"),
            grid_origin: get_mode(el, "gridOrigin"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ImagePyramid");
        self.object.write_attrs(&mut el);
        push_i32(&mut el, "tileSize", self.tile_size);
        push_i32(&mut el, "maxWidth", self.max_width);
        push_i32(&mut el, "maxHeight", self.max_height);
        push_mode(&mut el, "gridOrigin", self.grid_origin);
        self.object.write_other(&mut el);
        el
    }
}
