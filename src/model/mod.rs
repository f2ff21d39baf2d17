//! The typed KML element model
//!
//! Every type decodes from a raw XML element with `from_element` (absent
//! on empty input, lenient about malformed leaves) and encodes back with
//! `to_element` (absent fields are omitted entirely). Substitution-group
//! families are closed enums resolved in a fixed declared tag order.

pub mod coordinates;

mod enums;
mod extended;
mod feature;
mod geometry;
mod kml;
mod link;
mod network;
mod object;
mod overlay;
mod region;
mod style;
mod time;
mod tour;
mod view;

pub use coordinates::Coordinate;
pub use enums::{
    AltitudeMode, ColorMode, DisplayMode, FlyToMode, GridOrigin, ItemIconState, ListItemType,
    PlayMode, RefreshMode, Shape, StyleState, Units, ViewRefreshMode,
};
pub use extended::{Data, ExtendedData, Schema, SchemaData, SimpleData, SimpleField};
pub use feature::{Container, Document, Feature, FeaturePart, Folder, Placemark};
pub use geometry::{
    Alias, Boundary, Geometry, LineString, LinearRing, Location, Model, MultiGeometry,
    Orientation, Point, Polygon, ResourceMap, Scale,
};
pub use kml::Kml;
pub use link::{AtomAuthor, AtomLink, Icon, Link, Snippet};
pub use network::{
    Change, Create, Delete, KmlObject, NetworkLink, NetworkLinkControl, Update, UpdateOption,
};
pub use object::ObjectBase;
pub use overlay::{
    GroundOverlay, ImagePyramid, LatLonBox, LatLonQuad, OverlayPart, PhotoOverlay, ScreenOverlay,
    ViewVolume,
};
pub use region::{LatLonAltBox, Lod, Region};
pub use style::{
    BalloonStyle, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair, PolyStyle, Style,
    StyleMap, StyleSelector, Vec2,
};
pub use time::{TimePrimitive, TimeSpan, TimeStamp};
pub use tour::{AnimatedUpdate, FlyTo, Playlist, SoundCue, Tour, TourControl, TourPrimitive, Wait};
pub use view::{AbstractView, Camera, LookAt};
