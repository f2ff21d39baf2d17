//! Coordinate tuples and their two textual encodings
//!
//! A `<coordinates>` element holds either a single comma tuple (Point) or
//! a whitespace-separated run of comma tuples (LineString, LinearRing,
//! gx:LatLonQuad). The two parse paths treat a missing altitude
//! differently and both behaviors are kept as-is: the single-tuple path
//! leaves it absent, the sequence path substitutes 0.0.

use std::fmt;

use crate::xml::{text_element, RawXmlElement};

/// A longitude/latitude/altitude triple
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Altitude in meters, absent when the tuple had no third field
    pub altitude: Option<f64>,
}

impl Coordinate {
    /// A 2D coordinate
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// A 3D coordinate
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    /// Parse a single `lon,lat[,alt]` tuple.
    ///
    /// Longitude and latitude must both parse as finite numbers or the
    /// whole tuple is dropped. A missing or non-numeric altitude stays
    /// absent.
    pub fn parse(s: &str) -> Option<Coordinate> {
        let mut parts = s.trim().split(',');
        let longitude = finite(parts.next()?)?;
        let latitude = finite(parts.next()?)?;
        let altitude = parts.next().and_then(finite);
        Some(Coordinate {
            longitude,
            latitude,
            altitude,
        })
    }

    /// Parse a whitespace-separated run of tuples.
    ///
    /// Tuples that fail to parse are dropped whole. A missing altitude
    /// becomes 0.0 on this path (unlike [`Coordinate::parse`]).
    pub fn parse_seq(text: &str) -> Vec<Coordinate> {
        text.split_whitespace()
            .filter_map(Coordinate::parse)
            .map(|mut c| {
                c.altitude.get_or_insert(0.0);
                c
            })
            .collect()
    }

    /// Render a sequence joined by single spaces
    pub fn render_seq(coords: &[Coordinate]) -> String {
        coords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.altitude {
            Some(alt) => write!(f, "{},{},{}", self.longitude, self.latitude, alt),
            None => write!(f, "{},{}", self.longitude, self.latitude),
        }
    }
}

fn finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode a `<coordinates>` child as a single tuple
pub fn coordinate_from(el: &RawXmlElement) -> Option<Coordinate> {
    el.child("coordinates")
        .and_then(|c| Coordinate::parse(&c.text()))
}

/// Decode a `<coordinates>` child as a tuple sequence
pub fn coordinates_from(el: &RawXmlElement) -> Vec<Coordinate> {
    el.child("coordinates")
        .map(|c| Coordinate::parse_seq(&c.text()))
        .unwrap_or_default()
}

/// Emit a `<coordinates>` child for a single tuple
pub fn push_coordinate(el: &mut RawXmlElement, coordinate: Option<Coordinate>) {
    if let Some(c) = coordinate {
        el.push_child(text_element("coordinates", c.to_string()));
    }
}

/// Emit a `<coordinates>` child for a tuple sequence; an empty sequence
/// emits nothing
pub fn push_coordinates(el: &mut RawXmlElement, coords: &[Coordinate]) {
    if !coords.is_empty() {
        el.push_child(text_element("coordinates", Coordinate::render_seq(coords)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_roundtrip() {
        let c = Coordinate::with_altitude(1.5, -2.25, 30.0);
        assert_eq!(Coordinate::parse(&c.to_string()), Some(c));

        let flat = Coordinate::new(-122.084, 37.422);
        assert_eq!(Coordinate::parse(&flat.to_string()), Some(flat));
    }

    #[test]
    fn test_parse_drops_bad_tuple() {
        assert_eq!(Coordinate::parse("not,numbers"), None);
        assert_eq!(Coordinate::parse("1"), None);
        assert_eq!(Coordinate::parse(""), None);
        assert_eq!(Coordinate::parse("inf,2"), None);
    }

    #[test]
    fn test_discrete_altitude_stays_absent() {
        let c = Coordinate::parse("10,20").unwrap();
        assert_eq!(c.altitude, None);

        // non-numeric third field is dropped, not an error
        let c = Coordinate::parse("10,20,high").unwrap();
        assert_eq!(c.altitude, None);
    }

    #[test]
    fn test_sequence_altitude_defaults_to_zero() {
        // known quirk: the sequence path substitutes 0.0, the single-tuple
        // path leaves altitude absent
        let coords = Coordinate::parse_seq("10,20 30,40,50");
        assert_eq!(
            coords,
            vec![
                Coordinate::with_altitude(10.0, 20.0, 0.0),
                Coordinate::with_altitude(30.0, 40.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_sequence_drops_partial_tuples() {
        let coords = Coordinate::parse_seq("1,2,3 bad,tuple 4,5");
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0], Coordinate::with_altitude(1.0, 2.0, 3.0));
        assert_eq!(coords[1], Coordinate::with_altitude(4.0, 5.0, 0.0));
    }

    #[test]
    fn test_render_seq() {
        let coords = vec![
            Coordinate::with_altitude(1.0, 2.0, 3.0),
            Coordinate::new(4.0, 5.0),
        ];
        assert_eq!(Coordinate::render_seq(&coords), "1,2,3 4,5");
    }

    #[test]
    fn test_sequence_with_newlines() {
        let coords = Coordinate::parse_seq("1,2\n  3,4\t5,6");
        assert_eq!(coords.len(), 3);
    }
}
