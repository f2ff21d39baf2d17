//! # linch-kml-rs
//!
//! A reliable KML/KMZ reading and writing library for Rust.
//!
//! ## Features
//!
//! - Read and write KML 2.2 documents, including the Google `gx`
//!   extension elements
//! - Read and write KMZ archives (attached images/models are copied
//!   through untouched)
//! - Lenient decoding: malformed values become absent instead of failing
//!   the whole document
//! - Round-trip preservation (unknown extension elements are kept intact)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linch_kml_rs::KmlDocument;
//! use linch_kml_rs::model::{Feature, Geometry};
//!
//! // Open a document (KML or KMZ, sniffed automatically)
//! let doc = KmlDocument::open("example.kmz")?;
//!
//! if let Some(Feature::Placemark(p)) = &doc.kml().feature {
//!     println!("{:?}", p.feature.name);
//! }
//!
//! // Build a document and save it
//! use linch_kml_rs::model::{Coordinate, Kml, Placemark, Point};
//! let pin = Placemark::new("Home", Geometry::Point(Point::new(Coordinate::new(174.76, -36.85))));
//! let doc = KmlDocument::new(Kml::new(Feature::Placemark(pin)));
//! doc.save("home.kml")?;
//! ```

pub mod document;
pub mod error;
pub mod kmz;
pub mod model;
pub mod xml;

pub use document::KmlDocument;
pub use error::{Error, Result};
pub use kmz::Kmz;
pub use model::{Feature, Geometry, Kml, Placemark};
