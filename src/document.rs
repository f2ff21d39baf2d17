//! High-level document API: open and save KML or KMZ files

use crate::error::{Error, Result};
use crate::kmz::Kmz;
use crate::model::Kml;
use std::fs;
use std::path::Path;

/// ZIP local-file magic, used to tell KMZ from plain KML
const ZIP_MAGIC: &[u8; 2] = b"PK";

/// Name of the main document entry written into a KMZ archive
pub const MAIN_ENTRY: &str = "doc.kml";

/// A parsed KML document plus any attached archive resources
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KmlDocument {
    kml: Kml,
    resources: Vec<(String, Vec<u8>)>,
}

impl KmlDocument {
    /// Wrap an in-memory model
    pub fn new(kml: Kml) -> Self {
        Self {
            kml,
            resources: Vec::new(),
        }
    }

    /// Open a `.kml` or `.kmz` file; the format is sniffed from the
    /// leading bytes, not the extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        if bytes.starts_with(ZIP_MAGIC) {
            Self::from_kmz_bytes(&bytes)
        } else {
            let text = std::str::from_utf8(&bytes)?;
            Self::from_kml_str(text)
        }
    }

    /// Parse a plain KML string
    pub fn from_kml_str(xml: &str) -> Result<Self> {
        let kml = Kml::parse(xml)?
            .ok_or_else(|| Error::InvalidDocument("no <kml> root element".into()))?;
        Ok(Self::new(kml))
    }

    /// Read a KMZ archive: the main `.kml` entry becomes the model and
    /// every other entry is kept as an opaque resource
    pub fn from_kmz_bytes(bytes: &[u8]) -> Result<Self> {
        let kmz = Kmz::from_bytes(bytes)?;

        let main_name = kmz
            .entry_names()
            .find(|n| *n == MAIN_ENTRY)
            .or_else(|| kmz.entry_names().find(|n| n.ends_with(".kml")))
            .map(|n| n.to_string())
            .ok_or_else(|| Error::MissingEntry("no .kml entry in archive".into()))?;

        let data = kmz.entry(&main_name).expect("entry name came from the archive");
        let text = std::str::from_utf8(data)?;
        let kml = Kml::parse(text)?
            .ok_or_else(|| Error::InvalidDocument(format!("{main_name} has no <kml> root")))?;

        let resources = kmz
            .entries()
            .filter(|(name, _)| *name != main_name)
            .map(|(name, data)| (name.to_string(), data.to_vec()))
            .collect();

        log::debug!("read kmz: main entry {main_name}");
        Ok(Self { kml, resources })
    }

    /// The parsed model
    pub fn kml(&self) -> &Kml {
        &self.kml
    }

    /// The parsed model, mutably
    pub fn kml_mut(&mut self) -> &mut Kml {
        &mut self.kml
    }

    /// Attach a named resource to be written alongside the document in a
    /// KMZ archive; the bytes are copied through untouched
    pub fn add_resource(&mut self, name: impl Into<String>, data: Vec<u8>) {
        self.resources.push((name.into(), data));
    }

    /// Attached resources in insertion order
    pub fn resources(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.resources.iter().map(|(n, d)| (n.as_str(), d.as_slice()))
    }

    /// Serialize the model as a KML document string
    pub fn to_kml_string(&self) -> Result<String> {
        self.kml.to_document_string()
    }

    /// Package the model and resources as KMZ bytes
    pub fn to_kmz_bytes(&self) -> Result<Vec<u8>> {
        let mut kmz = Kmz::new();
        kmz.add_entry(MAIN_ENTRY, self.to_kml_string()?.into_bytes());
        for (name, data) in &self.resources {
            kmz.add_entry(name.clone(), data.clone());
        }
        kmz.to_bytes()
    }

    /// Save as `.kmz` when the path has a kmz extension, plain KML
    /// otherwise
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_kmz = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("kmz"))
            .unwrap_or(false);
        if is_kmz {
            fs::write(path, self.to_kmz_bytes()?)?;
        } else {
            fs::write(path, self.to_kml_string()?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, Feature, Geometry, Placemark, Point};

    fn sample() -> KmlDocument {
        KmlDocument::new(Kml::new(Feature::Placemark(Placemark::new(
            "pin",
            Geometry::Point(Point::new(Coordinate::new(1.0, 2.0))),
        ))))
    }

    #[test]
    fn test_kml_string_roundtrip() {
        let doc = sample();
        let xml = doc.to_kml_string().unwrap();
        let again = KmlDocument::from_kml_str(&xml).unwrap();
        assert_eq!(again.kml(), doc.kml());
    }

    #[test]
    fn test_kmz_roundtrip_with_resources() {
        let mut doc = sample();
        doc.add_resource("images/photo.jpg", vec![0xff, 0xd8, 0xff]);

        let bytes = doc.to_kmz_bytes().unwrap();
        let again = KmlDocument::from_kmz_bytes(&bytes).unwrap();

        assert_eq!(again.kml(), doc.kml());
        let resources: Vec<_> = again.resources().collect();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].0, "images/photo.jpg");
        assert_eq!(resources[0].1, &[0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_missing_root_is_invalid() {
        assert!(matches!(
            KmlDocument::from_kml_str("<gpx></gpx>"),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_kmz_without_kml_entry() {
        let mut kmz = Kmz::new();
        kmz.add_entry("readme.txt", b"nothing here".to_vec());
        let bytes = kmz.to_bytes().unwrap();
        assert!(matches!(
            KmlDocument::from_kmz_bytes(&bytes),
            Err(Error::MissingEntry(_))
        ));
    }
}
