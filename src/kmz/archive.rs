//! KMZ archive implementation

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::read::ZipArchive;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// A KMZ container: named byte entries in archive order
#[derive(Clone, Debug, Default)]
pub struct Kmz {
    entries: Vec<(String, Vec<u8>)>,
}

impl Kmz {
    /// Create a new empty archive
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Open an archive from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Open an archive from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        Self::from_reader(cursor)
    }

    /// Open an archive from a reader
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut kmz = Self::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            if name.ends_with('/') {
                log::debug!("skipping directory entry {name}");
                continue;
            }

            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            kmz.entries.push((name, data));
        }

        Ok(kmz)
    }

    /// Save the archive to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Save the archive to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let cursor = Cursor::new(&mut buf);
        self.write_to(cursor)?;
        Ok(buf)
    }

    /// Write the archive to a writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, data) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(data)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Add or replace an entry by name
    pub fn add_entry(&mut self, name: impl Into<String>, data: Vec<u8>) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = data;
        } else {
            self.entries.push((name, data));
        }
    }

    /// Get an entry's bytes by name
    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_slice())
    }

    /// Remove an entry by name, returning its bytes
    pub fn remove_entry(&mut self, name: &str) -> Option<Vec<u8>> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// All entry names in archive order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// All entries in archive order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d.as_slice()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the archive holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `.kml` entries as UTF-8 text, each decodable independently.
    ///
    /// Entries that are not valid UTF-8 are skipped with a warning.
    pub fn kml_entries(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter(|(name, _)| name.ends_with(".kml"))
            .filter_map(|(name, data)| match std::str::from_utf8(data) {
                Ok(text) => Some((name.as_str(), text)),
                Err(e) => {
                    log::warn!("kml entry {name} is not valid UTF-8: {e}");
                    None
                }
            })
            .collect()
    }

    /// The main document text: `doc.kml` if present, else the first
    /// `.kml` entry in archive order
    pub fn main_document(&self) -> Option<&str> {
        let entries = self.kml_entries();
        entries
            .iter()
            .find(|(name, _)| *name == "doc.kml")
            .or_else(|| entries.first())
            .map(|(_, text)| *text)
    }
}
