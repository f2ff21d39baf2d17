//! KMZ archive handling
//!
//! A KMZ file is a plain ZIP archive holding one or more `.kml` documents
//! plus opaque resource files (images, COLLADA models). Entries are read
//! and written by name; nothing but the `.kml` entries is interpreted.

mod archive;

pub use archive::Kmz;
