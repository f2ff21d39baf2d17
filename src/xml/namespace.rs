//! XML namespaces used in KML documents

/// KML 2.2 main namespace (the default namespace of a document root)
pub const KML: &str = "http://www.opengis.net/kml/2.2";
/// Atom syndication namespace (author/link attribution on features)
pub const ATOM: &str = "http://www.w3.org/2005/Atom";
/// OASIS xAL namespace (structured postal addresses)
pub const XAL: &str = "urn:oasis:names:tc:ciq:xsdschema:xAL:2.0";
/// Google KML extension namespace
pub const GX: &str = "http://www.google.com/kml/ext/2.2";

/// Namespace declarations for the `<kml>` document root.
///
/// Only the root declares namespaces; `gx:`/`atom:`/`xal:` children
/// throughout the tree rely on these.
pub fn kml_namespaces() -> Vec<(&'static str, &'static str)> {
    vec![
        ("xmlns", KML),
        ("xmlns:atom", ATOM),
        ("xmlns:xal", XAL),
        ("xmlns:gx", GX),
    ]
}
