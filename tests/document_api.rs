//! Integration test: KmlDocument API

use linch_kml_rs::model::{
    Coordinate, Feature, FeaturePart, Folder, Geometry, Kml, LineString, Placemark, Point,
};
use linch_kml_rs::{Error, KmlDocument, Kmz};
use pretty_assertions::assert_eq;
use std::path::Path;

fn sample_kml() -> Kml {
    let track = Placemark::new(
        "Morning run",
        Geometry::LineString(LineString::new(Coordinate::parse_seq(
            "174.76,-36.85,20 174.77,-36.86,25 174.78,-36.85,30",
        ))),
    );
    let start = Placemark::new(
        "Start",
        Geometry::Point(Point::new(Coordinate::new(174.76, -36.85))),
    );
    let folder = Folder {
        feature: FeaturePart {
            name: Some("Runs".into()),
            open: Some(true),
            ..Default::default()
        },
        ..Default::default()
    }
    .with_feature(Feature::Placemark(start))
    .with_feature(Feature::Placemark(track));

    Kml::new(Feature::Folder(folder))
}

#[test]
fn test_build_and_reparse() {
    let doc = KmlDocument::new(sample_kml());
    let xml = doc.to_kml_string().unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("xmlns=\"http://www.opengis.net/kml/2.2\""));

    let again = KmlDocument::from_kml_str(&xml).unwrap();
    assert_eq!(again.kml(), doc.kml());

    let folder = match &again.kml().feature {
        Some(Feature::Folder(f)) => f,
        other => panic!("expected Folder, got {:?}", other),
    };
    assert_eq!(folder.features.len(), 2);
    assert_eq!(folder.features[0].name(), Some("Start"));
    assert_eq!(folder.features[1].name(), Some("Morning run"));
}

#[test]
fn test_kmz_bytes_roundtrip() {
    let mut doc = KmlDocument::new(sample_kml());
    doc.add_resource("images/start.png", vec![0x89, 0x50, 0x4e, 0x47]);
    doc.add_resource("models/shoe.dae", b"<COLLADA/>".to_vec());

    let bytes = doc.to_kmz_bytes().unwrap();
    assert_eq!(&bytes[0..2], b"PK", "kmz output is a ZIP archive");

    let again = KmlDocument::from_kmz_bytes(&bytes).unwrap();
    assert_eq!(again.kml(), doc.kml());
    assert_eq!(again.resources().count(), 2);
    assert_eq!(
        again
            .resources()
            .find(|(n, _)| *n == "models/shoe.dae")
            .map(|(_, d)| d),
        Some(b"<COLLADA/>".as_slice())
    );
}

#[test]
fn test_save_and_reopen_kml() {
    let path = Path::new("target/test_output.kml");
    let doc = KmlDocument::new(sample_kml());
    doc.save(path).expect("save kml");

    let again = KmlDocument::open(path).expect("reopen kml");
    assert_eq!(again.kml(), doc.kml());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_save_and_reopen_kmz() {
    let path = Path::new("target/test_output.kmz");
    let mut doc = KmlDocument::new(sample_kml());
    doc.add_resource("images/pin.png", vec![1, 2, 3]);
    doc.save(path).expect("save kmz");

    // format is sniffed from the bytes, not the extension
    let again = KmlDocument::open(path).expect("reopen kmz");
    assert_eq!(again.kml(), doc.kml());
    assert_eq!(again.resources().count(), 1);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_multi_entry_kmz_documents_decode_independently() {
    let mut kmz = Kmz::new();
    kmz.add_entry(
        "doc.kml",
        br#"<kml xmlns="http://www.opengis.net/kml/2.2"><Placemark><name>main</name></Placemark></kml>"#
            .to_vec(),
    );
    kmz.add_entry(
        "layers/extra.kml",
        br#"<kml xmlns="http://www.opengis.net/kml/2.2"><Folder><name>extra</name></Folder></kml>"#
            .to_vec(),
    );
    kmz.add_entry("texture.jpg", vec![0xff, 0xd8]);

    let reread = Kmz::from_bytes(&kmz.to_bytes().unwrap()).unwrap();
    let docs: Vec<Kml> = reread
        .kml_entries()
        .iter()
        .filter_map(|(_, text)| Kml::parse(text).unwrap())
        .collect();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].feature.as_ref().and_then(|f| f.name()), Some("main"));
    assert_eq!(docs[1].feature.as_ref().and_then(|f| f.name()), Some("extra"));
}

#[test]
fn test_error_cases() {
    assert!(matches!(
        KmlDocument::from_kml_str("<svg></svg>"),
        Err(Error::InvalidDocument(_))
    ));

    let empty = Kmz::new().to_bytes().unwrap();
    assert!(matches!(
        KmlDocument::from_kmz_bytes(&empty),
        Err(Error::MissingEntry(_))
    ));
}
