//! Integration test: decoding real-world-shaped KML text

use linch_kml_rs::model::{
    AbstractView, Coordinate, Feature, Geometry, Kml, StyleSelector, StyleState,
};
use pretty_assertions::assert_eq;

const MINIMAL_PLACEMARK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>A</name>
    <Point>
      <coordinates>1,2,3</coordinates>
    </Point>
  </Placemark>
</kml>"#;

#[test]
fn test_minimal_placemark() {
    let kml = Kml::parse(MINIMAL_PLACEMARK).unwrap().unwrap();

    let placemark = match &kml.feature {
        Some(Feature::Placemark(p)) => p,
        other => panic!("expected Placemark, got {:?}", other),
    };
    assert_eq!(placemark.feature.name.as_deref(), Some("A"));

    let point = match &placemark.geometry {
        Some(Geometry::Point(p)) => p,
        other => panic!("expected Point, got {:?}", other),
    };
    assert_eq!(point.coordinates, Some(Coordinate::with_altitude(1.0, 2.0, 3.0)));

    // re-encoding produces an equivalent tree
    let xml = kml.to_document_string().unwrap();
    let again = Kml::parse(&xml).unwrap().unwrap();
    assert_eq!(again, kml);
}

#[test]
fn test_polygon_with_hole() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <Polygon>
      <outerBoundaryIs>
        <LinearRing>
          <coordinates>0,0 4,0 4,4 0,4 0,0</coordinates>
        </LinearRing>
      </outerBoundaryIs>
      <innerBoundaryIs>
        <LinearRing>
          <coordinates>1,1 3,1 3,3 1,3 1,1</coordinates>
        </LinearRing>
      </innerBoundaryIs>
    </Polygon>
  </Placemark>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let polygon = match &kml.feature {
        Some(Feature::Placemark(p)) => match &p.geometry {
            Some(Geometry::Polygon(poly)) => poly.clone(),
            other => panic!("expected Polygon, got {:?}", other),
        },
        other => panic!("expected Placemark, got {:?}", other),
    };

    let outer = polygon.outer_boundary.expect("outer boundary present");
    let ring = outer.linear_ring.expect("outer ring present");
    assert_eq!(ring.coordinates.len(), 5);
    // sequence-path altitude defaults to zero
    assert_eq!(ring.coordinates[0], Coordinate::with_altitude(0.0, 0.0, 0.0));

    assert_eq!(polygon.inner_boundaries.len(), 1);
    assert_eq!(
        polygon.inner_boundaries[0]
            .linear_ring
            .as_ref()
            .map(|r| r.coordinates.len()),
        Some(5)
    );
}

#[test]
fn test_stylemap_roundtrip() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <StyleMap id="pinMap">
      <Pair>
        <key>normal</key>
        <styleUrl>#normalPin</styleUrl>
      </Pair>
      <Pair>
        <key>highlight</key>
        <Style>
          <IconStyle>
            <scale>1.5</scale>
          </IconStyle>
        </Style>
      </Pair>
    </StyleMap>
  </Document>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let doc = match &kml.feature {
        Some(Feature::Document(d)) => d,
        other => panic!("expected Document, got {:?}", other),
    };

    let map = match &doc.feature.style_selectors[0] {
        StyleSelector::StyleMap(m) => m,
        other => panic!("expected StyleMap, got {:?}", other),
    };
    assert_eq!(map.object.id.as_deref(), Some("pinMap"));
    assert_eq!(map.pairs.len(), 2);

    assert_eq!(map.pairs[0].key, Some(StyleState::Normal));
    assert_eq!(map.pairs[0].style_url.as_deref(), Some("#normalPin"));
    assert!(map.pairs[0].selector.is_none());

    assert_eq!(map.pairs[1].key, Some(StyleState::Highlight));
    assert!(map.pairs[1].style_url.is_none());
    match map.pairs[1].selector.as_deref() {
        Some(StyleSelector::Style(style)) => {
            assert_eq!(style.icon_style.as_ref().unwrap().scale, Some(1.5));
        }
        other => panic!("expected inline Style, got {:?}", other),
    }

    // both the key values and the url-vs-inline choice survive re-encoding
    let again = Kml::parse(&kml.to_document_string().unwrap()).unwrap().unwrap();
    assert_eq!(again, kml);
}

#[test]
fn test_unknown_enum_literal_is_absent() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Style>
      <IconStyle>
        <colorMode>sparkle</colorMode>
        <scale>2</scale>
      </IconStyle>
    </Style>
  </Document>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let doc = match &kml.feature {
        Some(Feature::Document(d)) => d,
        other => panic!("expected Document, got {:?}", other),
    };
    let style = match &doc.feature.style_selectors[0] {
        StyleSelector::Style(s) => s,
        other => panic!("expected Style, got {:?}", other),
    };
    let icon_style = style.icon_style.as_ref().unwrap();
    assert_eq!(icon_style.color_mode, None);
    assert_eq!(icon_style.scale, Some(2.0));
}

#[test]
fn test_camera_wins_when_both_views_present() {
    // illegal per the schema but possible input; the earliest declared
    // alternative wins
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <LookAt><range>100</range></LookAt>
    <Camera><heading>90</heading></Camera>
  </Placemark>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let placemark = match &kml.feature {
        Some(Feature::Placemark(p)) => p,
        other => panic!("expected Placemark, got {:?}", other),
    };
    match &placemark.feature.view {
        Some(AbstractView::Camera(c)) => assert_eq!(c.heading, Some(90.0)),
        other => panic!("expected Camera to win, got {:?}", other),
    }
}

#[test]
fn test_boolean_literal_forms() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Folder>
    <visibility>TRUE</visibility>
    <open>0</open>
  </Folder>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let folder = match &kml.feature {
        Some(Feature::Folder(f)) => f,
        other => panic!("expected Folder, got {:?}", other),
    };
    assert_eq!(folder.feature.visibility, Some(true));
    assert_eq!(folder.feature.open, Some(false));

    // re-encode renders digits
    let el = folder.to_element();
    assert_eq!(el.child("visibility").unwrap().text(), "1");
    assert_eq!(el.child("open").unwrap().text(), "0");
}

#[test]
fn test_malformed_leaves_never_fail_the_document() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>survivor</name>
    <visibility>maybe</visibility>
    <LookAt>
      <range>not-a-number</range>
      <tilt>12.5</tilt>
    </LookAt>
    <Point>
      <coordinates>broken,tuple</coordinates>
    </Point>
  </Placemark>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let placemark = match &kml.feature {
        Some(Feature::Placemark(p)) => p,
        other => panic!("expected Placemark, got {:?}", other),
    };
    assert_eq!(placemark.feature.name.as_deref(), Some("survivor"));
    assert_eq!(placemark.feature.visibility, None);
    match &placemark.feature.view {
        Some(AbstractView::LookAt(look)) => {
            assert_eq!(look.range, None);
            assert_eq!(look.tilt, Some(12.5));
        }
        other => panic!("expected LookAt, got {:?}", other),
    }
    match &placemark.geometry {
        Some(Geometry::Point(point)) => assert_eq!(point.coordinates, None),
        other => panic!("expected Point, got {:?}", other),
    }
}

#[test]
fn test_cdata_description() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <description><![CDATA[<b>bold</b> text]]></description>
  </Placemark>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let placemark = match &kml.feature {
        Some(Feature::Placemark(p)) => p,
        other => panic!("expected Placemark, got {:?}", other),
    };
    assert_eq!(
        placemark.feature.description.as_deref(),
        Some("<b>bold</b> text")
    );
}

#[test]
fn test_unknown_extension_children_roundtrip() {
    let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>pin</name>
    <mx:flavor>sweet</mx:flavor>
  </Placemark>
</kml>"#;

    let kml = Kml::parse(xml).unwrap().unwrap();
    let out = kml.to_document_string().unwrap();
    assert!(out.contains("<mx:flavor>sweet</mx:flavor>"));

    let again = Kml::parse(&out).unwrap().unwrap();
    assert_eq!(again, kml);
}
