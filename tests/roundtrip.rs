//! Integration test: encode/decode round-trip over a document using most
//! of the element families at once

use linch_kml_rs::model::{
    AbstractView, AltitudeMode, AnimatedUpdate, BalloonStyle, Camera, Change, Coordinate, Data,
    Document, ExtendedData, Feature, FeaturePart, FlyTo, FlyToMode, Folder, Geometry,
    GroundOverlay, Icon, IconStyle, Kml, KmlObject, LatLonAltBox, LatLonBox, LineString,
    LinearRing, Link, Lod, LookAt, MultiGeometry, NetworkLink, NetworkLinkControl, ObjectBase,
    OverlayPart, Pair, Placemark, Playlist, Point, Polygon, Region, Schema, SimpleField, Snippet,
    Style, StyleMap, StyleSelector, StyleState, TimePrimitive, TimeSpan, Tour, TourPrimitive,
    Update, UpdateOption, Wait,
};
use linch_kml_rs::model::Boundary;
use pretty_assertions::assert_eq;

fn full_document() -> Kml {
    let shared_style = StyleSelector::StyleMap(StyleMap {
        object: ObjectBase::with_id("pinMap"),
        pairs: vec![
            Pair {
                key: Some(StyleState::Normal),
                style_url: Some("#normal".into()),
                ..Default::default()
            },
            Pair {
                key: Some(StyleState::Highlight),
                selector: Some(Box::new(StyleSelector::Style(Style {
                    icon_style: Some(IconStyle {
                        scale: Some(1.4),
                        icon: Some(Icon::new("http://example.com/pin.png")),
                        ..Default::default()
                    }),
                    balloon_style: Some(BalloonStyle {
                        text: Some("$[name]".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }))),
                ..Default::default()
            },
        ],
    });

    let placemark = Placemark {
        object: ObjectBase::with_id("pm0"),
        feature: FeaturePart {
            name: Some("shapes".into()),
            snippet: Some(Snippet {
                value: Some("several geometries".into()),
                max_lines: Some(1),
            }),
            time: Some(TimePrimitive::TimeSpan(TimeSpan {
                begin: Some("2024-01-01".into()),
                ..Default::default()
            })),
            region: Some(Region {
                lat_lon_alt_box: Some(LatLonAltBox {
                    north: Some(1.0),
                    south: Some(0.0),
                    east: Some(1.0),
                    west: Some(0.0),
                    ..Default::default()
                }),
                lod: Some(Lod {
                    min_lod_pixels: Some(64.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            extended_data: Some(ExtendedData {
                data: vec![Data::new("surface", "gravel")],
                ..Default::default()
            }),
            ..Default::default()
        },
        geometry: Some(Geometry::MultiGeometry(MultiGeometry {
            geometries: vec![
                Geometry::Point(Point {
                    extrude: Some(true),
                    altitude_mode: Some(AltitudeMode::RelativeToGround),
                    coordinates: Some(Coordinate::with_altitude(1.0, 2.0, 50.0)),
                    ..Default::default()
                }),
                Geometry::LineString(LineString::new(Coordinate::parse_seq("0,0 1,1 2,0"))),
                Geometry::Polygon(Polygon {
                    outer_boundary: Some(Boundary::new(LinearRing::new(Coordinate::parse_seq(
                        "0,0 3,0 3,3 0,3 0,0",
                    )))),
                    ..Default::default()
                }),
            ],
            ..Default::default()
        })),
    };

    let overlay = GroundOverlay {
        feature: FeaturePart {
            name: Some("ortho".into()),
            ..Default::default()
        },
        overlay: OverlayPart {
            color: Some("7fffffff".into()),
            draw_order: Some(2),
            icon: Some(Icon::new("images/ortho.png")),
        },
        lat_lon_box: Some(LatLonBox {
            north: Some(37.9),
            south: Some(37.8),
            east: Some(-122.3),
            west: Some(-122.5),
            ..Default::default()
        }),
        ..Default::default()
    };

    let network_link = NetworkLink {
        feature: FeaturePart {
            name: Some("live feed".into()),
            ..Default::default()
        },
        fly_to_view: Some(true),
        link: Some(Link::new("http://example.com/live.kml")),
        ..Default::default()
    };

    let tour = Tour {
        feature: FeaturePart {
            name: Some("flyover".into()),
            ..Default::default()
        },
        playlist: Some(Playlist {
            primitives: vec![
                TourPrimitive::FlyTo(FlyTo {
                    duration: Some(4.0),
                    fly_to_mode: Some(FlyToMode::Bounce),
                    view: Some(AbstractView::Camera(Camera {
                        longitude: Some(170.0),
                        latitude: Some(-43.0),
                        altitude: Some(9000.0),
                        ..Default::default()
                    })),
                    ..Default::default()
                }),
                TourPrimitive::Wait(Wait {
                    duration: Some(1.0),
                    ..Default::default()
                }),
                TourPrimitive::AnimatedUpdate(AnimatedUpdate {
                    duration: Some(2.0),
                    update: Some(Update {
                        target_href: Some("doc.kml".into()),
                        options: vec![UpdateOption::Change(Change {
                            objects: vec![KmlObject::Point(Point {
                                object: ObjectBase {
                                    target_id: Some("pm0-point".into()),
                                    ..Default::default()
                                },
                                coordinates: Some(Coordinate::new(5.0, 5.0)),
                                ..Default::default()
                            })],
                        })],
                    }),
                    ..Default::default()
                }),
            ],
            ..Default::default()
        }),
        ..Default::default()
    };

    let document = Document {
        object: ObjectBase::with_id("root"),
        feature: FeaturePart {
            name: Some("everything".into()),
            open: Some(true),
            style_selectors: vec![shared_style],
            view: Some(AbstractView::LookAt(LookAt {
                longitude: Some(1.5),
                latitude: Some(1.5),
                range: Some(5000.0),
                ..Default::default()
            })),
            ..Default::default()
        },
        schemas: vec![Schema {
            id: Some("TrailId".into()),
            name: Some("Trail".into()),
            fields: vec![SimpleField {
                field_type: Some("string".into()),
                name: Some("surface".into()),
                ..Default::default()
            }],
        }],
        features: vec![
            Feature::Placemark(placemark),
            Feature::GroundOverlay(overlay),
            Feature::NetworkLink(network_link),
            Feature::Tour(tour),
            Feature::Folder(Folder {
                feature: FeaturePart {
                    name: Some("empty drawer".into()),
                    ..Default::default()
                },
                ..Default::default()
            }),
        ],
    };

    Kml {
        network_link_control: Some(NetworkLinkControl {
            min_refresh_period: Some(60.0),
            link_name: Some("everything feed".into()),
            ..Default::default()
        }),
        feature: Some(Feature::Document(document)),
        ..Default::default()
    }
}

#[test]
fn test_full_document_roundtrip() {
    let kml = full_document();
    let xml = kml.to_document_string().unwrap();
    let decoded = Kml::parse(&xml).unwrap().unwrap();
    assert_eq!(decoded, kml);
}

#[test]
fn test_second_generation_is_stable() {
    let kml = full_document();
    let first = kml.to_document_string().unwrap();
    let second = Kml::parse(&first)
        .unwrap()
        .unwrap()
        .to_document_string()
        .unwrap();
    assert_eq!(second, first);
}

#[test]
fn test_absence_omission() {
    // a placemark with only an id encodes to a single empty element with
    // one attribute, never to empty child tags
    let placemark = Placemark {
        object: ObjectBase::with_id("bare"),
        ..Default::default()
    };
    let el = placemark.to_element();
    assert_eq!(el.attributes, vec![("id".to_string(), "bare".to_string())]);
    assert!(el.children.is_empty());
}
