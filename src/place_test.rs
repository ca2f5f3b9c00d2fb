#![allow(clippy::float_cmp)]

use super::*;

const BODY: &str = r##"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [118.35, -22.68]},
            "properties": {
                "id": 12,
                "names": [
                    {"name": "Karijini", "lang": {"id": 3, "name": "Banyjima", "colour": "#e41a1c"}},
                    {"name": "Hamersley Range", "lang": {"id": 1, "name": "English", "colour": "#377eb8"}}
                ],
                "icon": "mountain",
                "category": "range",
                "desc": "ignored"
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [117.0, -20.5]},
            "properties": {"id": 13, "names": []}
        }
    ],
    "metadata": {
        "icons": {"mountain": "/static/icons/mountain.png"},
        "langs": [{"id": 3, "name": "Banyjima", "colour": "#e41a1c"}]
    }
}"##;

fn response() -> ViewportResponse {
    ViewportResponse::from_json(BODY).unwrap()
}

#[test]
fn parses_features_and_metadata() {
    let r = response();
    assert_eq!(r.features.len(), 2);
    assert_eq!(r.metadata.icons["mountain"], "/static/icons/mountain.png");
    assert_eq!(r.metadata.langs[0].name, "Banyjima");
}

#[test]
fn coordinates_are_lng_lat() {
    let ll = response().features[0].lat_lng();
    assert_eq!(ll.lat, -22.68);
    assert_eq!(ll.lng, 118.35);
}

#[test]
fn label_is_first_name() {
    let r = response();
    assert_eq!(r.features[0].label(), "Karijini");
    assert_eq!(r.features[1].label(), "");
}

#[test]
fn marker_colour_follows_first_name_language() {
    let r = response();
    assert_eq!(r.features[0].marker_colour(), "#e41a1c");
    assert_eq!(r.features[1].marker_colour(), UNNAMED_COLOUR);
}

#[test]
fn missing_optional_properties_use_defaults() {
    let p = &response().features[1].properties;
    assert_eq!(p.icon, None);
    assert_eq!(p.category, DEFAULT_CATEGORY);
}

#[test]
fn empty_object_is_empty_response() {
    let r = ViewportResponse::from_json("{}").unwrap();
    assert!(r.features.is_empty());
    assert!(r.metadata.langs.is_empty());
}

#[test]
fn non_point_geometry_is_rejected() {
    let body = r#"{"features": [{"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}, "properties": {"id": 1}}]}"#;
    assert!(matches!(ViewportResponse::from_json(body), Err(Error::Payload(_))));
}

#[test]
fn malformed_body_is_payload_error() {
    assert!(matches!(ViewportResponse::from_json("not json"), Err(Error::Payload(_))));
}
