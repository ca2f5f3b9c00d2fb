//! Viewport payload: the places, languages and icons returned for one map view.
//!
//! The data endpoint answers with a GeoJSON `FeatureCollection` of point
//! features plus a `metadata` object describing the languages and icons the
//! features refer to. Only the fields the map view uses are modelled; unknown
//! fields are ignored.

#[cfg(test)]
#[path = "place_test.rs"]
mod place_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geo::LatLng;

/// Place identifier assigned by the server.
pub type PlaceId = u64;

/// Language identifier assigned by the server.
pub type LangId = u64;

/// Marker colour for places without any name.
pub const UNNAMED_COLOUR: &str = "#ccc";

/// Category assigned to places the server did not classify.
pub const DEFAULT_CATEGORY: &str = "unknown";

/// A language a place name is recorded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LangId,
    pub name: String,
    /// CSS colour used for markers and filter rows.
    pub colour: String,
}

/// One recorded name of a place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    pub name: String,
    pub lang: Language,
}

/// Properties of a place feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceProperties {
    pub id: PlaceId,
    /// Names in server order; the first is the display name.
    #[serde(default)]
    pub names: Vec<PlaceName>,
    /// Key into [`ViewportMetadata::icons`].
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

/// GeoJSON point geometry. Coordinates are `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PointGeometry {
    Point { coordinates: [f64; 2] },
}

/// A place as a GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceFeature {
    pub geometry: PointGeometry,
    pub properties: PlaceProperties,
}

impl PlaceFeature {
    #[must_use]
    pub fn id(&self) -> PlaceId {
        self.properties.id
    }

    #[must_use]
    pub fn lat_lng(&self) -> LatLng {
        let PointGeometry::Point { coordinates: [lng, lat] } = self.geometry;
        LatLng::new(lat, lng)
    }

    /// Display name: the first recorded name, or empty when the place has none.
    #[must_use]
    pub fn label(&self) -> &str {
        self.properties.names.first().map_or("", |n| n.name.as_str())
    }

    /// Language of the display name.
    #[must_use]
    pub fn primary_lang(&self) -> Option<&Language> {
        self.properties.names.first().map(|n| &n.lang)
    }

    /// Marker colour: the display name's language colour, grey for unnamed places.
    #[must_use]
    pub fn marker_colour(&self) -> &str {
        self.primary_lang().map_or(UNNAMED_COLOUR, |l| l.colour.as_str())
    }
}

/// Languages and icons referenced by the features of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportMetadata {
    /// Icon name to image URL.
    pub icons: BTreeMap<String, String>,
    pub langs: Vec<Language>,
}

/// Response of the viewport data endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportResponse {
    #[serde(default)]
    pub features: Vec<PlaceFeature>,
    #[serde(default)]
    pub metadata: ViewportMetadata,
}

impl ViewportResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the body is not a valid payload.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::Payload)
    }
}
