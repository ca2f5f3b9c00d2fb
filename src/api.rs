//! Request paths for the place server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::consts::URL_COORD_DECIMALS;
use crate::geo::{LatLng, LatLngBounds};
use crate::place::PlaceId;

/// Path of the places inside `bounds`: `/data/{sw}/{ne}/`, each corner as `lng,lat`.
#[must_use]
pub fn data_url(bounds: &LatLngBounds) -> String {
    format!("/data/{}/{}/", coords(bounds.south_west), coords(bounds.north_east))
}

/// Path of the detail HTML for one place.
#[must_use]
pub fn info_url(id: PlaceId) -> String {
    format!("/info/{id}/")
}

fn coords(p: LatLng) -> String {
    format!("{:.prec$},{:.prec$}", p.lng, p.lat, prec = URL_COORD_DECIMALS)
}
