//! Shared numeric constants for the placemap crate.

// ── Labels ──────────────────────────────────────────────────────

/// Extra height added below the label's top edge when building its box.
pub const LABEL_HEIGHT_MARGIN_PX: f64 = 20.0;

/// Default horizontal displacement from anchor to label, in screen pixels.
pub const DEFAULT_OFFSET_X_PX: f64 = 8.0;

/// Default vertical displacement from anchor to label, in screen pixels.
pub const DEFAULT_OFFSET_Y_PX: f64 = 5.0;

/// Default halo stroke width.
pub const DEFAULT_TEXT_BORDER_WEIGHT: f64 = 2.0;

/// Default text fill weight.
pub const DEFAULT_TEXT_WEIGHT: f64 = 4.0;

/// Default stacking position of the label overlay.
pub const DEFAULT_LABEL_Z_INDEX: i32 = 600;

/// Stacking position of the companion geometry canvas.
pub const GEOMETRY_Z_INDEX: i32 = 3;

// ── Surface ─────────────────────────────────────────────────────

/// Overlay padding as a fraction of the viewport, per side.
pub const DEFAULT_PADDING: f64 = 0.1;

/// Backing-store multiplier on high-density displays.
pub const RETINA_PIXEL_RATIO: f64 = 2.0;

// ── Interaction ─────────────────────────────────────────────────

/// Minimum interval between two hover evaluations.
pub const POINTER_THROTTLE_MS: f64 = 32.0;

/// Extra slop around shapes when hit-testing, in screen pixels.
pub const DEFAULT_CLICK_TOLERANCE_PX: f64 = 0.0;

// ── Map view ────────────────────────────────────────────────────

/// Edge length of a square Web Mercator tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Radius of the dot drawn under each place marker.
pub const PLACE_DOT_RADIUS_PX: f64 = 5.0;

/// Stroke weight of the place dot.
pub const PLACE_DOT_WEIGHT_PX: f64 = 1.0;

/// Edge length of a place icon.
pub const ICON_SIZE_PX: (u32, u32) = (32, 32);

/// Hot-spot of a place icon, from its top-left corner.
pub const ICON_ANCHOR_PX: (u32, u32) = (16, 31);

/// Initial zoom level of the map view.
pub const DEFAULT_ZOOM: f64 = 7.0;

/// Initial latitude of the map view.
pub const DEFAULT_CENTER_LAT: f64 = -22.68;

/// Initial longitude of the map view.
pub const DEFAULT_CENTER_LNG: f64 = 118.35;

/// Decimal places used for coordinates in viewport request URLs.
pub const URL_COORD_DECIMALS: usize = 10;
