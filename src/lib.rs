//! Place map client: label overlay renderer and map view state.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! host map widget. It owns the label overlay: a transparent canvas kept in
//! pixel alignment with the host's pan/zoom transform, onto which per-marker
//! text labels are drawn with collision avoidance. It also owns the client
//! state of the place viewer (cached places, languages, icons, filters and the
//! info panel).
//!
//! The crate exports no JavaScript API. It is linked as an `rlib` by a Rust
//! wasm front end, which owns the map widget and HTTP transport and wires DOM
//! events into [`engine::LabelLayer`] and [`state::MapViewState`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Overlay engine and testable [`engine::RendererCore`] |
//! | [`render`] | Per-feature label measurement, placement and drawing |
//! | [`collision`] | Label boxes and the first-fit placed-label set |
//! | [`anchor`] | Anchor points for markers, lines and polygons |
//! | [`transform`] | Overlay placement during pan/zoom and per-pass surface layout |
//! | [`geo`] | Geographic coordinates and Web Mercator projection |
//! | [`geom`] | Screen-space points and bounds |
//! | [`feature`] | Drawable features handed to a render pass |
//! | [`surface`] | Drawing and hook traits implemented by the overlay |
//! | [`web`] | `Canvas2D` binding for [`surface::LabelCanvas`] |
//! | [`hit`] | Point-in-shape tests for hover and click pass-through |
//! | [`hover`] | Pointer throttling and hover tracking |
//! | [`state`] | [`state::MapViewState`]: caches, filters and info panel for one map view |
//! | [`place`] | Viewport payload model (places, languages, icons) |
//! | [`filter`] | Checkbox filter panel model |
//! | [`info`] | Info panel and loading indicator state |
//! | [`api`] | Request URLs for viewport data and place details |
//! | [`config`] | Renderer and map options |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric defaults |

pub mod anchor;
pub mod api;
pub mod collision;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod feature;
pub mod filter;
pub mod geo;
pub mod geom;
pub mod hit;
pub mod hover;
pub mod info;
pub mod place;
pub mod render;
pub mod state;
pub mod surface;
pub mod transform;
pub mod web;

pub use error::Error;
