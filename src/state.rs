//! Map view state.
//!
//! DESIGN
//! ======
//! `MapViewState` owns everything one map view knows about its data: the
//! places fetched so far, the languages and icons they refer to, the filter
//! panel built from them, the detail panel and the loading indicator. The
//! host feeds it server responses and user actions and asks it for the
//! features of the next render pass.
//!
//! Viewport reloads overlap heavily, so the place cache only ever grows:
//! places already seen are skipped, and only newly seen places are queued
//! for the host to create icon markers for.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::{BTreeMap, HashMap};

use crate::api;
use crate::config::MapOptions;
use crate::consts::{ICON_ANCHOR_PX, ICON_SIZE_PX, PLACE_DOT_RADIUS_PX, PLACE_DOT_WEIGHT_PX};
use crate::engine::RendererCore;
use crate::error::Error;
use crate::feature::Feature;
use crate::filter::FilterPanel;
use crate::geo::{LatLng, LatLngBounds};
use crate::geom::Point;
use crate::info::{InfoPanel, LoadState, LoadingIndicator};
use crate::place::{LangId, Language, PlaceFeature, PlaceId, ViewportResponse};

/// Filter section with one row per language.
pub const LANG_SECTION: &str = "lang";

/// Filter section with one row per place category.
pub const CATEGORY_SECTION: &str = "category";

/// Language row for places without any name.
pub const UNKNOWN_LANG_ROW: &str = "unknown";

// =============================================================================
// ICONS AND MARKERS
// =============================================================================

/// An icon image and how it hangs from its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub url: String,
    /// Width and height in CSS pixels.
    pub size: (u32, u32),
    /// Pixel of the image that sits on the place.
    pub anchor: (u32, u32),
}

impl IconSpec {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self { url: url.to_owned(), size: ICON_SIZE_PX, anchor: ICON_ANCHOR_PX }
    }
}

/// An icon marker the host still has to add to its icon layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker {
    pub place: PlaceId,
    pub at: LatLng,
    /// Key into [`MapViewState::icon`]; `None` for places without an icon.
    pub icon: Option<String>,
}

/// Counts for one ingested response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Features in the response.
    pub received: usize,
    /// Features not seen before.
    pub new: usize,
    /// Places cached after the response.
    pub total: usize,
}

// =============================================================================
// MAP VIEW STATE
// =============================================================================

pub struct MapViewState {
    pub options: MapOptions,
    places: HashMap<PlaceId, PlaceFeature>,
    /// Cache order, which is also label priority.
    order: Vec<PlaceId>,
    langs: BTreeMap<LangId, Language>,
    icons: BTreeMap<String, IconSpec>,
    new_markers: Vec<NewMarker>,
    loaded: bool,
    filters: FilterPanel,
    info: InfoPanel,
    loading: LoadingIndicator,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}

impl MapViewState {
    #[must_use]
    pub fn new(options: MapOptions) -> Self {
        let mut filters = FilterPanel::new();
        filters.add_section(LANG_SECTION, "Languages");
        filters.add_section(CATEGORY_SECTION, "Place types");
        Self {
            options,
            places: HashMap::new(),
            order: Vec::new(),
            langs: BTreeMap::new(),
            icons: BTreeMap::new(),
            new_markers: Vec::new(),
            loaded: false,
            filters,
            info: InfoPanel::default(),
            loading: LoadingIndicator::new(),
        }
    }

    /// Renderer core configured from the view's options.
    #[must_use]
    pub fn renderer_core(&self) -> RendererCore {
        RendererCore::new(self.options.labels.clone(), self.options.pointer_throttle_ms)
    }

    // --- Data loading ---

    /// Path to request the places visible in `bounds`. Marks the view as loading.
    pub fn request_viewport(&mut self, bounds: &LatLngBounds) -> String {
        self.loading.set_state(LoadState::Loading, None);
        api::data_url(bounds)
    }

    /// The viewport request failed; the cached places stay.
    pub fn viewport_failed(&mut self, message: &str) {
        tracing::warn!(message, "viewport request failed");
        self.loading.set_state(LoadState::Error, Some(message));
    }

    /// Merge a viewport response into the cache.
    ///
    /// Icons and languages keep their first definition. Places already
    /// cached are skipped. New languages and categories get a filter row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFilterSection`] if a filter section is missing.
    pub fn ingest(&mut self, response: ViewportResponse) -> Result<IngestSummary, Error> {
        for (name, url) in &response.metadata.icons {
            self.icons.entry(name.clone()).or_insert_with(|| IconSpec::new(url));
        }
        for lang in response.metadata.langs {
            self.add_language(lang)?;
        }

        let received = response.features.len();
        let mut new = 0;
        for place in response.features {
            let id = place.id();
            if self.places.contains_key(&id) {
                continue;
            }
            // Names can refer to languages the metadata left out.
            if let Some(lang) = place.primary_lang() {
                self.add_language(lang.clone())?;
            } else if self.filters.section(LANG_SECTION).and_then(|s| s.row(UNKNOWN_LANG_ROW)).is_none() {
                self.filters.add_row(LANG_SECTION, UNKNOWN_LANG_ROW, "Unknown", None)?;
            }
            let category = place.properties.category.clone();
            if self.filters.section(CATEGORY_SECTION).and_then(|s| s.row(&category)).is_none() {
                self.filters.add_row(CATEGORY_SECTION, &category, &category, None)?;
            }

            self.new_markers.push(NewMarker { place: id, at: place.lat_lng(), icon: place.properties.icon.clone() });
            self.order.push(id);
            self.places.insert(id, place);
            new += 1;
        }

        let summary = IngestSummary { received, new, total: self.order.len() };
        tracing::debug!(received, new, total = summary.total, "viewport ingested");

        if !self.loaded {
            tracing::debug!("first viewport loaded");
            self.loaded = true;
        }
        self.loading.set_state(LoadState::Okay, None);
        Ok(summary)
    }

    fn add_language(&mut self, lang: Language) -> Result<(), Error> {
        if self.langs.contains_key(&lang.id) {
            return Ok(());
        }
        self.filters.add_row(LANG_SECTION, &lang.id.to_string(), &lang.name, Some(&lang.colour))?;
        self.langs.insert(lang.id, lang);
        Ok(())
    }

    /// Drain the icon markers created since the last call.
    pub fn take_new_markers(&mut self) -> Vec<NewMarker> {
        std::mem::take(&mut self.new_markers)
    }

    /// Whether any response has been ingested yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // --- Queries ---

    #[must_use]
    pub fn place(&self, id: PlaceId) -> Option<&PlaceFeature> {
        self.places.get(&id)
    }

    /// Cached places in the order they were first seen.
    pub fn places(&self) -> impl Iterator<Item = &PlaceFeature> {
        self.order.iter().filter_map(|id| self.places.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn language(&self, id: LangId) -> Option<&Language> {
        self.langs.get(&id)
    }

    #[must_use]
    pub fn icon(&self, name: &str) -> Option<&IconSpec> {
        self.icons.get(name)
    }

    // --- Filtering ---

    #[must_use]
    pub fn filters(&self) -> &FilterPanel {
        &self.filters
    }

    /// Flip a filter row; returns its new status.
    pub fn toggle_filter(&mut self, section_id: &str, row_id: &str) -> Option<bool> {
        self.filters.toggle(section_id, row_id)
    }

    /// Whether the filters let `place` through.
    #[must_use]
    pub fn is_visible(&self, place: &PlaceFeature) -> bool {
        let lang_row = place
            .primary_lang()
            .map_or_else(|| UNKNOWN_LANG_ROW.to_owned(), |l| l.id.to_string());
        self.filters.is_enabled(LANG_SECTION, &lang_row)
            && self.filters.is_enabled(CATEGORY_SECTION, &place.properties.category)
    }

    /// Features for the next pass: a labelled dot per visible place, filled with
    /// its marker colour, in cache order.
    #[must_use]
    pub fn features(&self, project: impl Fn(LatLng) -> Point) -> Vec<Feature> {
        self.places()
            .filter(|p| self.is_visible(p))
            .map(|p| {
                Feature::circle(p.id(), project(p.lat_lng()), PLACE_DOT_RADIUS_PX)
                    .with_weight(PLACE_DOT_WEIGHT_PX)
                    .with_interactive(false)
                    .with_fill_color(p.marker_colour())
                    .with_label(p.label())
            })
            .collect()
    }

    // --- Detail panel ---

    #[must_use]
    pub fn info(&self) -> &InfoPanel {
        &self.info
    }

    /// Open the detail panel for a place and return the path to fetch its
    /// details from. `None` closes the panel.
    pub fn open_info(&mut self, place: Option<PlaceId>) -> Option<String> {
        self.info.open_info(place);
        place.map(api::info_url)
    }

    pub fn info_loaded(&mut self, id: PlaceId, html: String) -> bool {
        self.info.info_loaded(id, html)
    }

    pub fn info_failed(&mut self, id: PlaceId, message: &str) -> bool {
        self.info.info_failed(id, message)
    }

    /// A click on the map background closes the detail panel.
    pub fn on_map_click(&mut self) {
        self.info.open_info(None);
    }

    #[must_use]
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }
}
