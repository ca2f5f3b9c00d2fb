//! Label overlay engine.
//!
//! DESIGN
//! ======
//! `RendererCore` holds everything that does not depend on the browser: the
//! options, the per-pass placed-label set, the view the overlay was last drawn
//! for, the drawn hit targets and hover state. It implements the callback
//! contract the host map dispatches into (`on_viewport_change`,
//! `on_before_shape_draw`, `on_after_shape_draw`, `on_pointer_move`) against
//! any [`LabelCanvas`], so it is tested without WASM.
//!
//! `LabelLayer` wraps the core and owns the overlay `<canvas>`. It applies
//! the geometry the core computes to the element (size, position, transform,
//! cursor class) and implements [`DrawableSurface`].
//!
//! A pass runs to completion synchronously. The next pass clears everything
//! the previous one produced; nothing carries over except the drawn view.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::collision::PlacedLabelSet;
use crate::config::LabelOptions;
use crate::consts::{GEOMETRY_Z_INDEX, POINTER_THROTTLE_MS};
use crate::error::Error;
use crate::feature::{Feature, FeatureId};
use crate::geo::{LatLng, Projection, WebMercator};
use crate::geom::Point;
use crate::hit::{self, HitTarget};
use crate::hover::{HoverTracker, Throttle};
use crate::render::{self, LabelOutcome};
use crate::surface::{DrawableSurface, LabelCanvas};
use crate::transform::{DrawnView, OverlayPlacement, PassFrame, SurfaceLayout, TRANSFORM_ORIGIN, overlay_placement};
use crate::web;

/// CSS class toggled on the overlay while an interactive shape is hovered.
pub const INTERACTIVE_CLASS: &str = "interactive";

/// CSS class marking the overlay as following zoom animations.
pub const ZOOM_ANIMATED_CLASS: &str = "zoom-animated";

/// Actions returned from pointer handlers for the host to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The pointer entered this shape.
    MouseOver(FeatureId),
    /// The pointer left this shape.
    MouseOut(FeatureId),
    /// A click landed on this shape.
    Click(FeatureId),
    SetCursor(Cursor),
}

/// Cursor shown over the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Interactive,
}

/// Label counts for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Features offered to the pass.
    pub features: usize,
    pub drawn: usize,
    pub collided: usize,
    /// Features without label text or without an anchor.
    pub unlabeled: usize,
    pub failed: usize,
}

impl PassStats {
    fn record(&mut self, outcome: LabelOutcome) {
        match outcome {
            LabelOutcome::Drawn(_) => self.drawn += 1,
            LabelOutcome::Collided { .. } => self.collided += 1,
            LabelOutcome::NoText | LabelOutcome::NoAnchor => self.unlabeled += 1,
            LabelOutcome::Failed => self.failed += 1,
        }
    }
}

/// Renderer state that does not depend on the canvas element.
pub struct RendererCore {
    pub options: LabelOptions,
    pub device_pixel_ratio: f64,
    projection: Box<dyn Projection>,
    placed: PlacedLabelSet,
    drawn_view: Option<DrawnView>,
    layout: Option<SurfaceLayout>,
    targets: Vec<HitTarget>,
    hover: HoverTracker,
    throttle: Throttle,
    busy: bool,
    stats: PassStats,
}

impl Default for RendererCore {
    fn default() -> Self {
        Self::new(LabelOptions::default(), POINTER_THROTTLE_MS)
    }
}

impl RendererCore {
    #[must_use]
    pub fn new(options: LabelOptions, pointer_throttle_ms: f64) -> Self {
        Self {
            options,
            device_pixel_ratio: 1.0,
            projection: Box::new(WebMercator),
            placed: PlacedLabelSet::new(),
            drawn_view: None,
            layout: None,
            targets: Vec::new(),
            hover: HoverTracker::new(),
            throttle: Throttle::new(pointer_throttle_ms),
            busy: false,
            stats: PassStats::default(),
        }
    }

    /// Replace the projection used to follow pan/zoom.
    #[must_use]
    pub fn with_projection(mut self, projection: Box<dyn Projection>) -> Self {
        self.projection = projection;
        self
    }

    /// Replace the options; they take effect from the next pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] and keeps the current options if
    /// `options` does not validate.
    pub fn set_options(&mut self, options: LabelOptions) -> Result<(), Error> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    // --- View changes ---

    /// Placement that keeps the last pass aligned with a view moving to
    /// `center`/`zoom`. `None` until the first pass has been drawn.
    #[must_use]
    pub fn on_viewport_change(&self, center: LatLng, zoom: f64) -> Option<OverlayPlacement> {
        let drawn = self.drawn_view.as_ref()?;
        Some(overlay_placement(self.projection.as_ref(), drawn, self.options.padding, center, zoom))
    }

    /// The host is dragging or animating a zoom; pointer samples are ignored meanwhile.
    pub fn set_interaction_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    // --- Pass lifecycle ---

    /// Reset per-pass state for `frame` and return the surface layout to apply.
    pub fn begin_pass(&mut self, frame: &PassFrame) -> SurfaceLayout {
        self.placed.clear();
        self.targets.clear();
        self.stats = PassStats::default();

        let layout = SurfaceLayout::for_frame(frame, self.device_pixel_ratio);
        self.layout = Some(layout);
        self.drawn_view = Some(DrawnView::from_frame(frame));
        layout
    }

    /// Scale and translate a freshly reset context so layer-pixel geometry
    /// lands on the surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the transform.
    pub fn prepare_context<C: LabelCanvas + ?Sized>(&self, ctx: &C, layout: &SurfaceLayout) -> Result<(), Error> {
        if layout.pixel_ratio != 1.0 {
            ctx.scale(layout.pixel_ratio, layout.pixel_ratio)?;
        }
        ctx.translate(layout.origin.x, layout.origin.y)
    }

    /// A feature's shape is about to be drawn on the geometry layer.
    pub fn on_before_shape_draw(&mut self, feature: &Feature) {
        self.stats.features += 1;
        if let Some(target) = HitTarget::from_feature(feature) {
            self.targets.push(target);
        }
    }

    /// A feature's shape has been drawn: place and draw its label.
    ///
    /// A canvas failure skips this label only; the pass goes on.
    pub fn on_after_shape_draw<C: LabelCanvas + ?Sized>(&mut self, ctx: &C, feature: &Feature) -> LabelOutcome {
        let outcome = match render::draw_label(ctx, &self.options, &mut self.placed, feature) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(feature = feature.id, error = %e, "label skipped");
                LabelOutcome::Failed
            }
        };
        self.stats.record(outcome);
        outcome
    }

    /// Draw every label in `features` order on a context prepared for `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context cannot be prepared.
    pub fn draw_labels<C: LabelCanvas + ?Sized>(
        &mut self,
        ctx: &C,
        layout: &SurfaceLayout,
        features: &[Feature],
    ) -> Result<PassStats, Error> {
        self.prepare_context(ctx, layout)?;
        for feature in features {
            self.on_before_shape_draw(feature);
            self.on_after_shape_draw(ctx, feature);
        }
        let stats = self.stats;
        tracing::debug!(
            features = stats.features,
            drawn = stats.drawn,
            collided = stats.collided,
            unlabeled = stats.unlabeled,
            failed = stats.failed,
            "label pass complete"
        );
        Ok(stats)
    }

    /// Run a whole pass on a context the caller has already reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context cannot be prepared.
    pub fn draw_pass<C: LabelCanvas + ?Sized>(
        &mut self,
        ctx: &C,
        frame: &PassFrame,
        features: &[Feature],
    ) -> Result<PassStats, Error> {
        let layout = self.begin_pass(frame);
        self.draw_labels(ctx, &layout, features)
    }

    // --- Pointer ---

    /// Sample the pointer at `point` (layer pixels). Throttled; never re-places labels.
    pub fn on_pointer_move(&mut self, point: Point, now_ms: f64) -> Vec<Action> {
        if self.busy || !self.throttle.admit(now_ms) {
            return Vec::new();
        }
        let next = hit::topmost(&self.targets, point, self.options.click_tolerance);
        self.hover.update(next)
    }

    /// The pointer left the overlay.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.throttle.reset();
        self.hover.leave()
    }

    /// Forward a click to the topmost interactive shape under `point`.
    ///
    /// Empty when the click hit no shape; the host treats that as a map click.
    #[must_use]
    pub fn on_click(&self, point: Point) -> Vec<Action> {
        hit::topmost(&self.targets, point, self.options.click_tolerance)
            .map(Action::Click)
            .into_iter()
            .collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn placed(&self) -> &PlacedLabelSet {
        &self.placed
    }

    #[must_use]
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    #[must_use]
    pub fn layout(&self) -> Option<SurfaceLayout> {
        self.layout
    }

    #[must_use]
    pub fn drawn_view(&self) -> Option<DrawnView> {
        self.drawn_view
    }

    #[must_use]
    pub fn hovered(&self) -> Option<FeatureId> {
        self.hover.hovered()
    }
}

/// The label overlay. Wraps `RendererCore` and owns the browser canvas element.
pub struct LabelLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: RendererCore,
}

impl LabelLayer {
    /// Create a layer drawing into `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, mut core: RendererCore) -> Result<Self, Error> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| Error::Canvas("2d context unavailable".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Canvas("context is not a CanvasRenderingContext2d".to_owned()))?;
        core.device_pixel_ratio = web::device_pixel_ratio();
        Ok(Self { canvas, ctx, core })
    }

    /// Sample the pointer now, stamped with the browser clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the cursor class cannot be updated.
    pub fn pointer_move(&mut self, point: Point) -> Result<Vec<Action>, Error> {
        self.handle_pointer_move(point, web::now_ms())
    }

    /// Override the device pixel ratio used by the next pass.
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.core.device_pixel_ratio = dpr;
    }

    /// The pointer left the overlay element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the cursor class cannot be updated.
    pub fn on_pointer_leave(&mut self) -> Result<Vec<Action>, Error> {
        let actions = self.core.on_pointer_leave();
        self.apply_cursor(&actions)?;
        Ok(actions)
    }

    #[must_use]
    pub fn on_click(&self, point: Point) -> Vec<Action> {
        self.core.on_click(point)
    }

    /// Z-index of the companion geometry canvas the host should apply.
    #[must_use]
    pub fn geometry_z_index() -> i32 {
        GEOMETRY_Z_INDEX
    }

    fn apply_layout(&self, layout: &SurfaceLayout) -> Result<(), Error> {
        // Resizing the backing store also clears it.
        self.canvas.set_width(layout.backing_width);
        self.canvas.set_height(layout.backing_height);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", layout.css_size.x))?;
        style.set_property("height", &format!("{}px", layout.css_size.y))?;
        style.set_property("z-index", &self.core.options.z_index.to_string())?;
        style.set_property("transform-origin", TRANSFORM_ORIGIN)?;
        self.apply_placement(&OverlayPlacement::at(layout.position))
    }

    fn apply_placement(&self, placement: &OverlayPlacement) -> Result<(), Error> {
        self.canvas
            .style()
            .set_property("transform", &placement.css_transform())?;
        Ok(())
    }

    fn apply_cursor(&self, actions: &[Action]) -> Result<(), Error> {
        for action in actions {
            if let Action::SetCursor(cursor) = action {
                let classes = self.canvas.class_list();
                match cursor {
                    Cursor::Interactive => classes.add_1(INTERACTIVE_CLASS)?,
                    Cursor::Default => classes.remove_1(INTERACTIVE_CLASS)?,
                }
            }
        }
        Ok(())
    }
}

impl DrawableSurface for LabelLayer {
    fn init_surface(&mut self) -> Result<(), Error> {
        self.canvas.class_list().add_1(ZOOM_ANIMATED_CLASS)?;
        let style = self.canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("transform-origin", TRANSFORM_ORIGIN)?;
        style.set_property("z-index", &self.core.options.z_index.to_string())?;
        Ok(())
    }

    fn update_transform(&mut self, center: LatLng, zoom: f64) -> Result<Option<OverlayPlacement>, Error> {
        let placement = self.core.on_viewport_change(center, zoom);
        if let Some(placement) = &placement {
            self.apply_placement(placement)?;
        }
        Ok(placement)
    }

    fn draw_pass(&mut self, frame: &PassFrame, features: &[Feature]) -> Result<PassStats, Error> {
        let layout = self.core.begin_pass(frame);
        self.apply_layout(&layout)?;
        self.core.draw_labels(&self.ctx, &layout, features)
    }

    fn handle_pointer_move(&mut self, point: Point, now_ms: f64) -> Result<Vec<Action>, Error> {
        let actions = self.core.on_pointer_move(point, now_ms);
        self.apply_cursor(&actions)?;
        Ok(actions)
    }
}
