//! Simulation context: everything a running swarm needs, passed explicitly
//! instead of living in globals.

use crate::input::{normalize_submission, PointerState, ResizeDebouncer};
use crate::particle::EntryMode;
use crate::raster::{rasterize_text, RasterError, TextRasterizer};
use crate::surface::SurfaceSize;
use crate::swarm::{RebuildPlan, RebuildStats, Swarm, SwarmParams};
use instant::Instant;

pub struct Simulation {
    pub(crate) swarm: Swarm,
    pub(crate) pointer: PointerState,
    pub(crate) params: SwarmParams,
    size: SurfaceSize,
    resize: ResizeDebouncer,
    last_text: String,
    loaded: bool,
}

impl Simulation {
    pub fn new(size: SurfaceSize, params: SwarmParams, seed: u64) -> Self {
        let resize = ResizeDebouncer::new(params.resize_debounce);
        Self {
            swarm: Swarm::new(seed),
            pointer: PointerState::default(),
            params,
            size,
            resize,
            last_text: String::new(),
            loaded: false,
        }
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn params(&self) -> &SwarmParams {
        &self.params
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    /// True once a text has been rasterized into the swarm.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Host entry point for a new text. Blank input is ignored (`Ok(false)`).
    pub fn submit<R: TextRasterizer + ?Sized>(
        &mut self,
        raw: &str,
        rasterizer: &mut R,
    ) -> Result<bool, RasterError> {
        let Some(text) = normalize_submission(raw) else {
            log::debug!("[sim] ignoring blank submission");
            return Ok(false);
        };
        log::info!("[sim] submit '{}'", text);
        // Always a content change, never a reflow.
        self.last_text.clear();
        self.rebuild(&text, false, rasterizer)?;
        Ok(true)
    }

    /// Rasterize `text` against the current surface and reconcile the swarm.
    ///
    /// New particles rise from the bottom only on the first successful load,
    /// never on a resize. Later texts appear in place.
    pub fn rebuild<R: TextRasterizer + ?Sized>(
        &mut self,
        text: &str,
        is_resizing: bool,
        rasterizer: &mut R,
    ) -> Result<RebuildStats, RasterError> {
        let fresh_load = !self.loaded && !is_resizing;
        self.last_text = text.to_owned();

        let samples = rasterize_text(rasterizer, text, self.size)?;
        let plan = RebuildPlan {
            reuse: is_resizing,
            entry: if fresh_load {
                EntryMode::FromBottom
            } else {
                EntryMode::AtTarget
            },
        };
        let stats = self.swarm.rebuild(
            &samples,
            plan,
            self.size.height as f32,
            self.params.reuse_radius,
        );
        self.loaded = true;
        log::info!(
            "[sim] rebuild '{}' {}x{} resizing={} {}",
            text,
            self.size.width,
            self.size.height,
            is_resizing,
            stats
        );
        Ok(stats)
    }

    /// Record a resize notification; the rebuild waits for the quiet period.
    pub fn request_resize(&mut self, size: SurfaceSize, now: Instant) {
        self.resize.request(size, now);
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Apply a due resize. Returns the new size so the host can resize its
    /// canvas; the swarm is reflowed when text is showing.
    pub fn poll_resize<R: TextRasterizer + ?Sized>(
        &mut self,
        now: Instant,
        rasterizer: &mut R,
    ) -> Result<Option<SurfaceSize>, RasterError> {
        let Some(size) = self.resize.poll(now) else {
            return Ok(None);
        };
        log::debug!("[sim] resize fired {}x{}", size.width, size.height);
        self.size = size;
        if !self.last_text.is_empty() {
            let text = self.last_text.clone();
            self.rebuild(&text, true, rasterizer)?;
        }
        Ok(Some(size))
    }
}
