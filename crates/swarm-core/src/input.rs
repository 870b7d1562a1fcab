use crate::surface::SurfaceSize;
use glam::Vec2;
use instant::{Duration, Instant};

/// Last known pointer position in surface pixels. `None` until the first move.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

/// Latest-wins resize request with a quiet period.
///
/// Each `request` replaces the pending one and restarts the window, so a burst
/// of resize notifications yields a single fire after the last of them.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(SurfaceSize, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn request(&mut self, size: SurfaceSize, now: Instant) {
        self.pending = Some((size, now + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Size to apply if the quiet period is over; clears the request.
    pub fn poll(&mut self, now: Instant) -> Option<SurfaceSize> {
        match self.pending {
            Some((size, due)) if now >= due => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }
}

/// Trim and uppercase a submission; `None` for blank input.
pub fn normalize_submission(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}
