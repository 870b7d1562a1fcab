//! Drawing-surface types shared with the web frontend.
//!
//! The core never talks to a canvas directly. It describes what to draw through
//! the [`Surface`] trait so the frame loop can be exercised on the host with a
//! recording surface.

use glam::Vec2;
use std::fmt;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Fill color for a single particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb([u8; 3]),
    /// Hue in degrees (any range, wrapped on output); saturation and lightness in percent.
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb([r, g, b]) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(
                f,
                "hsl({:.1}, {:.0}%, {:.0}%)",
                hue.rem_euclid(360.0),
                saturation,
                lightness
            ),
        }
    }
}

/// Host drawing primitives needed by the frame loop.
pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Draw a filled circle. `glow` is a blur radius in pixels; 0 disables it.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color, glow: f32);
}
