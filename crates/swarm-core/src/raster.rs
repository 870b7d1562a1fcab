//! Text to sample points.
//!
//! Glyph rendering is host-specific (the browser draws text into an offscreen
//! canvas), so it sits behind [`TextRasterizer`]. Everything around it is pure:
//! choosing the font size, choosing the sampling stride and walking the
//! read-back pixels.

use crate::constants::*;
use crate::surface::SurfaceSize;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("host rasterizer failed: {0}")]
    Host(String),
}

/// One accepted pixel, destined to seed or retarget one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: Vec2,
    pub color: [u8; 3],
}

/// Geometry handed to the host when it draws the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub size: SurfaceSize,
    pub font_size: f32,
}

/// Row-major RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fully transparent buffer.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let i = (y as usize * self.width as usize + x as usize) * 4;
            self.data[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Walk the grid every `stride` pixels on both axes and keep the opaque ones.
    pub fn sample(&self, stride: usize) -> Vec<Sample> {
        let stride = stride.max(1);
        let mut out = Vec::new();
        for y in (0..self.height).step_by(stride) {
            for x in (0..self.width).step_by(stride) {
                let [r, g, b, a] = self.rgba(x, y);
                if a > ALPHA_THRESHOLD {
                    out.push(Sample {
                        position: Vec2::new(x as f32, y as f32),
                        color: [r, g, b],
                    });
                }
            }
        }
        out
    }
}

/// Host hook that draws `text` centered on a transparent surface of
/// `layout.size`, filled with [`GRADIENT_STOPS`] spanning the full width, and
/// returns the pixels.
pub trait TextRasterizer {
    fn rasterize(&mut self, text: &str, layout: &TextLayout) -> Result<PixelBuffer, RasterError>;
}

/// Font size shrinking with text length, bounded to a readable range.
pub fn font_size_for(char_count: usize, size: SurfaceSize) -> f32 {
    let min_dim = size.width.min(size.height) as f32;
    let fit = min_dim / (char_count.max(1) as f32 * FONT_WIDTH_PER_CHAR);
    fit.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

/// Sampling stride keeping the particle count near the budget at any resolution.
pub fn pixel_skip_for(size: SurfaceSize) -> usize {
    let skip = (size.area() as f64 / PARTICLE_BUDGET).sqrt().round() as usize;
    skip.clamp(PIXEL_SKIP_MIN, PIXEL_SKIP_MAX)
}

/// Gradient color at `t` in [0, 1] (clamped), linearly interpolated between stops.
pub fn gradient_color_at(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in GRADIENT_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let mut out = [0u8; 3];
            for ch in 0..3 {
                let v = c0[ch] as f32 + (c1[ch] as f32 - c0[ch] as f32) * f;
                out[ch] = v.round().clamp(0.0, 255.0) as u8;
            }
            return out;
        }
    }
    GRADIENT_STOPS[GRADIENT_STOPS.len() - 1].1
}

/// Full pipeline: layout, host rendering, sampling.
pub fn rasterize_text<R: TextRasterizer + ?Sized>(
    rasterizer: &mut R,
    text: &str,
    size: SurfaceSize,
) -> Result<Vec<Sample>, RasterError> {
    let layout = TextLayout {
        size,
        font_size: font_size_for(text.chars().count(), size),
    };
    let stride = pixel_skip_for(size);
    log::debug!(
        "[raster] '{}' {}x{} font={:.1}px stride={}",
        text,
        size.width,
        size.height,
        layout.font_size,
        stride
    );
    if size.is_empty() {
        return Ok(Vec::new());
    }
    let pixels = rasterizer.rasterize(text, &layout)?;
    Ok(pixels.sample(stride))
}
