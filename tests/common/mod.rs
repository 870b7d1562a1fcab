// Host-side stand-ins for the browser: a software text rasterizer and a
// surface that records draw calls.

#![allow(dead_code)]
use glam::Vec2;
use swarm_core::*;

/// Paints each character as a solid block, centered like canvas text with
/// `textAlign = center` and `textBaseline = middle`.
pub struct BlockRasterizer {
    pub calls: usize,
}

impl BlockRasterizer {
    pub fn new() -> Self {
        Self { calls: 0 }
    }

    /// Horizontal distance between glyph origins.
    pub fn advance(font_size: f32) -> f32 {
        font_size * 0.7
    }

    /// Bounding box (min, max) of everything painted for `text`.
    pub fn text_bounds(text: &str, layout: &TextLayout) -> (Vec2, Vec2) {
        let n = text.chars().count() as f32;
        let total_w = Self::advance(layout.font_size) * n;
        let glyph_h = layout.font_size * 0.7;
        let c = layout.size.center();
        (
            Vec2::new(c.x - total_w / 2.0, c.y - glyph_h / 2.0),
            Vec2::new(c.x + total_w / 2.0, c.y + glyph_h / 2.0),
        )
    }
}

impl TextRasterizer for BlockRasterizer {
    fn rasterize(&mut self, text: &str, layout: &TextLayout) -> Result<PixelBuffer, RasterError> {
        self.calls += 1;
        let (w, h) = (layout.size.width, layout.size.height);
        let mut buf = PixelBuffer::blank(w, h);
        let (min, max) = Self::text_bounds(text, layout);
        let advance = Self::advance(layout.font_size);
        let glyph_w = layout.font_size * 0.6;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = min.x + advance * i as f32;
            let x1 = x0 + glyph_w;
            for y in (min.y.max(0.0) as u32)..(max.y.min(h as f32) as u32) {
                for x in (x0.max(0.0) as u32)..(x1.min(w as f32) as u32) {
                    let [r, g, b] = gradient_color_at(x as f32 / w as f32);
                    buf.put(x, y, [r, g, b, 255]);
                }
            }
        }
        Ok(buf)
    }
}

/// Always fails, for error-path tests.
pub struct BrokenRasterizer;

impl TextRasterizer for BrokenRasterizer {
    fn rasterize(&mut self, _text: &str, _layout: &TextLayout) -> Result<PixelBuffer, RasterError> {
        Err(RasterError::Host("context lost".into()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        glow: f32,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color, glow: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: *color,
            glow,
        });
    }
}

pub fn sample_at(x: f32, y: f32) -> Sample {
    Sample {
        position: Vec2::new(x, y),
        color: [10, 20, 30],
    }
}

/// Run `frames` ticks with no pointer so particles settle on their targets.
pub fn settle(sim: &mut Simulation, frames: usize) {
    let mut driver = FrameDriver::new();
    let mut surface = RecordingSurface::default();
    for i in 0..frames {
        driver.tick(sim, &mut surface, i as f64 * 16.0);
        surface.ops.clear();
    }
}

/// Brute-force nearest `available` point strictly inside `radius`, lowest
/// index on ties. Reference for `ParticleGrid::nearest`.
pub fn nearest_linear(
    query: Vec2,
    points: &[Vec2],
    available: &[bool],
    radius: f32,
) -> Option<usize> {
    let radius_sq = radius * radius;
    let mut best_d2 = f32::INFINITY;
    let mut best = None;
    for (i, p) in points.iter().enumerate() {
        if !available[i] {
            continue;
        }
        let d2 = p.distance_squared(query);
        if d2 < best_d2 && d2 < radius_sq {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}
