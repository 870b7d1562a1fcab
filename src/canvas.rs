//! Canvas 2D bindings for the core's `Surface` and `TextRasterizer` seams.

use crate::constants::font_spec;
use glam::Vec2;
use std::f64::consts::TAU;
use swarm_core::{Color, PixelBuffer, RasterError, Surface, TextLayout, TextRasterizer, GRADIENT_STOPS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn host_err(e: JsValue) -> RasterError {
    RasterError::Host(format!("{:?}", e))
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// The visible canvas.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color, glow: f32) {
        let css = JsValue::from_str(&color.to_string());
        self.ctx.begin_path();
        self.ctx.set_shadow_blur(glow as f64);
        if glow > 0.0 {
            self.ctx.set_shadow_color(&color.to_string());
        }
        self.ctx.set_fill_style(&css);
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }
}

/// Draws text into a detached canvas and reads the pixels back.
#[derive(Clone)]
pub struct CanvasTextRasterizer {
    document: web::Document,
}

impl CanvasTextRasterizer {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    #[allow(deprecated)]
    fn render(&self, text: &str, layout: &TextLayout) -> Result<PixelBuffer, JsValue> {
        let (w, h) = (layout.size.width, layout.size.height);
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(JsValue::from)?;
        canvas.set_width(w);
        canvas.set_height(h);
        let ctx = context_2d(&canvas)?;

        let gradient = ctx.create_linear_gradient(0.0, 0.0, w as f64, 0.0);
        for (offset, rgb) in GRADIENT_STOPS {
            gradient.add_color_stop(offset, &Color::Rgb(rgb).to_string())?;
        }

        ctx.set_font(&font_spec(layout.font_size));
        ctx.set_fill_style(&gradient);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        ctx.fill_text(text, w as f64 / 2.0, h as f64 / 2.0)?;

        let image = ctx.get_image_data(0.0, 0.0, w as f64, h as f64)?;
        PixelBuffer::new(w, h, image.data().0).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl TextRasterizer for CanvasTextRasterizer {
    fn rasterize(&mut self, text: &str, layout: &TextLayout) -> Result<PixelBuffer, RasterError> {
        if layout.size.is_empty() {
            return Ok(PixelBuffer::blank(layout.size.width, layout.size.height));
        }
        self.render(text, layout).map_err(host_err)
    }
}
