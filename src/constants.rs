// Page wiring and font constants for the web frontend.

// Element ids in index.html
pub const CANVAS_ID: &str = "canvas";
pub const TEXT_INPUT_ID: &str = "textInput";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";

// Text shown on first load
pub const INITIAL_TEXT: &str = "UABJO";

// Glyph font
pub const FONT_WEIGHT: &str = "bold";
pub const FONT_FAMILY: &str = "'Arial Black', sans-serif";

/// CSS font shorthand for the offscreen text canvas.
#[inline]
pub fn font_spec(font_size_px: f32) -> String {
    format!("{} {}px {}", FONT_WEIGHT, font_size_px, FONT_FAMILY)
}

/// Window inner size in CSS pixels to a canvas backing size (never zero-sized).
#[inline]
pub fn backing_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = if inner_width.is_finite() { inner_width.max(0.0) } else { 0.0 };
    let h = if inner_height.is_finite() { inner_height.max(0.0) } else { 0.0 };
    ((w as u32).max(1), (h as u32).max(1))
}
