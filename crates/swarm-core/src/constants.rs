// Shared simulation tuning constants used by the core and the web frontend.

// Spring + damping
pub const EASE: f32 = 0.04; // fraction of the target gap added to velocity per frame
pub const FRICTION: f32 = 0.93; // velocity multiplier per frame

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 120.0;
pub const PUSH_STRENGTH: f32 = 0.12;

// Pointer hover highlight
pub const INFLUENCE_RADIUS: f32 = 120.0;
pub const MAX_GLOW: f32 = 30.0; // shadow blur at zero distance
pub const HOVER_HUE_WOBBLE_DEG: f32 = 30.0;
pub const HOVER_HUE_PROXIMITY_DEG: f32 = 80.0;
pub const HOVER_SATURATION: f32 = 100.0;
pub const HOVER_LIGHTNESS: f32 = 78.0;

// Pseudo-depth breathing
pub const DEPTH_PHASE_SCALE: f64 = 50.0; // ms of phase per unit of depth
pub const DEPTH_PERIOD_MS: f64 = 1500.0;
pub const PARALLAX_FACTOR: f32 = 0.01;

// Rebuild matching
pub const REUSE_RADIUS: f32 = 100.0;

// Rasterization
pub const FONT_SIZE_MIN: f32 = 20.0;
pub const FONT_SIZE_MAX: f32 = 180.0;
pub const FONT_WIDTH_PER_CHAR: f32 = 0.4; // fraction of the short side per character
pub const PARTICLE_BUDGET: f64 = 2000.0;
pub const PIXEL_SKIP_MIN: usize = 4;
pub const PIXEL_SKIP_MAX: usize = 10;
pub const ALPHA_THRESHOLD: u8 = 128;

// Horizontal glyph gradient (offset, rgb): magenta -> orange -> yellow -> cyan -> purple
pub const GRADIENT_STOPS: [(f32, [u8; 3]); 5] = [
    (0.0, [0xFF, 0x00, 0x77]),
    (0.25, [0xFF, 0x44, 0x00]),
    (0.5, [0xFF, 0xDD, 0x00]),
    (0.75, [0x00, 0xDD, 0xFF]),
    (1.0, [0xAA, 0x00, 0xFF]),
];

// Particle attributes drawn at creation
pub const SIZE_MIN: f32 = 0.3;
pub const SIZE_SPAN: f32 = 1.2;
pub const DEPTH_MAX: f32 = 30.0;
pub const HUE_MAX: f32 = 360.0;

// From-bottom entry
pub const ENTRY_SCATTER_X: f32 = 200.0; // total horizontal spread around the target
pub const ENTRY_DROP_Y: f32 = 50.0; // max distance below the bottom edge
pub const ENTRY_LIFT_MIN: f32 = 2.0;
pub const ENTRY_LIFT_SPAN: f32 = 5.0;

// Input
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
