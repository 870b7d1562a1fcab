// Host-side tests for the text-to-samples pipeline.

mod common;

use common::*;
use glam::Vec2;
use swarm_core::*;

#[test]
fn font_size_stays_in_readable_range() {
    let sizes = [
        SurfaceSize::new(800, 600),
        SurfaceSize::new(320, 568),
        SurfaceSize::new(3840, 2160),
        SurfaceSize::new(1, 1),
    ];
    for size in sizes {
        for len in 1..=50 {
            let f = font_size_for(len, size);
            assert!(
                (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&f),
                "font {f} out of range for len {len} on {size:?}"
            );
        }
    }
}

#[test]
fn font_size_shrinks_with_length() {
    let size = SurfaceSize::new(800, 600);
    let mut prev = font_size_for(1, size);
    for len in 2..=50 {
        let f = font_size_for(len, size);
        assert!(f <= prev, "font grew at len {len}");
        prev = f;
    }
    // 600 / (20 * 0.4) = 75
    assert!((font_size_for(20, size) - 75.0).abs() < 1e-4);
}

#[test]
fn font_size_for_two_chars_on_800x600_hits_the_cap() {
    // 600 / (2 * 0.4) = 750, clamped to 180
    assert_eq!(font_size_for(2, SurfaceSize::new(800, 600)), 180.0);
}

#[test]
fn pixel_skip_is_bounded_and_non_decreasing_in_area() {
    let mut prev = 0;
    for side in (0..=4000).step_by(25) {
        let skip = pixel_skip_for(SurfaceSize::new(side, side));
        assert!((PIXEL_SKIP_MIN..=PIXEL_SKIP_MAX).contains(&skip));
        assert!(skip >= prev, "stride decreased at side {side}");
        prev = skip;
    }
}

#[test]
fn pixel_skip_known_sizes() {
    assert_eq!(pixel_skip_for(SurfaceSize::new(0, 0)), 4);
    assert_eq!(pixel_skip_for(SurfaceSize::new(100, 100)), 4);
    // sqrt(240000 / 2000) = 10.95 -> 11 -> clamped to 10
    assert_eq!(pixel_skip_for(SurfaceSize::new(800, 600)), 10);
    // sqrt(72000 / 2000) = 6
    assert_eq!(pixel_skip_for(SurfaceSize::new(400, 180)), 6);
    assert_eq!(pixel_skip_for(SurfaceSize::new(100_000, 100_000)), 10);
}

#[test]
fn sampling_uses_alpha_threshold_and_stride() {
    let mut buf = PixelBuffer::blank(20, 20);
    buf.put(0, 0, [1, 2, 3, 255]);
    buf.put(4, 0, [4, 5, 6, 129]);
    buf.put(8, 0, [7, 8, 9, 128]); // not strictly above the threshold
    buf.put(5, 0, [0, 0, 0, 255]); // off the stride grid
    buf.put(4, 8, [9, 9, 9, 200]);

    let samples = buf.sample(4);
    assert_eq!(
        samples,
        vec![
            Sample {
                position: Vec2::new(0.0, 0.0),
                color: [1, 2, 3]
            },
            Sample {
                position: Vec2::new(4.0, 0.0),
                color: [4, 5, 6]
            },
            Sample {
                position: Vec2::new(4.0, 8.0),
                color: [9, 9, 9]
            },
        ]
    );
}

#[test]
fn pixel_buffer_rejects_wrong_length() {
    let err = PixelBuffer::new(10, 10, vec![0; 399]).unwrap_err();
    match err {
        RasterError::BufferSize { expected, actual } => {
            assert_eq!(expected, 400);
            assert_eq!(actual, 399);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(PixelBuffer::new(10, 10, vec![0; 400]).is_ok());
}

#[test]
fn gradient_hits_stops_and_clamps() {
    assert_eq!(gradient_color_at(0.0), [0xFF, 0x00, 0x77]);
    assert_eq!(gradient_color_at(0.5), [0xFF, 0xDD, 0x00]);
    assert_eq!(gradient_color_at(1.0), [0xAA, 0x00, 0xFF]);
    assert_eq!(gradient_color_at(-3.0), gradient_color_at(0.0));
    assert_eq!(gradient_color_at(7.0), gradient_color_at(1.0));
    // halfway between cyan and purple
    let mid = gradient_color_at(0.875);
    assert_eq!(mid, [0x55, 0x6F, 0xFF]);
}

#[test]
fn zero_area_surface_yields_no_samples() {
    let mut r = BlockRasterizer::new();
    let samples = rasterize_text(&mut r, "HELLO", SurfaceSize::new(0, 600)).unwrap();
    assert!(samples.is_empty());
    assert_eq!(r.calls, 0);
}

#[test]
fn ab_on_800x600_samples_the_glyph_region() {
    let size = SurfaceSize::new(800, 600);
    let mut r = BlockRasterizer::new();
    let samples = rasterize_text(&mut r, "AB", size).unwrap();
    assert!(!samples.is_empty());

    let layout = TextLayout {
        size,
        font_size: 180.0,
    };
    let (min, max) = BlockRasterizer::text_bounds("AB", &layout);
    for s in &samples {
        assert!(s.position.cmpge(min).all() && s.position.cmple(max).all());
        assert_eq!(s.position.x as u32 % 10, 0);
        assert_eq!(s.position.y as u32 % 10, 0);
    }
}
