// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use backdrop_core::Size;
use glam::Vec2;
use input::*;

#[test]
fn backing_size_floors_css_pixels() {
    assert_eq!(backing_size(900.0, 900.0), Size::new(900, 900));
    assert_eq!(backing_size(1280.7, 719.2), Size::new(1280, 719));
}

#[test]
fn backing_size_rejects_degenerate_measurements() {
    assert_eq!(backing_size(-5.0, 300.0), Size::new(0, 300));
    assert_eq!(backing_size(f64::NAN, f64::INFINITY), Size::new(0, 0));
    assert!(backing_size(0.0, 0.0).is_empty());
}

#[test]
fn client_to_canvas_subtracts_rect_origin() {
    let p = client_to_canvas(
        Vec2::new(150.0, 90.0),
        Vec2::new(50.0, 40.0),
        Vec2::new(400.0, 300.0),
        Size::new(400, 300),
    );
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_scales_to_backing_buffer() {
    // Canvas shown at 200x100 CSS px with a 400x200 buffer
    let p = client_to_canvas(
        Vec2::new(100.0, 50.0),
        Vec2::ZERO,
        Vec2::new(200.0, 100.0),
        Size::new(400, 200),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn client_to_canvas_without_layout_is_unscaled() {
    let p = client_to_canvas(
        Vec2::new(30.0, 20.0),
        Vec2::new(10.0, 10.0),
        Vec2::ZERO,
        Size::new(0, 0),
    );
    assert_eq!(p, Vec2::new(20.0, 10.0));
    assert!(p.is_finite());
}
