use crate::input::{backing_size, client_to_canvas};
use backdrop_core::Size;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a canvas's backing buffer should track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    /// The window's inner size (full-page backgrounds).
    Viewport,
    /// The parent element's client size.
    Parent,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// `None` when the browser refuses a 2D context; the caller then draws nothing.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

pub fn viewport_size(window: &web::Window) -> Size {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    backing_size(w, h)
}

pub fn parent_size(canvas: &web::HtmlCanvasElement) -> Size {
    match canvas.parent_element() {
        Some(parent) => backing_size(parent.client_width() as f64, parent.client_height() as f64),
        None => backing_size(canvas.client_width() as f64, canvas.client_height() as f64),
    }
}

pub fn measure(canvas: &web::HtmlCanvasElement, sizing: Sizing) -> Size {
    match sizing {
        Sizing::Viewport => web::window()
            .map(|w| viewport_size(&w))
            .unwrap_or_default(),
        Sizing::Parent => parent_size(canvas),
    }
}

/// Client coordinates to canvas pixels.
pub fn canvas_point(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(client_x, client_y),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Size::new(canvas.width(), canvas.height()),
    )
}
