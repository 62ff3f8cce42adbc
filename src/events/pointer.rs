use super::Listener;
use crate::constants::{EVENT_MOUSE_MOVE, EVENT_TOUCH_MOVE};
use crate::dom;
use backdrop_core::SharedPointer;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window-wide mouse and touch movement into `pointer`, in `canvas`
/// pixels. Every event writes straight through; the frame loop reads
/// whatever is there when it runs.
pub fn wire_pointer(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: &SharedPointer,
) -> anyhow::Result<Vec<Listener>> {
    let mouse = {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        Listener::attach(window, EVENT_MOUSE_MOVE, move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                pointer.move_to(dom::canvas_point(
                    &canvas,
                    ev.client_x() as f32,
                    ev.client_y() as f32,
                ));
            }
        })?
    };

    let touch = {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        Listener::attach(window, EVENT_TOUCH_MOVE, move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            if let Some(t) = ev.touches().get(0) {
                pointer.move_to(dom::canvas_point(
                    &canvas,
                    t.client_x() as f32,
                    t.client_y() as f32,
                ));
            }
        })?
    };

    Ok(vec![mouse, touch])
}
