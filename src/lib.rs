#![cfg(target_arch = "wasm32")]
use backdrop_core::{ParticleField, ParticleFieldParams, PlasmaField, PlasmaParams, SharedPointer};
use constants::*;
use dom::Sizing;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

pub use frame::FieldHandle;

thread_local! {
    // Handles for canvases picked up by id at start; kept alive until unmount_all.
    static AUTO_MOUNTED: RefCell<Vec<FieldHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; nothing mounted");
        return Ok(());
    };
    let mut handles = Vec::new();
    if let Some(canvas) = dom::canvas_by_id(&document, PARTICLE_CANVAS_ID) {
        handles.push(mount_particle_field(canvas));
    }
    if let Some(canvas) = dom::canvas_by_id(&document, PLASMA_CANVAS_ID) {
        handles.push(mount_plasma_field(canvas));
    }
    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(handles));
    Ok(())
}

/// Full-viewport particle field that scatters away from the pointer.
#[wasm_bindgen]
pub fn mount_particle_field(canvas: web::HtmlCanvasElement) -> FieldHandle {
    match try_mount_particle_field(&canvas) {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("[{}] not mounted: {:?}", PARTICLE_LABEL, e);
            FieldHandle::inert(PARTICLE_LABEL)
        }
    }
}

fn try_mount_particle_field(canvas: &web::HtmlCanvasElement) -> anyhow::Result<FieldHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let pointer = SharedPointer::default();
    let listeners = events::wire_pointer(&window, canvas, &pointer)?;
    let field = ParticleField::with_entropy(ParticleFieldParams::default(), pointer);
    let runner = frame::mount(canvas, field, Sizing::Viewport, listeners, PARTICLE_LABEL)?;
    Ok(FieldHandle::new(PARTICLE_LABEL, runner))
}

/// Plasma blobs and linked swarm filling the canvas's parent element.
#[wasm_bindgen]
pub fn mount_plasma_field(canvas: web::HtmlCanvasElement) -> FieldHandle {
    let field = PlasmaField::with_entropy(PlasmaParams::default());
    match frame::mount(&canvas, field, Sizing::Parent, Vec::new(), PLASMA_LABEL) {
        Ok(runner) => FieldHandle::new(PLASMA_LABEL, runner),
        Err(e) => {
            log::warn!("[{}] not mounted: {:?}", PLASMA_LABEL, e);
            FieldHandle::inert(PLASMA_LABEL)
        }
    }
}

/// Stop every backdrop mounted automatically by `start`.
#[wasm_bindgen]
pub fn unmount_all() {
    let handles = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for mut h in handles {
        h.stop();
    }
}
