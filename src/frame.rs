use crate::dom::{self, Sizing};
use crate::events::{self, Listener};
use crate::render::CanvasSurface;
use backdrop_core::{Animation, FieldError, FrameBudget, FrameHandle, FrameScheduler, Runner, Size};
use instant::Instant;
use std::cell::{Cell, OnceCell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` plus the listeners belonging to one mount.
pub struct BrowserScheduler {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
    listeners: Vec<Listener>,
}

impl FrameScheduler for BrowserScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, FieldError> {
        self.window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| FieldError::Schedule(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }

    fn release(&mut self) {
        let kinds: Vec<&str> = self.listeners.iter().map(Listener::kind).collect();
        self.listeners.clear();
        log::debug!("[frame] removed listeners {:?}", kinds);
    }
}

pub type BrowserRunner<A> = Runner<A, CanvasSurface, BrowserScheduler>;
type RunnerSlot<A> = Rc<OnceCell<Weak<RefCell<BrowserRunner<A>>>>>;

fn upgrade<A: Animation>(slot: &RunnerSlot<A>) -> Option<Rc<RefCell<BrowserRunner<A>>>> {
    slot.get().and_then(Weak::upgrade)
}

/// Start `animation` on `canvas`.
///
/// `listeners` (e.g. pointer wiring) are handed to the scheduler and removed
/// together with the resize listener when the runner stops. Callbacks only
/// hold weak references, so dropping the returned runner tears everything
/// down.
pub fn mount<A: Animation + 'static>(
    canvas: &web::HtmlCanvasElement,
    animation: A,
    sizing: Sizing,
    mut listeners: Vec<Listener>,
    label: &'static str,
) -> anyhow::Result<Rc<RefCell<BrowserRunner<A>>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let surface = CanvasSurface::new(canvas.clone())?;

    let slot: RunnerSlot<A> = Rc::new(OnceCell::new());
    // Size seen by the last resize event that has not reached the runner yet.
    let pending_size: Rc<Cell<Option<Size>>> = Rc::new(Cell::new(None));

    let tick = {
        let slot = slot.clone();
        let pending_size = pending_size.clone();
        let mut budget = FrameBudget::new(label);
        Closure::wrap(Box::new(move || {
            let Some(cell) = upgrade(&slot) else {
                return;
            };
            let Ok(mut runner) = cell.try_borrow_mut() else {
                log::error!("[frame] runner busy during tick; loop halted");
                return;
            };
            if let Some(size) = pending_size.take() {
                runner.resize(size);
            }
            let started = Instant::now();
            runner.tick();
            budget.record(started.elapsed());
        }) as Box<dyn FnMut()>)
    };

    let resize = {
        let slot = slot.clone();
        let pending_size = pending_size.clone();
        let canvas = canvas.clone();
        events::wire_resize(&window, move || {
            pending_size.set(Some(dom::measure(&canvas, sizing)));
            if let Some(cell) = upgrade(&slot) {
                if let Ok(mut runner) = cell.try_borrow_mut() {
                    if let Some(size) = pending_size.take() {
                        runner.resize(size);
                    }
                }
            }
        })?
    };
    listeners.push(resize);

    let scheduler = BrowserScheduler {
        window,
        tick,
        listeners,
    };
    let size = dom::measure(canvas, sizing);
    let runner = Runner::start(animation, surface, scheduler, size)?;
    let shared = Rc::new(RefCell::new(runner));
    _ = slot.set(Rc::downgrade(&shared));
    log::info!("[{}] mounted at {}x{}", label, size.width, size.height);
    Ok(shared)
}

trait Disposer {
    fn dispose(&self) -> bool;
    fn is_running(&self) -> bool;
}

impl<A: Animation> Disposer for Rc<RefCell<BrowserRunner<A>>> {
    fn dispose(&self) -> bool {
        self.try_borrow_mut().map(|mut r| r.stop()).unwrap_or(false)
    }

    fn is_running(&self) -> bool {
        self.try_borrow().map(|r| r.is_running()).unwrap_or(false)
    }
}

/// Disposer returned to JS for a mounted backdrop.
///
/// A handle for a backdrop that could not mount is inert: `stop()` does
/// nothing and `is_running()` is false.
#[wasm_bindgen]
pub struct FieldHandle {
    label: &'static str,
    inner: Option<Box<dyn Disposer>>,
}

impl FieldHandle {
    pub fn new<A: Animation + 'static>(
        label: &'static str,
        runner: Rc<RefCell<BrowserRunner<A>>>,
    ) -> Self {
        Self {
            label,
            inner: Some(Box::new(runner)),
        }
    }

    pub fn inert(label: &'static str) -> Self {
        Self { label, inner: None }
    }
}

#[wasm_bindgen]
impl FieldHandle {
    /// Cancel the frame loop and remove listeners. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(inner) = self.inner.take() {
            if inner.dispose() {
                log::info!("[{}] unmounted", self.label);
            }
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.as_ref().is_some_and(|d| d.is_running())
    }
}
