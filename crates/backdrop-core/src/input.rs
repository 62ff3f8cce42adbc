use crate::constants::{POINTER_RADIUS, POINTER_SENTINEL};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Last known pointer position plus the reach of its repulsion.
///
/// There is no decay: the position stays wherever the last move event left it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::offscreen(POINTER_RADIUS)
    }
}

impl PointerState {
    /// Parked far outside any canvas so nothing reacts before the first input.
    pub fn offscreen(radius: f32) -> Self {
        Self {
            position: Vec2::splat(POINTER_SENTINEL),
            radius,
        }
    }
}

/// Pointer state shared between the event handlers that write it and the
/// frame loop that reads it.
///
/// Everything runs on the page's single thread, so a `Cell` is enough. Each
/// particle field gets its own handle; cloning shares the same state.
#[derive(Clone, Debug, Default)]
pub struct SharedPointer(Rc<Cell<PointerState>>);

impl SharedPointer {
    pub fn new(state: PointerState) -> Self {
        Self(Rc::new(Cell::new(state)))
    }

    pub fn get(&self) -> PointerState {
        self.0.get()
    }

    pub fn position(&self) -> Vec2 {
        self.0.get().position
    }

    pub fn radius(&self) -> f32 {
        self.0.get().radius
    }

    pub fn move_to(&self, position: Vec2) {
        let mut state = self.0.get();
        state.position = position;
        self.0.set(state);
    }
}
