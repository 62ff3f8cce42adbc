//! Explicit start/stop lifecycle for an animated canvas.
//!
//! A [`Runner`] owns one animation, the surface it draws to and the scheduler
//! that calls it back once per display refresh. It has two states: running
//! from [`Runner::start`] until the first [`Runner::stop`], then stopped for
//! good. Dropping a runner stops it.

use crate::error::FieldError;
use crate::surface::{Size, Surface};

/// Something that redraws itself once per frame.
pub trait Animation {
    /// Called at start and on every container resize, after the surface has
    /// already been resized.
    fn resize(&mut self, size: Size);
    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S);
}

/// Opaque id of a pending frame request (the browser's rAF id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-frame callback primitive plus the listeners registered for a mount.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, FieldError>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Detach every listener owned by this scheduler.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Stopped,
}

pub struct Runner<A: Animation, F: Surface, S: FrameScheduler> {
    animation: A,
    surface: F,
    scheduler: S,
    size: Size,
    pending: Option<FrameHandle>,
    state: LifecycleState,
    frames: u64,
}

impl<A: Animation, F: Surface, S: FrameScheduler> Runner<A, F, S> {
    /// Size the surface and the animation, then request the first frame.
    ///
    /// If the first request fails the scheduler's listeners are released
    /// before the error is returned.
    pub fn start(
        mut animation: A,
        mut surface: F,
        mut scheduler: S,
        size: Size,
    ) -> Result<Self, FieldError> {
        surface.resize(size);
        animation.resize(size);
        let first = match scheduler.request_frame() {
            Ok(h) => h,
            Err(e) => {
                scheduler.release();
                return Err(e);
            }
        };
        log::debug!(
            "[lifecycle] started at {}x{}",
            size.width,
            size.height
        );
        Ok(Self {
            animation,
            surface,
            scheduler,
            size,
            pending: Some(first),
            state: LifecycleState::Running,
            frames: 0,
        })
    }

    /// Draw one frame and queue the next. No-op once stopped.
    pub fn tick(&mut self) {
        if self.state == LifecycleState::Stopped {
            return;
        }
        // The handle that fired is spent.
        self.pending = None;
        self.animation.frame(&mut self.surface);
        self.frames += 1;
        match self.scheduler.request_frame() {
            Ok(h) => self.pending = Some(h),
            Err(e) => {
                log::error!("[lifecycle] {}; stopping", e);
                self.stop();
            }
        }
    }

    /// Reset the backing buffer to `size` before the animation sees it.
    pub fn resize(&mut self, size: Size) {
        if self.state == LifecycleState::Stopped {
            return;
        }
        self.size = size;
        self.surface.resize(size);
        self.animation.resize(size);
    }

    /// Cancel the pending frame and release listeners.
    ///
    /// Returns `false` if the runner was already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LifecycleState::Stopped {
            return false;
        }
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
        self.scheduler.release();
        self.state = LifecycleState::Stopped;
        log::debug!("[lifecycle] stopped after {} frames", self.frames);
        true
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<A: Animation, F: Surface, S: FrameScheduler> Drop for Runner<A, F, S> {
    fn drop(&mut self) {
        self.stop();
    }
}
