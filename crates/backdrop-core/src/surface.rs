//! Drawing surface abstraction.
//!
//! Renderers only ever talk to a [`Surface`]. The browser crate implements it
//! over `CanvasRenderingContext2d`; [`Recorder`] keeps the commands in memory so
//! a frame can be inspected without a canvas.

use glam::Vec2;
use std::fmt;

/// Backing-buffer dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.extent() * 0.5
    }
}

/// 8-bit colour with a floating point alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    /// Match the backing buffer to `size`. Called before the next draw.
    fn resize(&mut self, size: Size);
    fn clear(&mut self, size: Size);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Filled disc shaded by a radial gradient from `color` at the center to
    /// transparent at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Resize(Size),
    Clear(Size),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Glow {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Surface that records every command it receives.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn glows(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Glow {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Line {
                from, to, color, ..
            } => Some((from, to, color)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn resize(&mut self, size: Size) {
        self.commands.push(DrawCmd::Resize(size));
    }

    fn clear(&mut self, size: Size) {
        self.commands.push(DrawCmd::Clear(size));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCmd::Glow {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }
}
