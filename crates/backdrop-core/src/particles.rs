//! Particle field: ambient dots pushed away by the pointer that drift back to
//! where they were spawned.

use crate::constants::*;
use crate::input::SharedPointer;
use crate::lifecycle::Animation;
use crate::surface::{Rgba, Size, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Where the particle relaxes to when the pointer is out of reach.
    pub rest: Vec2,
    pub radius: f32,
    /// Multiplier on the repulsion this particle receives.
    pub density: f32,
}

impl Particle {
    pub fn new(rest: Vec2, radius: f32, density: f32) -> Self {
        Self {
            position: rest,
            rest,
            radius,
            density,
        }
    }

    /// Advance one frame: repel from `pointer` when inside `reach`, otherwise
    /// recover `restore_fraction` of the offset from the rest position.
    pub fn step(&mut self, pointer: Vec2, reach: f32, restore_fraction: f32) {
        self.position = match repulsion(self.position, pointer, reach, self.density) {
            Some(push) => self.position + push,
            None => restore(self.position, self.rest, restore_fraction),
        };
    }
}

/// Displacement for a particle at `position`, or `None` when the pointer is at
/// or beyond `reach`.
///
/// The push points away from the pointer with magnitude
/// `(reach - d) / reach * density`. A pointer sitting exactly on the particle
/// has no direction, so the particle is pushed along +x at full strength.
pub fn repulsion(position: Vec2, pointer: Vec2, reach: f32, density: f32) -> Option<Vec2> {
    if !(reach > 0.0) {
        return None;
    }
    let away = position - pointer;
    let distance = away.length();
    // NaN distances fall through to the restoring branch
    if !(distance < reach) {
        return None;
    }
    let direction = if distance > COINCIDENT_EPSILON {
        away / distance
    } else {
        Vec2::X
    };
    let force = (reach - distance) / reach;
    Some(direction * force * density)
}

#[inline]
pub fn restore(position: Vec2, rest: Vec2, fraction: f32) -> Vec2 {
    position + (rest - position) * fraction
}

/// floor(W×H / quota); zero for an empty canvas or a non-positive quota.
pub fn particle_count(size: Size, area_per_particle: f32) -> usize {
    if !(area_per_particle > 0.0) {
        return 0;
    }
    (size.area() as f64 / area_per_particle as f64).floor().max(0.0) as usize
}

/// Uniform sample in `[min, max)`; never panics on an empty range.
#[inline]
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldParams {
    pub area_per_particle: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub density_min: f32,
    pub density_max: f32,
    pub restore_fraction: f32,
    pub color: Rgba,
}

impl Default for ParticleFieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: PARTICLE_AREA_QUOTA,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            density_min: PARTICLE_DENSITY_MIN,
            density_max: PARTICLE_DENSITY_MAX,
            restore_fraction: RESTORE_FRACTION,
            color: PARTICLE_COLOR,
        }
    }
}

pub struct ParticleField<R = StdRng> {
    pub params: ParticleFieldParams,
    particles: Vec<Particle>,
    pointer: SharedPointer,
    size: Size,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn with_entropy(params: ParticleFieldParams, pointer: SharedPointer) -> Self {
        Self::new(params, pointer, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Empty field; particles appear on the first [`rebuild`](Self::rebuild).
    pub fn new(params: ParticleFieldParams, pointer: SharedPointer, rng: R) -> Self {
        Self {
            params,
            particles: Vec::new(),
            pointer,
            size: Size::default(),
            rng,
        }
    }

    /// Throw away every particle and scatter a fresh set over `size`.
    pub fn rebuild(&mut self, size: Size) {
        self.size = size;
        let count = particle_count(size, self.params.area_per_particle);
        let extent = size.extent();
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let rest = Vec2::new(
                self.rng.gen::<f32>() * extent.x,
                self.rng.gen::<f32>() * extent.y,
            );
            let radius = sample(&mut self.rng, self.params.radius_min, self.params.radius_max);
            let density = sample(
                &mut self.rng,
                self.params.density_min,
                self.params.density_max,
            );
            self.particles.push(Particle::new(rest, radius, density));
        }
        log::debug!(
            "[particles] rebuilt {} particles for {}x{}",
            count,
            size.width,
            size.height
        );
    }

    /// Step every particle against the current pointer snapshot.
    pub fn update(&mut self) {
        let pointer = self.pointer.get();
        let restore_fraction = self.params.restore_fraction;
        for p in &mut self.particles {
            p.step(pointer.position, pointer.radius, restore_fraction);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.params.color);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &SharedPointer {
        &self.pointer
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl<R: Rng> Animation for ParticleField<R> {
    fn resize(&mut self, size: Size) {
        self.rebuild(size);
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size);
        // One pointer snapshot per frame; each particle is moved before it is drawn.
        let pointer = self.pointer.get();
        let restore_fraction = self.params.restore_fraction;
        let color = self.params.color;
        for p in &mut self.particles {
            p.step(pointer.position, pointer.radius, restore_fraction);
            surface.fill_circle(p.position, p.radius, color);
        }
    }
}
