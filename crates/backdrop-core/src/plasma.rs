//! Plasma field: three soft gradient blobs on periodic paths behind a small
//! swarm of glowing points joined by fading lines.

use crate::constants::*;
use crate::lifecycle::Animation;
use crate::particles::sample;
use crate::spatial::{find_links, Link, SpatialGrid};
use crate::surface::{Rgba, Size, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sin,
    Cos,
}

/// One axis of a blob trajectory: `wave(time * frequency) * amplitude`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub wave: Wave,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Oscillator {
    pub const fn new(wave: Wave, frequency: f32, amplitude: f32) -> Self {
        Self {
            wave,
            frequency,
            amplitude,
        }
    }

    #[inline]
    pub fn offset(&self, time: f32) -> f32 {
        let phase = time * self.frequency;
        let unit = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        unit * self.amplitude
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlasmaBlob {
    pub x: Oscillator,
    pub y: Oscillator,
    pub radius: f32,
    pub color: Rgba,
}

impl PlasmaBlob {
    pub fn center(&self, origin: Vec2, time: f32) -> Vec2 {
        origin + Vec2::new(self.x.offset(time), self.y.offset(time))
    }
}

/// Cyan, purple and pink blobs, drawn in this order.
pub const DEFAULT_BLOBS: [PlasmaBlob; 3] = [
    PlasmaBlob {
        x: Oscillator::new(Wave::Cos, 1.0, 100.0),
        y: Oscillator::new(Wave::Sin, 1.5, 80.0),
        radius: 300.0,
        color: Rgba::new(0, 200, 255, 0.4),
    },
    PlasmaBlob {
        x: Oscillator::new(Wave::Sin, 0.8, 120.0),
        y: Oscillator::new(Wave::Cos, 1.2, 100.0),
        radius: 250.0,
        color: Rgba::new(140, 0, 255, 0.4),
    },
    PlasmaBlob {
        x: Oscillator::new(Wave::Cos, 1.3, 150.0),
        y: Oscillator::new(Wave::Sin, 0.9, 120.0),
        radius: 200.0,
        color: Rgba::new(255, 100, 255, 0.3),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwarmParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl SwarmParticle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, extent: Vec2, params: &PlasmaParams) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * extent.x, rng.gen::<f32>() * extent.y);
        let velocity = Vec2::new(
            sample(rng, -params.speed_max, params.speed_max),
            sample(rng, -params.speed_max, params.speed_max),
        );
        Self {
            position,
            velocity,
            radius: sample(rng, params.radius_min, params.radius_max),
            alpha: sample(rng, params.alpha_min, params.alpha_max),
        }
    }

    /// Move by one velocity step, then reflect each axis that left
    /// `[0, bounds]` while still heading outward.
    ///
    /// The particle may overshoot an edge by up to one step. Only an outward
    /// velocity is flipped, so a particle left outside by a shrinking canvas
    /// heads back in instead of jittering in place.
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x > bounds.x && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y > bounds.y && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Opacity of a link of length `distance`: `max_alpha * (1 - d / max)` up to
/// `max_distance`, nothing beyond.
pub fn link_alpha(distance: f32, max_distance: f32, max_alpha: f32) -> Option<f32> {
    if !(max_distance > 0.0) || !(distance <= max_distance) {
        return None;
    }
    Some(max_alpha * (1.0 - distance / max_distance))
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlasmaParams {
    pub swarm_size: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub speed_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub swarm_color: Rgba,
    pub time_step: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub link_width: f32,
    pub link_color: Rgba,
    pub blobs: Vec<PlasmaBlob>,
    /// Scatter a fresh swarm on every resize instead of keeping the pool
    /// seeded at mount.
    pub reseed_on_resize: bool,
}

impl Default for PlasmaParams {
    fn default() -> Self {
        Self {
            swarm_size: SWARM_SIZE,
            radius_min: SWARM_RADIUS_MIN,
            radius_max: SWARM_RADIUS_MAX,
            speed_max: SWARM_SPEED_MAX,
            alpha_min: SWARM_ALPHA_MIN,
            alpha_max: SWARM_ALPHA_MAX,
            swarm_color: SWARM_COLOR,
            time_step: PLASMA_TIME_STEP,
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_width: LINK_WIDTH,
            link_color: LINK_COLOR,
            blobs: DEFAULT_BLOBS.to_vec(),
            reseed_on_resize: false,
        }
    }
}

pub struct PlasmaField<R = StdRng> {
    pub params: PlasmaParams,
    time: f32,
    swarm: Vec<SwarmParticle>,
    seeded: bool,
    size: Size,
    rng: R,
    grid: SpatialGrid,
    positions: Vec<Vec2>,
    links: Vec<Link>,
}

impl PlasmaField<StdRng> {
    pub fn with_entropy(params: PlasmaParams) -> Self {
        Self::new(params, StdRng::from_entropy())
    }
}

impl<R: Rng> PlasmaField<R> {
    pub fn new(params: PlasmaParams, rng: R) -> Self {
        let grid = SpatialGrid::new(params.link_distance);
        Self {
            params,
            time: 0.0,
            swarm: Vec::new(),
            seeded: false,
            size: Size::default(),
            rng,
            grid,
            positions: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Scatter a new pool over the current size.
    pub fn seed_swarm(&mut self) {
        let extent = self.size.extent();
        let params = &self.params;
        let rng = &mut self.rng;
        self.swarm = (0..params.swarm_size)
            .map(|_| SwarmParticle::spawn(&mut *rng, extent, params))
            .collect();
        self.seeded = true;
        log::debug!(
            "[plasma] seeded {} swarm particles for {}x{}",
            self.swarm.len(),
            self.size.width,
            self.size.height
        );
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn swarm(&self) -> &[SwarmParticle] {
        &self.swarm
    }

    pub fn swarm_mut(&mut self) -> &mut [SwarmParticle] {
        &mut self.swarm
    }

    /// Links found during the last frame.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn blob_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        let origin = self.size.center();
        let time = self.time;
        self.params.blobs.iter().map(move |b| b.center(origin, time))
    }
}

impl<R: Rng> Animation for PlasmaField<R> {
    fn resize(&mut self, size: Size) {
        self.size = size;
        if !self.seeded || self.params.reseed_on_resize {
            self.seed_swarm();
        }
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.time += self.params.time_step;
        surface.clear(self.size);

        let origin = self.size.center();
        for blob in &self.params.blobs {
            surface.fill_glow(blob.center(origin, self.time), blob.radius, blob.color);
        }

        let bounds = self.size.extent();
        let swarm_color = self.params.swarm_color;
        for p in &mut self.swarm {
            p.advance(bounds);
            surface.fill_circle(p.position, p.radius, swarm_color.with_alpha(p.alpha));
        }

        self.positions.clear();
        self.positions.extend(self.swarm.iter().map(|p| p.position));
        find_links(
            &self.positions,
            self.params.link_distance,
            &mut self.grid,
            &mut self.links,
        );
        for link in &self.links {
            if let Some(alpha) = link_alpha(
                link.distance,
                self.params.link_distance,
                self.params.link_max_alpha,
            ) {
                surface.stroke_line(
                    self.positions[link.a],
                    self.positions[link.b],
                    self.params.link_width,
                    self.params.link_color.with_alpha(alpha),
                );
            }
        }
    }
}
