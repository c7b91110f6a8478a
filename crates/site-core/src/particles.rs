//! Floating polygon particles for the decorative background.
//!
//! Each particle drifts along a heading derived from its own rotation and
//! wraps around the extended viewport (visible area plus overscan) like a
//! torus. Depth only affects drawing (scale and opacity), never motion.

use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Viewport width covered by one particle when sizing the field.
pub const WIDTH_PER_PARTICLE: f32 = 160.0;
pub const MIN_PARTICLES: usize = 8;

pub const DEPTH_RANGE: std::ops::Range<f32> = 0.2..1.4;
pub const SIZE_RANGE: std::ops::Range<f32> = 60.0..220.0;
pub const SPEED_RANGE: std::ops::Range<f32> = 0.1..0.6;
pub const ROTATION_SPEED_RANGE: std::ops::Range<f32> = -0.003..0.003; // radians per tick
pub const SIDES_RANGE: std::ops::RangeInclusive<u32> = 3..=5;
pub const HUE_RANGE: std::ops::Range<i32> = 180..280;

// Vertical drift is damped relative to horizontal
const Y_HEADING_FACTOR: f32 = 0.6;
const Y_SPEED_FACTOR: f32 = 0.6;

/// Number of particles for a viewport `width` pixels wide.
#[inline]
pub fn particle_count(width: f32) -> usize {
    let by_width = (width.max(0.0) / WIDTH_PER_PARTICLE).floor() as usize;
    by_width.max(MIN_PARTICLES)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pseudo depth in `DEPTH_RANGE`; nearer particles are larger and fainter.
    pub depth: f32,
    pub size: f32,
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sides: u32,
    pub hue: i32,
}

impl Particle {
    /// Uniformly random particle placed anywhere inside the extended bounds.
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        let (min, max) = viewport.extended_bounds();
        Self {
            position: Vec2::new(sample(rng, min.x, max.x), sample(rng, min.y, max.y)),
            depth: rng.gen_range(DEPTH_RANGE),
            size: rng.gen_range(SIZE_RANGE),
            speed: rng.gen_range(SPEED_RANGE),
            rotation: rng.gen_range(0.0..TAU),
            rotation_speed: rng.gen_range(ROTATION_SPEED_RANGE),
            sides: rng.gen_range(SIDES_RANGE),
            hue: rng.gen_range(HUE_RANGE),
        }
    }

    /// Advance one display tick, then wrap into the extended bounds.
    pub fn step(&mut self, viewport: Viewport) {
        self.rotation += self.rotation_speed;
        self.position.x += self.rotation.cos() * self.speed;
        self.position.y +=
            (self.rotation * Y_HEADING_FACTOR).sin() * self.speed * Y_SPEED_FACTOR;
        self.wrap(viewport);
    }

    fn wrap(&mut self, viewport: Viewport) {
        let (min, max) = viewport.extended_bounds();
        self.position.x = wrap_axis(self.position.x, min.x, max.x);
        self.position.y = wrap_axis(self.position.y, min.y, max.y);
    }

    /// Maps depth 0.2..1.4 onto scale 0.6..1.6.
    #[inline]
    pub fn perspective_scale(&self) -> f32 {
        0.6 + (self.depth - DEPTH_RANGE.start) / 1.2
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * self.perspective_scale()
    }

    /// Opacity multiplier, inversely proportional to depth.
    #[inline]
    pub fn depth_fade(&self) -> f32 {
        1.0 / self.depth
    }
}

// Crossing one edge teleports to the opposite edge.
#[inline]
fn wrap_axis(v: f32, min: f32, max: f32) -> f32 {
    if v > max {
        min
    } else if v < min {
        max
    } else {
        v
    }
}

// gen_range panics on empty ranges; a zero-sized viewport collapses to a point.
#[inline]
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Fixed set of particles created once per animator.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        let n = particle_count(viewport.width);
        let particles = (0..n).map(|_| Particle::random(rng, viewport)).collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn step(&mut self, viewport: Viewport) {
        for p in &mut self.particles {
            p.step(viewport);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

/// Vertices of a regular polygon; vertex `i` sits at angle `i/sides·2π + rotation`.
pub fn polygon_vertices(center: Vec2, radius: f32, sides: u32, rotation: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = (i as f32 / sides as f32) * TAU + rotation;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
