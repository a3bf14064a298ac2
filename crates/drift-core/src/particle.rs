use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::constants::{
    DEFAULT_DRAG, DEFAULT_RADIUS, DEFAULT_WANDER, HEADING_IMPULSE, INIT_COLOR, MIN_ALIVE_RADIUS,
    RADIUS_DECAY,
};
use crate::rng::{uniform, uniform_range};
use crate::surface::Surface;

/// A single decaying, drifting point rendered as a filled circle.
///
/// Particles are pooled: a recycled instance is reinitialized in place via
/// [`Particle::init`] and carries nothing across lives beyond its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Wander heading in radians. Independent of the launch direction the
    /// field picks for the initial velocity.
    pub heading: f32,
    pub wander: f32,
    pub drag: f32,
    /// CSS color token; reused buffer across lives.
    pub color: String,
    pub alive: bool,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut particle = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: DEFAULT_RADIUS,
            heading: 0.0,
            wander: DEFAULT_WANDER,
            drag: DEFAULT_DRAG,
            color: String::from(INIT_COLOR),
            alive: true,
        };
        particle.init(rng, Vec2::ZERO, DEFAULT_RADIUS);
        particle
    }

    /// Full reset to spawn-time defaults. Idempotent: no field survives from
    /// a prior life.
    pub fn init<R: Rng>(&mut self, rng: &mut R, pos: Vec2, radius: f32) {
        self.alive = true;
        self.radius = radius;
        self.wander = DEFAULT_WANDER;
        self.heading = uniform(rng, TAU);
        self.drag = DEFAULT_DRAG;
        self.color.clear();
        self.color.push_str(INIT_COLOR);
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    /// Advance one simulation step.
    ///
    /// Sub-step order matters: drag is applied before the wander impulse, so
    /// velocity never fully decays while wander keeps injecting motion, and
    /// radius shrinkage is independent of velocity, giving a fixed-ratio
    /// lifetime regardless of spawn force.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.pos += self.vel;
        self.vel *= self.drag;
        self.heading += uniform_range(rng, -0.5, 0.5) * self.wander;
        self.vel += Vec2::new(self.heading.sin(), self.heading.cos()) * HEADING_IMPULSE;
        self.radius *= RADIUS_DECAY;
        self.alive = self.radius > MIN_ALIVE_RADIUS;
    }

    /// Render only; never mutates particle state.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.radius, &self.color);
    }
}
