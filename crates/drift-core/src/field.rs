use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::constants::{
    BURST_MAX, BURST_MIN, DEFAULT_MAX_PARTICLES, DEFAULT_PALETTE, SPAWN_DRAG_MAX, SPAWN_DRAG_MIN,
    SPAWN_FORCE_MAX, SPAWN_FORCE_MIN, SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN, SPAWN_WANDER_MAX,
    SPAWN_WANDER_MIN,
};
use crate::particle::Particle;
use crate::rng::{pick_one, uniform, uniform_int_range, uniform_range};
use crate::surface::{CompositeMode, Surface};

/// Construction options for a [`ParticleField`].
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub colors: Vec<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

/// Rejected configuration; the field never silently substitutes defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("color palette must not be empty")]
    EmptyPalette,
    #[error("max_particles must be positive")]
    ZeroCapacity,
}

/// Bounded particle arena plus the per-frame update/draw cycle.
///
/// `slots` holds every particle ever constructed and grows to at most
/// `capacity + 1` entries (the extra slot covers a spawn arriving while the
/// field is full). `active` lists slot indices in spawn order (front =
/// oldest); `free` lists slots awaiting reuse. Every slot index is in
/// exactly one of the two sets, so nothing is ever lost or duplicated.
pub struct ParticleField {
    slots: Vec<Particle>,
    active: VecDeque<usize>,
    free: Vec<usize>,
    capacity: usize,
    palette: Vec<String>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        if config.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if config.max_particles == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        log::debug!(
            "field created: capacity={} palette={} colors",
            config.max_particles,
            config.colors.len()
        );
        Ok(Self {
            slots: Vec::new(),
            active: VecDeque::new(),
            free: Vec::new(),
            capacity: config.max_particles,
            palette: config.colors,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn pool_len(&self) -> usize {
        self.free.len()
    }

    /// Total particles ever constructed; never exceeds `capacity + 1`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Live particles in spawn order (oldest first).
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.active.iter().map(|&i| &self.slots[i])
    }

    /// Recycled particles awaiting reuse, in no particular order.
    pub fn pooled(&self) -> impl Iterator<Item = &Particle> {
        self.free.iter().map(|&i| &self.slots[i])
    }

    /// Spawn one particle at `pos` with randomized kinematics.
    ///
    /// Never fails: a free slot is reused when one exists, otherwise a fresh
    /// slot is constructed. If the spawn pushes the field past capacity, the
    /// oldest active particle is evicted into the pool afterwards, intact,
    /// rather than being cannibalized by the spawn that displaced it.
    pub fn spawn(&mut self, pos: Vec2) {
        let slot = match self.free.pop() {
            Some(i) => i,
            None => {
                self.slots.push(Particle::new(&mut self.rng));
                self.slots.len() - 1
            }
        };

        let radius = uniform_range(&mut self.rng, SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX);
        self.slots[slot].init(&mut self.rng, pos, radius);

        let wander = uniform_range(&mut self.rng, SPAWN_WANDER_MIN, SPAWN_WANDER_MAX);
        let drag = uniform_range(&mut self.rng, SPAWN_DRAG_MIN, SPAWN_DRAG_MAX);
        // Launch direction is drawn separately from the wander heading set by
        // init, so a particle's drift is decoupled from its launch.
        let launch = uniform(&mut self.rng, TAU);
        let force = uniform_range(&mut self.rng, SPAWN_FORCE_MIN, SPAWN_FORCE_MAX);
        let color = pick_one(&mut self.rng, &self.palette);

        let particle = &mut self.slots[slot];
        particle.wander = wander;
        particle.drag = drag;
        particle.color.clone_from(color);
        particle.vel = Vec2::new(launch.sin(), launch.cos()) * force;

        self.active.push_back(slot);

        if self.active.len() > self.capacity {
            if let Some(oldest) = self.active.pop_front() {
                self.free.push(oldest);
            }
        }
    }

    /// Spawn a pointer burst: `[BURST_MIN, BURST_MAX)` particles at one
    /// point. The sole pointer-driven entry into the field.
    pub fn spawn_burst(&mut self, pos: Vec2) {
        let count = uniform_int_range(&mut self.rng, BURST_MIN, BURST_MAX);
        for _ in 0..count {
            self.spawn(pos);
        }
    }

    /// One animation frame: clear, switch to additive blending, then walk
    /// the active list newest-to-oldest. Live particles are stepped and
    /// drawn; dead ones are spliced into the free list. The reverse walk
    /// keeps indices of not-yet-visited entries stable during removal.
    pub fn advance(&mut self, surface: &mut impl Surface) {
        surface.clear();
        surface.set_composite(CompositeMode::Lighter);

        for i in (0..self.active.len()).rev() {
            let slot = self.active[i];
            if self.slots[slot].alive {
                self.slots[slot].step(&mut self.rng);
                self.slots[slot].draw(surface);
            } else {
                self.active.remove(i);
                self.free.push(slot);
            }
        }
    }
}
