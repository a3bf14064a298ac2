// Host-side tests for the particle arena: capacity, eviction order, pool
// conservation, and the per-frame command stream.

mod common;

use std::collections::BTreeSet;

use common::{Op, RecordingSurface};
use drift_core::constants::{
    BURST_MAX, BURST_MIN, DEFAULT_MAX_PARTICLES, SPAWN_DRAG_MAX, SPAWN_DRAG_MIN, SPAWN_FORCE_MAX,
    SPAWN_FORCE_MIN, SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN, SPAWN_WANDER_MAX, SPAWN_WANDER_MIN,
};
use drift_core::{CompositeMode, ConfigError, FieldConfig, ParticleField};
use glam::Vec2;

fn small_field(capacity: usize, seed: u64) -> ParticleField {
    let config = FieldConfig {
        max_particles: capacity,
        ..FieldConfig::default()
    };
    ParticleField::new(config, seed).expect("valid config")
}

#[test]
fn default_config_matches_documented_defaults() {
    let config = FieldConfig::default();
    assert_eq!(config.max_particles, DEFAULT_MAX_PARTICLES);
    assert_eq!(config.colors.len(), 7);
    assert!(config.colors.iter().all(|c| c.starts_with('#')));
}

#[test]
fn empty_palette_is_rejected() {
    let config = FieldConfig {
        colors: Vec::new(),
        ..FieldConfig::default()
    };
    assert_eq!(
        ParticleField::new(config, 0).err(),
        Some(ConfigError::EmptyPalette)
    );
}

#[test]
fn zero_capacity_is_rejected() {
    let config = FieldConfig {
        max_particles: 0,
        ..FieldConfig::default()
    };
    assert_eq!(
        ParticleField::new(config, 0).err(),
        Some(ConfigError::ZeroCapacity)
    );
}

#[test]
fn spawn_randomizes_within_documented_ranges() {
    let config = FieldConfig {
        max_particles: 8,
        colors: vec![String::from("#123456")],
    };
    let mut field = ParticleField::new(config, 3).expect("valid config");
    field.spawn_burst(Vec2::ZERO);
    for particle in field.particles() {
        assert!(particle.alive);
        assert_eq!(particle.color, "#123456");
        assert!((SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX).contains(&particle.radius));
        assert!((SPAWN_WANDER_MIN..SPAWN_WANDER_MAX).contains(&particle.wander));
        assert!((SPAWN_DRAG_MIN..SPAWN_DRAG_MAX).contains(&particle.drag));
        // launch velocity is a unit direction scaled by the spawn force
        let speed = particle.vel.length();
        assert!(speed >= SPAWN_FORCE_MIN - 1e-3 && speed < SPAWN_FORCE_MAX + 1e-3);
    }
}

#[test]
fn spawning_past_capacity_evicts_oldest_into_pool() {
    let mut field = small_field(3, 42);
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)] {
        field.spawn(Vec2::new(x, y));
    }

    let positions: Vec<Vec2> = field.particles().map(|p| p.pos).collect();
    assert_eq!(
        positions,
        vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)]
    );

    // the displaced oldest particle sits in the pool untouched
    assert_eq!(field.pool_len(), 1);
    let pooled: Vec<Vec2> = field.pooled().map(|p| p.pos).collect();
    assert_eq!(pooled, vec![Vec2::ZERO]);
}

#[test]
fn eviction_is_fifo_across_repeated_overflow() {
    let mut field = small_field(2, 9);
    for i in 0..6 {
        field.spawn(Vec2::new(i as f32, 0.0));
        assert!(field.active_len() <= field.capacity());
    }
    // survivors are always the two most recent spawns
    let xs: Vec<f32> = field.particles().map(|p| p.pos.x).collect();
    assert_eq!(xs, vec![4.0, 5.0]);
}

#[test]
fn arena_conserves_every_slot() {
    let mut field = small_field(16, 7);
    let mut surface = RecordingSurface::default();
    for round in 0..200 {
        field.spawn_burst(Vec2::new(round as f32, 0.0));
        field.advance(&mut surface);
        assert!(field.active_len() <= field.capacity(), "round {round}");
        assert!(field.slot_count() <= field.capacity() + 1, "round {round}");
        assert_eq!(
            field.active_len() + field.pool_len(),
            field.slot_count(),
            "round {round}"
        );
    }

    // with no further spawns everything decays into the pool
    for _ in 0..200 {
        field.advance(&mut surface);
    }
    assert_eq!(field.active_len(), 0);
    assert_eq!(field.pool_len(), field.slot_count());
}

#[test]
fn pointer_burst_spawns_two_to_four() {
    let mut seen = BTreeSet::new();
    for seed in 0..40 {
        let mut field = small_field(16, seed);
        field.spawn_burst(Vec2::ZERO);
        let count = field.active_len();
        assert!(
            (BURST_MIN..BURST_MAX).contains(&count),
            "seed {seed} spawned {count}"
        );
        seen.insert(count);
    }
    assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn frame_clears_then_sets_additive_mode_before_draws() {
    let mut field = small_field(8, 11);
    field.spawn(Vec2::ZERO);
    field.spawn(Vec2::new(40.0, 40.0));

    let mut surface = RecordingSurface::default();
    field.advance(&mut surface);

    assert_eq!(surface.ops[0], Op::Clear);
    assert_eq!(surface.ops[1], Op::SetComposite(CompositeMode::Lighter));
    assert_eq!(surface.draw_count(), 2);
    assert!(surface.ops[2..]
        .iter()
        .all(|op| matches!(op, Op::FillCircle { .. })));
}

#[test]
fn frame_draws_newest_first() {
    let mut field = small_field(8, 13);
    field.spawn(Vec2::ZERO);
    field.spawn(Vec2::new(100.0, 100.0));

    let mut surface = RecordingSurface::default();
    field.advance(&mut surface);

    let centers: Vec<Vec2> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillCircle { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    assert_eq!(centers.len(), 2);
    // one step of motion moves a particle by at most its launch speed
    assert!(centers[0].distance(Vec2::new(100.0, 100.0)) < 20.0);
    assert!(centers[1].distance(Vec2::ZERO) < 20.0);
}

#[test]
fn dead_particles_are_recycled_not_drawn() {
    let mut field = small_field(4, 17);
    field.spawn(Vec2::ZERO);
    let mut surface = RecordingSurface::default();

    let mut frames = 0;
    while field.active_len() > 0 {
        surface.ops.clear();
        field.advance(&mut surface);
        frames += 1;
        assert!(frames < 200, "particle never expired");
    }

    // the culling frame issues no draw for the dead particle
    assert_eq!(surface.draw_count(), 0);
    assert_eq!(field.pool_len(), field.slot_count());
}
