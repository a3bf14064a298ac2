// Tuning constants for the particle trail. Tests rely on the decay values
// directly, so keep them in sync with the lifetime math in `particle.rs`.

// Particle lifecycle
pub const DEFAULT_RADIUS: f32 = 10.0;
pub const MIN_ALIVE_RADIUS: f32 = 0.5; // at or below this a particle is recycled
pub const RADIUS_DECAY: f32 = 0.96; // multiplicative shrink per step
pub const DEFAULT_WANDER: f32 = 0.15;
pub const DEFAULT_DRAG: f32 = 0.92;
pub const HEADING_IMPULSE: f32 = 0.1; // per-step push along the current heading
pub const INIT_COLOR: &str = "#fff";

// Spawn-time randomization ranges
pub const SPAWN_RADIUS_MIN: f32 = 3.0;
pub const SPAWN_RADIUS_MAX: f32 = 15.0;
pub const SPAWN_WANDER_MIN: f32 = 0.5;
pub const SPAWN_WANDER_MAX: f32 = 2.0;
pub const SPAWN_DRAG_MIN: f32 = 0.9;
pub const SPAWN_DRAG_MAX: f32 = 0.99;
pub const SPAWN_FORCE_MIN: f32 = 2.0;
pub const SPAWN_FORCE_MAX: f32 = 8.0;

// Spawns per pointer-move event, drawn from [BURST_MIN, BURST_MAX)
pub const BURST_MIN: usize = 2;
pub const BURST_MAX: usize = 5;

// Field defaults
pub const DEFAULT_MAX_PARTICLES: usize = 280;
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#69D2E7", "#A7DBD8", "#E0E4CC", "#F38630", "#FA6900", "#FF4E50", "#F9D423",
];
