//! Named randomization helpers used by spawn and step logic.

use rand::Rng;

/// Uniform float in `[0, max)`.
#[inline]
pub fn uniform<R: Rng>(rng: &mut R, max: f32) -> f32 {
    rng.gen::<f32>() * max
}

/// Uniform float in `[min, max)`.
#[inline]
pub fn uniform_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Uniform integer in `[min, max)`.
#[inline]
pub fn uniform_int_range<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    rng.gen_range(min..max)
}

/// Uniform element choice. Panics on an empty slice; callers guarantee
/// non-empty input (field construction rejects an empty palette).
#[inline]
pub fn pick_one<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
