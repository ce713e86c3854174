//! Randomness sources and normal variate batches

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// A source of uniform variates in `[0, 1)`.
///
/// Every [`rand::RngCore`] is a source, so `rand::thread_rng()` works for
/// interactive use and [`seeded_source`] gives reproducible clouds.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic source for reproducible runs
pub fn seeded_source(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw a uniform value in `(0, 1)`, redrawing exact zeros so `ln` stays finite
fn nonzero_uniform<S: RandomSource + ?Sized>(source: &mut S) -> f64 {
    loop {
        let u = source.next_uniform();
        if u != 0.0 {
            return u;
        }
    }
}

/// Generate `size` standard normal variates with the Box–Muller transform.
///
/// Each pair of uniforms `(u, v)` yields `r·cos(2πv)` followed by
/// `r·sin(2πv)` with `r = sqrt(-2 ln u)`. For odd sizes the last sine value
/// is dropped.
pub fn normal_batch<S: RandomSource + ?Sized>(source: &mut S, size: usize) -> Vec<f64> {
    let mut normals = Vec::with_capacity(size);
    while normals.len() < size {
        let u = nonzero_uniform(source);
        let v = nonzero_uniform(source);
        let r = (-2.0 * u.ln()).sqrt();
        let (s, c) = (2.0 * PI * v).sin_cos();
        normals.push(r * c);
        if normals.len() < size {
            normals.push(r * s);
        }
    }
    normals
}
