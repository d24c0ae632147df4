use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const CONFETTI_COLORS: [&str; 6] = ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd"];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    /// Seconds before this particle starts moving.
    pub delay_s: f64,
    /// Horizontal travel over the burst, in pixels.
    pub drift_x: f64,
}

/// Purely cosmetic layout. A fixed seed keeps it reproducible, and it has no
/// bearing on where the wheel stops.
pub fn scatter(count: usize, width: f64, height: f64, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            delay_s: rng.gen::<f64>() * 0.5,
            drift_x: rng.gen_range(-100.0..100.0),
        })
        .collect()
}
