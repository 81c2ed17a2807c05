//! Poisson goal sampling.

use rand::Rng;

/// Draws a goal count with mean `lambda` using Knuth's multiplication method,
/// capped at `cap`.
///
/// Multiplies uniform draws until the running product drops to `e^-lambda` or
/// below; the number of draws minus one is the sample. Sampling stops early
/// once the cap is reached, since further draws could not change the result.
pub fn sample_goals<R: Rng + ?Sized>(lambda: f64, cap: u8, rng: &mut R) -> u8 {
    let limit = (-lambda.max(0.0)).exp();
    let cap = cap as u32;
    let mut draws: u32 = 0;
    let mut product = 1.0_f64;

    loop {
        draws += 1;
        product *= rng.gen::<f64>();
        if product <= limit || draws > cap {
            break;
        }
    }

    (draws - 1).min(cap) as u8
}
