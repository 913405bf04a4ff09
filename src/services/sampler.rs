use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::noise::{NoiseError, NoiseModel};
use crate::domain::observations::Observations;

/// Draws one throughput value: a uniform pick (with replacement) from the
/// historical observations, disturbed by the noise model. The only state
/// touched is the caller's random source, so one call per increment per trial
/// never couples trials to each other.
pub fn sample_throughput<R: Rng + ?Sized>(
    history: &Observations,
    noise: &NoiseModel,
    rng: &mut R,
) -> Result<f32, NoiseError> {
    let drawn = history.values().choose(rng).copied().unwrap_or(0.0);
    noise.perturb(drawn, rng)
}
