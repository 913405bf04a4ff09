use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("sigma must be a non-negative number, got {0}")]
    InvalidSigma(f32),
}

/// How a drawn historical value is disturbed before it is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseModel {
    /// Use the drawn value as-is.
    None,
    /// Normal disturbance centered on the drawn value. The result may be
    /// negative; clamping is the caller's concern.
    Gaussian { sigma: f32 },
    /// Normal disturbance resampled until the result is non-negative.
    TruncatedGaussian { sigma: f32 },
}

impl NoiseModel {
    /// Builds a noise model from CLI-level parameters. `sigma == 0` means no
    /// disturbance at all.
    pub fn from_sigma(sigma: f32, truncate: bool) -> Result<Self, NoiseError> {
        if !(sigma >= 0.0) || !sigma.is_finite() {
            return Err(NoiseError::InvalidSigma(sigma));
        }
        if sigma == 0.0 {
            return Ok(NoiseModel::None);
        }
        if truncate {
            Ok(NoiseModel::TruncatedGaussian { sigma })
        } else {
            Ok(NoiseModel::Gaussian { sigma })
        }
    }

    /// Disturbs `value` according to the model.
    pub fn perturb<R: Rng + ?Sized>(&self, value: f32, rng: &mut R) -> Result<f32, NoiseError> {
        match *self {
            NoiseModel::None => Ok(value),
            NoiseModel::Gaussian { sigma } => {
                if sigma == 0.0 {
                    return Ok(value);
                }
                let normal = Normal::new(value as f64, sigma as f64)
                    .map_err(|_| NoiseError::InvalidSigma(sigma))?;
                Ok(normal.sample(rng) as f32)
            }
            NoiseModel::TruncatedGaussian { sigma } => {
                if sigma == 0.0 {
                    return Ok(value);
                }
                let normal = Normal::new(value as f64, sigma as f64)
                    .map_err(|_| NoiseError::InvalidSigma(sigma))?;
                // The mean is non-negative, so at least half of all draws are
                // accepted and the loop terminates almost surely.
                loop {
                    let sample = normal.sample(rng) as f32;
                    if sample >= 0.0 {
                        return Ok(sample);
                    }
                }
            }
        }
    }
}
