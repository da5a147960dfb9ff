use rand::Rng;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Invalid temperature {0}: Metropolis sampling needs a positive, finite temperature")]
    InvalidTemperature(f64),
    #[error("Energy change is not a finite number: {0}")]
    NonFiniteDelta(f64),
    #[error("Cannot choose from an empty candidate list")]
    EmptyCandidates,
}

/// Metropolis criterion.
///
/// Downhill and neutral changes are accepted without consuming randomness. Uphill changes
/// draw one uniform `u` in `[0, 1)` and are accepted iff `u < exp(-delta / temperature)`.
#[instrument(level = "trace", skip(rng))]
pub fn metropolis_accept<R: Rng + ?Sized>(
    delta: f64,
    temperature: f64,
    rng: &mut R,
) -> Result<bool, SamplingError> {
    if !delta.is_finite() {
        return Err(SamplingError::NonFiniteDelta(delta));
    }
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(SamplingError::InvalidTemperature(temperature));
    }
    if delta <= 0.0 {
        return Ok(true);
    }
    Ok(rng.r#gen::<f64>() < (-delta / temperature).exp())
}

/// Uniform index into a candidate list of length `len`.
#[inline]
pub fn choose_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<usize, SamplingError> {
    if len == 0 {
        return Err(SamplingError::EmptyCandidates);
    }
    Ok(rng.gen_range(0..len))
}
