//! # Synthetic FLIM data
//!
//! Builds small synthetic image stacks from monoexponential decay
//! parameters. Mostly useful for validating the phasor transform against
//! decays whose lifetimes are known exactly.

use itertools::izip;
use ndarray::prelude::*;

use crate::utils::CorrophasorError;

/// The monoexponential decay model: `amplitude * exp(-t / tau)`.
///
/// ## Example
///
/// ```
/// assert_eq!(corrophasor::monoexp(0.0, 2.0, 3.0), 2.0);
/// ```
pub fn monoexp(t : f64, amplitude : f64, tau : f64) -> f64 {
    amplitude * (-t / tau).exp()
}

/// Evaluates the monoexponential model over every sample of a time axis.
pub fn monoexp_curve(
    time_axis : &ArrayView1<f64>,
    amplitude : f64,
    tau : f64
) -> Array1<f64> {
    time_axis.mapv(|t| monoexp(t, amplitude, tau))
}

/// Builds a synthetic FLIM image stack, one pixel per
/// (amplitude, lifetime) pair.
///
/// The stack is `(time, 1, n_pairs)`-shaped -- one pixel tall, one column
/// per pair -- with each decay curve running along the first axis. A
/// single amplitude paired with several lifetimes is broadcast to every
/// lifetime; any other length mismatch is an error, never a silent
/// truncation.
///
/// ## Arguments
///
/// * `time_axis` - Sample times (in ns) shared by every decay curve
///
/// * `amplitudes` - Peak amplitude of each decay component. A single
/// amplitude broadcasts across all lifetimes
///
/// * `lifetimes` - Decay lifetime (in ns) of each component, each > 0
///
/// ## Example
///
/// ```
/// use corrophasor::{build_time_axis, make_synthetic_flim};
///
/// let time_axis = build_time_axis(80.0, 100).unwrap();
/// // One amplitude, two lifetimes -> a two-pixel image
/// let stack = make_synthetic_flim(
///     &time_axis.view(), &[1.0], &[2.0, 4.0]
/// ).unwrap();
///
/// assert_eq!(stack.shape(), &[100, 1, 2]);
/// ```
pub fn make_synthetic_flim(
    time_axis : &ArrayView1<f64>,
    amplitudes : &[f64],
    lifetimes : &[f64],
) -> Result<Array3<f64>, CorrophasorError> {
    if time_axis.is_empty() {
        return Err(CorrophasorError::invalid_argument(
            "time_axis",
            "time axis has no samples",
        ));
    }
    if lifetimes.is_empty() {
        return Err(CorrophasorError::invalid_argument(
            "lifetimes",
            "at least one decay component is required",
        ));
    }
    if let Some(&tau) = lifetimes.iter().find(|&&tau| !(tau > 0.0)) {
        return Err(CorrophasorError::invalid_argument(
            "lifetimes",
            format!("decay lifetime must be > 0 ns (got {})", tau),
        ));
    }

    let amplitudes : Vec<f64> = match (amplitudes.len(), lifetimes.len()) {
        (1, n) if n > 1 => vec![amplitudes[0]; n],
        (a, n) if a == n => amplitudes.to_vec(),
        (a, n) => {
            return Err(CorrophasorError::invalid_argument(
                "amplitudes",
                format!("{} amplitudes cannot be paired with {} lifetimes", a, n),
            ))
        }
    };

    let mut stack = Array3::<f64>::zeros((time_axis.len(), 1, lifetimes.len()));
    izip!(&amplitudes, lifetimes).enumerate()
        .for_each(|(pixel, (&amplitude, &tau))| {
            stack.slice_mut(s![.., 0, pixel])
                .assign(&monoexp_curve(time_axis, amplitude, tau));
        });

    Ok(stack)
}
