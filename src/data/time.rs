//! # Time axes
//!
//! Derives the sample-time axis implied by a pulsed laser's repetition
//! rate. All times in this crate are in nanoseconds.

use ndarray::prelude::*;

use crate::utils::CorrophasorError;

/// Period of the laser in nanoseconds -- the width of the time window
/// every decay curve in an acquisition lives inside.
///
/// ## Arguments
///
/// * `frequency_mhz` - Repetition rate of the pulsed laser (in MHz)
///
/// ## Example
///
/// ```
/// assert_eq!(corrophasor::laser_period_ns(80.0).unwrap(), 12.5);
/// ```
pub fn laser_period_ns(frequency_mhz : f64) -> Result<f64, CorrophasorError> {
    // `!(x > 0.0)` also rejects NaN, which `x <= 0.0` would let through
    if !(frequency_mhz > 0.0) {
        return Err(CorrophasorError::invalid_argument(
            "frequency_mhz",
            format!("laser frequency must be > 0 MHz (got {})", frequency_mhz),
        ));
    }
    Ok(1e9 / (frequency_mhz * 1e6))
}

/// Builds the time axis for an acquisition: `n_points` uniformly spaced
/// sample times covering one laser period, starting at zero.
///
/// ## Arguments
///
/// * `frequency_mhz` - Repetition rate of the pulsed laser (in MHz)
///
/// * `n_points` - Number of samples collected between laser pulses
///
/// ## Example
///
/// ```
/// let time_axis = corrophasor::build_time_axis(80.0, 100).unwrap();
///
/// assert_eq!(time_axis.len(), 100);
/// assert_eq!(time_axis[0], 0.0);
/// assert_eq!(time_axis[1], 0.125);
/// ```
pub fn build_time_axis(
    frequency_mhz : f64,
    n_points : usize
) -> Result<Array1<f64>, CorrophasorError> {
    if n_points == 0 {
        return Err(CorrophasorError::invalid_argument(
            "n_points",
            "a time axis needs at least one sample",
        ));
    }
    let time_step = laser_period_ns(frequency_mhz)? / n_points as f64;
    Ok(Array1::from_shape_fn(n_points, |i| i as f64 * time_step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axis_is_uniform_and_starts_at_zero() {
        let axis = build_time_axis(80.0, 100).unwrap();
        assert_eq!(axis.len(), 100);
        assert_eq!(axis[0], 0.0);

        // 80 MHz -> 12.5 ns period -> 0.125 ns steps, ending at 12.375
        axis.windows(2).into_iter().for_each(|pair| {
            assert_abs_diff_eq!(pair[1] - pair[0], 0.125, epsilon = 1e-12);
        });
        assert_abs_diff_eq!(axis[99], 12.375, epsilon = 1e-12);
    }

    #[test]
    fn spacing_matches_the_laser_period() {
        let axis = build_time_axis(40.0, 64).unwrap();
        let expected_step = 1e9 / (40.0 * 1e6 * 64.0);
        assert_abs_diff_eq!(axis[1] - axis[0], expected_step, epsilon = 1e-12);
    }

    #[test]
    fn rejects_nonpositive_frequency() {
        assert!(build_time_axis(0.0, 100).is_err());
        assert!(build_time_axis(-80.0, 100).is_err());
        assert!(build_time_axis(f64::NAN, 100).is_err());
    }

    #[test]
    fn rejects_empty_axis() {
        assert!(build_time_axis(80.0, 0).is_err());
    }
}
