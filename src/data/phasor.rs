//! # Phasor transform
//!
//! Converts a stack of per-pixel decay curves into phasor coordinates
//! (G, S) by pulling a single harmonic out of a discrete Fourier
//! transform taken along the time axis. No windowing, no detrending,
//! no averaging -- one unmodified harmonic extraction per call.

use itertools::izip;
use ndarray::prelude::*;
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::utils::CorrophasorError;

/// Pixelwise phasor coordinates, plus the total intensity each pixel was
/// normalized by.
///
/// `g` and `s` are co-indexed with the pixel grid of the stack they came
/// from (the time axis removed). `intensity` is the DC term of each
/// pixel's spectrum -- the sum of its decay curve -- before any
/// zero-guarding is applied.
#[derive(Debug, Clone)]
pub struct PhasorArrays {
    pub g : Array2<f64>,
    pub s : Array2<f64>,
    pub intensity : Array2<f64>,
}

/// Computes pixelwise phasor coordinates from a FLIM image stack.
///
/// Each pixel's decay curve (axis 0 of the stack) is Fourier-transformed
/// and the requested harmonic is normalized by the pixel's DC term:
/// `G = re(bin[harmonic]) / dc`, `S = |im(bin[harmonic])| / dc`. The
/// absolute value on the imaginary part folds every result into the
/// upper half-plane; the sign is discarded.
///
/// A pixel whose decay curve sums to exactly zero is divided by 1
/// instead of 0, so an all-dark pixel lands at (0, 0) rather than NaN.
/// The raw DC term is still reported unguarded in the result.
///
/// ## Arguments
///
/// * `flim_data` - Image stack indexed `(time, row, column)`
///
/// * `harmonic` - Which Fourier bin to extract: 1 for the fundamental,
/// 2+ for overtones. Must be below the time-axis length
///
/// ## Example
///
/// ```
/// use corrophasor::{build_time_axis, make_synthetic_flim, phasor_components};
///
/// let time_axis = build_time_axis(80.0, 256).unwrap();
/// let stack = make_synthetic_flim(
///     &time_axis.view(), &[1.0], &[2.0, 4.0]
/// ).unwrap();
///
/// let phasors = phasor_components(&stack.view(), 1).unwrap();
///
/// assert_eq!(phasors.g.shape(), &[1, 2]);
/// // Shorter lifetimes sit further right on the semicircle
/// assert!(phasors.g[[0, 0]] > phasors.g[[0, 1]]);
/// ```
pub fn phasor_components(
    flim_data : &ArrayView3<f64>,
    harmonic : usize,
) -> Result<PhasorArrays, CorrophasorError> {
    let n_time = flim_data.len_of(Axis(0));
    validate_harmonic(n_time, harmonic)?;

    let fft = FftPlanner::new().plan_fft_forward(n_time);
    phasor_components_with(flim_data, harmonic, |curve| fft.process(curve))
}

/// [`phasor_components`] with the Fourier transform supplied by the
/// caller, for use with a different DFT backend (or a deliberately naive
/// one when cross-checking results).
///
/// `transform` must replace the buffer with its unnormalized forward
/// DFT: bin 0 equal to the sum of all samples, bin `k` the complex
/// amplitude at the `k`-th harmonic.
pub fn phasor_components_with<F>(
    flim_data : &ArrayView3<f64>,
    harmonic : usize,
    mut transform : F,
) -> Result<PhasorArrays, CorrophasorError>
where
    F : FnMut(&mut [Complex<f64>]),
{
    let n_time = flim_data.len_of(Axis(0));
    validate_harmonic(n_time, harmonic)?;

    let shape = (flim_data.len_of(Axis(1)), flim_data.len_of(Axis(2)));
    let mut g = Array2::<f64>::zeros(shape);
    let mut s = Array2::<f64>::zeros(shape);
    let mut intensity = Array2::<f64>::zeros(shape);

    let mut spectrum = vec![Complex::new(0.0, 0.0); n_time];

    izip!(
        flim_data.lanes(Axis(0)),
        g.iter_mut(),
        s.iter_mut(),
        intensity.iter_mut()
    ).for_each(|(curve, g_px, s_px, dc_px)| {
        izip!(curve.iter(), spectrum.iter_mut())
            .for_each(|(&value, bin)| *bin = Complex::new(value, 0.0));
        transform(spectrum.as_mut_slice());

        let dc = spectrum[0].re;
        // All-zero pixels divide by 1 and come out at (0, 0), not NaN
        let denominator = if dc == 0.0 { 1.0 } else { dc };
        *g_px = spectrum[harmonic].re / denominator;
        *s_px = spectrum[harmonic].im.abs() / denominator;
        *dc_px = dc;
    });

    Ok(PhasorArrays { g, s, intensity })
}

fn validate_harmonic(
    n_time : usize,
    harmonic : usize
) -> Result<(), CorrophasorError> {
    if n_time == 0 {
        return Err(CorrophasorError::invalid_argument(
            "flim_data",
            "image stack has no samples along the time axis",
        ));
    }
    if harmonic == 0 {
        return Err(CorrophasorError::invalid_argument(
            "harmonic",
            "harmonic must be at least 1 (the fundamental)",
        ));
    }
    if harmonic >= n_time {
        return Err(CorrophasorError::invalid_argument(
            "harmonic",
            format!(
                "harmonic {} is out of range for a {}-sample time axis",
                harmonic, n_time
            ),
        ));
    }
    Ok(())
}
