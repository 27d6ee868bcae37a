//! # Reference geometry
//!
//! The universal semicircle and the theoretical single-exponential
//! lifetime loci that phasor plots are read against. Pure geometry:
//! nothing in this module touches decay data or a drawing surface.

use std::f64::consts::PI;

use ndarray::prelude::*;

use crate::utils::CorrophasorError;

/// Number of samples the default semicircle is traced with.
pub const SEMICIRCLE_SAMPLES : usize = 180;

/// Number of points on the origin ray drawn for each lifetime.
pub const TAU_RAY_SAMPLES : usize = 50;

/// Traces the universal semicircle with the default sample count.
///
/// Every physically valid single-exponential phasor lies on this arc,
/// which runs from (1, 0) (lifetime -> 0) to (0, 0) (lifetime -> inf).
///
/// ## Example
///
/// ```
/// let (g, s) = corrophasor::semicircle_locus();
///
/// assert_eq!(g.len(), 180);
/// assert!(s.iter().all(|&y| y >= 0.0));
/// ```
pub fn semicircle_locus() -> (Array1<f64>, Array1<f64>) {
    semicircle_locus_with_samples(SEMICIRCLE_SAMPLES)
}

/// Traces the universal semicircle: `x = (cos t + 1) / 2`,
/// `y = sin t / 2` for `t` sampled uniformly over `[0, pi]`.
///
/// ## Arguments
///
/// * `n_samples` - Number of points on the arc (a rendering density;
/// zero yields empty arrays)
pub fn semicircle_locus_with_samples(
    n_samples : usize
) -> (Array1<f64>, Array1<f64>) {
    let angles = Array1::linspace(0.0, PI, n_samples);
    (
        angles.mapv(|theta| (theta.cos() + 1.0) / 2.0),
        angles.mapv(|theta| theta.sin() / 2.0),
    )
}

/// The theoretical phasor locus of one single-exponential lifetime: the
/// point it occupies on the universal semicircle, and a ray from the
/// origin out to that point for visual reference.
#[derive(Debug, Clone)]
pub struct LifetimeLocus {
    /// Lifetime this locus belongs to (in ns)
    pub lifetime_ns : f64,
    /// G coordinate of the point on the semicircle
    pub g : f64,
    /// S coordinate of the point on the semicircle
    pub s : f64,
    /// G coordinates of the origin ray
    pub ray_g : Array1<f64>,
    /// S coordinates of the origin ray
    pub ray_s : Array1<f64>,
}

/// Computes the theoretical phasor locus of each lifetime at a given
/// laser frequency.
///
/// With angular frequency `w = 2 pi * frequency_mhz * 1e6` and the
/// lifetime converted to seconds, the point is `G = 1 / (1 + (w tau)^2)`,
/// `S = (w tau) / (1 + (w tau)^2)`, which sits exactly on the universal
/// semicircle. Each locus also carries a 50-point segment from the
/// origin to the point.
///
/// ## Arguments
///
/// * `lifetimes_ns` - Lifetimes to mark (in ns), each > 0
///
/// * `frequency_mhz` - Repetition rate of the pulsed laser (in MHz)
///
/// ## Example
///
/// ```
/// let loci = corrophasor::lifetime_loci(&[2.0, 4.0], 80.0).unwrap();
///
/// // Both points are on the semicircle centered at (0.5, 0)
/// for locus in &loci {
///     let radius2 = (locus.g - 0.5).powi(2) + locus.s.powi(2);
///     assert!((radius2 - 0.25).abs() < 1e-12);
/// }
/// ```
pub fn lifetime_loci(
    lifetimes_ns : &[f64],
    frequency_mhz : f64,
) -> Result<Vec<LifetimeLocus>, CorrophasorError> {
    if !(frequency_mhz > 0.0) {
        return Err(CorrophasorError::invalid_argument(
            "frequency_mhz",
            format!("laser frequency must be > 0 MHz (got {})", frequency_mhz),
        ));
    }
    let omega = 2.0 * PI * frequency_mhz * 1e6;

    lifetimes_ns.iter().map(|&lifetime_ns| {
        if !(lifetime_ns > 0.0) {
            return Err(CorrophasorError::invalid_argument(
                "lifetimes_ns",
                format!("lifetime must be > 0 ns (got {})", lifetime_ns),
            ));
        }
        let wt = omega * (lifetime_ns * 1e-9);
        let g = 1.0 / (1.0 + wt * wt);
        let s = wt / (1.0 + wt * wt);
        let ray_g = Array1::linspace(0.0, g, TAU_RAY_SAMPLES);
        let ray_s = ray_g.mapv(|x| x * s / g);
        Ok(LifetimeLocus { lifetime_ns, g, s, ray_g, ray_s })
    }).collect()
}

/// Single-lifetime convenience over [`lifetime_loci`].
pub fn lifetime_locus(
    lifetime_ns : f64,
    frequency_mhz : f64,
) -> Result<LifetimeLocus, CorrophasorError> {
    Ok(
        lifetime_loci(std::slice::from_ref(&lifetime_ns), frequency_mhz)?
            .remove(0)
    )
}
