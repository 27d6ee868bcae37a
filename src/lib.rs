//! # corrophasor
//!
//! Tools for computing and plotting phasor representations of FLIM
//! (fluorescence lifetime imaging microscopy) data: per-pixel decay
//! curves go in, frequency-domain (G, S) coordinates come out, along
//! with the reference geometry they are read against.
//!
//! ## Example
//!
//! ```
//! use corrophasor::{
//!     build_time_axis, make_synthetic_flim, phasor_components,
//!     lifetime_loci,
//! };
//!
//! // A 80 MHz laser, synthetic decays at 2 ns and 4 ns
//! let time_axis = build_time_axis(80.0, 256).unwrap();
//! let stack = make_synthetic_flim(
//!     &time_axis.view(), &[1.0], &[2.0, 4.0]
//! ).unwrap();
//!
//! // Phasor coordinates at the fundamental harmonic
//! let phasors = phasor_components(&stack.view(), 1).unwrap();
//! assert_eq!(phasors.g.shape(), &[1, 2]);
//!
//! // The theoretical loci the pixels should land near
//! let loci = lifetime_loci(&[2.0, 4.0], 80.0).unwrap();
//! assert_eq!(loci.len(), 2);
//! ```
//!
//! With the `plot` feature enabled, the [`plot`] module draws the
//! semicircle, lifetime markers, and phasor scatter onto a `plotters`
//! chart.

mod data;
mod geometry;
mod utils;

#[cfg(feature = "plot")]
pub mod plot;

pub use utils::CorrophasorError;

pub use data::time::{build_time_axis, laser_period_ns};
pub use data::synthetic::{make_synthetic_flim, monoexp, monoexp_curve};
pub use data::phasor::{
    phasor_components,
    phasor_components_with,
    PhasorArrays,
};
pub use geometry::{
    lifetime_loci,
    lifetime_locus,
    semicircle_locus,
    semicircle_locus_with_samples,
    LifetimeLocus,
    SEMICIRCLE_SAMPLES,
    TAU_RAY_SAMPLES,
};
