//! Round-trip tests: synthetic decay stacks pushed through the phasor
//! transform, checked against the theoretical lifetime loci.

use approx::assert_abs_diff_eq;
use corrophasor::{
    build_time_axis, lifetime_loci, make_synthetic_flim, phasor_components,
};

const LASER_FREQUENCY_MHZ : f64 = 80.0;

/// The transform of a finely sampled monoexponential decay should land
/// on the continuous-model locus point. The tolerance covers the
/// discretization error, which shrinks with the sample count.
#[test]
fn synthetic_phasors_land_on_the_lifetime_loci() {
    let lifetimes = [0.5, 1.0, 2.0, 4.0];
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 4096).unwrap();
    let stack = make_synthetic_flim(&time_axis.view(), &[1.0], &lifetimes).unwrap();

    let phasors = phasor_components(&stack.view(), 1).unwrap();
    let loci = lifetime_loci(&lifetimes, LASER_FREQUENCY_MHZ).unwrap();

    for (pixel, locus) in loci.iter().enumerate() {
        assert_abs_diff_eq!(phasors.g[[0, pixel]], locus.g, epsilon = 5e-3);
        assert_abs_diff_eq!(phasors.s[[0, pixel]], locus.s, epsilon = 5e-3);
    }
}

/// Extracting harmonic `h` is equivalent to measuring at `h` times the
/// laser frequency, so harmonic 2 should land on the loci computed for
/// a doubled frequency.
#[test]
fn second_harmonic_matches_the_doubled_frequency_loci() {
    let lifetimes = [1.0, 2.0, 4.0];
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 4096).unwrap();
    let stack = make_synthetic_flim(&time_axis.view(), &[1.0], &lifetimes).unwrap();

    let phasors = phasor_components(&stack.view(), 2).unwrap();
    let loci = lifetime_loci(&lifetimes, 2.0 * LASER_FREQUENCY_MHZ).unwrap();

    for (pixel, locus) in loci.iter().enumerate() {
        assert_abs_diff_eq!(phasors.g[[0, pixel]], locus.g, epsilon = 5e-3);
        assert_abs_diff_eq!(phasors.s[[0, pixel]], locus.s, epsilon = 5e-3);
    }
}

/// Amplitude scaling cancels in the normalization: the phasor is a
/// property of the lifetime alone.
#[test]
fn phasors_are_amplitude_invariant() {
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 512).unwrap();
    let dim = make_synthetic_flim(&time_axis.view(), &[0.01], &[2.5]).unwrap();
    let bright = make_synthetic_flim(&time_axis.view(), &[1e4], &[2.5]).unwrap();

    let dim_phasors = phasor_components(&dim.view(), 1).unwrap();
    let bright_phasors = phasor_components(&bright.view(), 1).unwrap();

    assert_abs_diff_eq!(
        dim_phasors.g[[0, 0]], bright_phasors.g[[0, 0]], epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        dim_phasors.s[[0, 0]], bright_phasors.s[[0, 0]], epsilon = 1e-9
    );
}

/// A dark pixel (zero amplitude) hits the zero-guard and lands at the
/// origin instead of dividing by zero.
#[test]
fn dark_pixels_land_at_the_origin() {
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 256).unwrap();
    let stack = make_synthetic_flim(
        &time_axis.view(), &[0.0, 1.0], &[2.0, 2.0]
    ).unwrap();

    let phasors = phasor_components(&stack.view(), 1).unwrap();

    assert_eq!(phasors.g[[0, 0]], 0.0);
    assert_eq!(phasors.s[[0, 0]], 0.0);
    assert!(phasors.g[[0, 1]].is_finite());
    assert!(phasors.g[[0, 1]] > 0.0);
}
