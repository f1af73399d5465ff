//! Property-based tests for spiral and net invariants using the `proptest` crate.

use proptest::prelude::*;

use spiral_core::perimeter::{AnalyticalMethod, CircularMethod, NumericalMethod, PerimeterMethod};
use spiral_core::{DoubleConicalSpiral, Helix, NetLayout, Ring, SpiralConfig};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Base radii with the outer helix strictly larger than the inner one.
fn arb_radii() -> impl Strategy<Value = (f64, f64)> {
    (1.0f64..30.0, 0.05f64..0.95).prop_map(|(outer, ratio)| (outer, outer * ratio))
}

fn arb_height() -> impl Strategy<Value = f64> {
    1.0f64..50.0
}

/// Whole turn counts, so the flat-circle slice count equals the true turn count.
fn arb_whole_turns() -> impl Strategy<Value = f64> {
    (1u32..16).prop_map(f64::from)
}

fn arb_phase() -> impl Strategy<Value = f64> {
    -std::f64::consts::PI..std::f64::consts::PI
}

fn build(outer: f64, inner: f64, height: f64, turns: f64, phase: f64) -> DoubleConicalSpiral {
    DoubleConicalSpiral::new(SpiralConfig {
        outer_radius: outer,
        inner_radius: inner,
        height,
        num_turns: turns,
        phase_offset: phase,
        ..SpiralConfig::default()
    })
    .expect("strategy only generates valid configurations")
}

// ---------------------------------------------------------------------------
// 1. Radius is exactly R0 at the base and zero at the apex
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn radius_endpoints_exact(
        (outer, inner) in arb_radii(),
        height in arb_height(),
        turns in 0.0f64..20.0,
    ) {
        let s = build(outer, inner, height, turns, 0.0);
        prop_assert_eq!(s.radius(0.0, Helix::Outer), outer);
        prop_assert_eq!(s.radius(0.0, Helix::Inner), inner);
        prop_assert_eq!(s.radius(height, Helix::Outer), 0.0);
        prop_assert_eq!(s.radius(height, Helix::Inner), 0.0);
    }
}

// ---------------------------------------------------------------------------
// 2. Zero phase offset aligns the two helices
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn zero_phase_aligns_helices(
        height in arb_height(),
        turns in 0.0f64..20.0,
        frac in 0.0f64..=1.0,
    ) {
        let s = build(15.0, 5.0, height, turns, 0.0);
        let z = frac * height;
        prop_assert_eq!(s.theta(z, Helix::Inner), s.theta(z, Helix::Outer));
    }
}

// ---------------------------------------------------------------------------
// 3. Flat circles never exceed the true helix length
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn circular_never_exceeds_analytical(
        (outer, inner) in arb_radii(),
        height in arb_height(),
        turns in arb_whole_turns(),
    ) {
        let s = build(outer, inner, height, turns, 0.0);
        let circular = CircularMethod.compute(&s).total;
        let analytical = AnalyticalMethod::default().compute(&s).total;
        prop_assert!(circular <= analytical,
            "circular={} exceeds analytical={}", circular, analytical);
    }
}

// ---------------------------------------------------------------------------
// 4. Denser sampling moves the polyline toward the analytical length
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn numerical_converges_to_analytical(
        (outer, inner) in arb_radii(),
        height in arb_height(),
        turns in 1.0f64..15.0,
    ) {
        let s = build(outer, inner, height, turns, 0.0);
        let analytical = AnalyticalMethod::default().compute(&s).total;
        let coarse = (analytical - NumericalMethod::new(100).compute(&s).total).abs();
        let fine = (analytical - NumericalMethod::new(10_000).compute(&s).total).abs();
        prop_assert!(fine < coarse, "fine={} coarse={}", fine, coarse);
    }
}

// ---------------------------------------------------------------------------
// 5. Phase shifts the inner helix without changing any length
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn phase_does_not_change_lengths(
        (outer, inner) in arb_radii(),
        height in arb_height(),
        turns in 0.0f64..15.0,
        phase in arb_phase(),
    ) {
        let aligned = build(outer, inner, height, turns, 0.0).compare_all_methods(500, 100);
        let shifted = build(outer, inner, height, turns, phase).compare_all_methods(500, 100);
        prop_assert_eq!(aligned.analytical, shifted.analytical);
        prop_assert_eq!(aligned.circular_approximation, shifted.circular_approximation);
        let (a, b) = (aligned.numerical.total, shifted.numerical.total);
        prop_assert!((a - b).abs() <= 1e-10 * a, "numerical {} vs {}", a, b);
    }
}

// ---------------------------------------------------------------------------
// 6. Tighter spacing never shortens the net
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn net_length_grows_as_spacing_shrinks(
        (outer, inner) in arb_radii(),
        coarse in 0.5f64..5.0,
        shrink in 0.1f64..1.0,
        span in 0.0f64..180.0,
        density in 1usize..8,
    ) {
        let rings = [Ring::new(outer, inner), Ring::new(outer * 0.5, inner * 0.5)];
        let wide = NetLayout::new(coarse, span, density)
            .unwrap()
            .net_length(&rings)
            .unwrap();
        let tight = NetLayout::new(coarse * shrink, span, density)
            .unwrap()
            .net_length(&rings)
            .unwrap();
        prop_assert!(tight >= wide * (1.0 - 1e-12), "tight={} wide={}", tight, wide);
    }
}
