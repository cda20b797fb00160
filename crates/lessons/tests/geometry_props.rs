//! Property checks for the geometry helpers.

use lessons::cfg::FLOAT_EPS;
use lessons::geometry::{circle_area, hypotenuse, roundings, sqrt, triangle_area};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_EPS * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn triangle_area_is_half_the_rectangle(base in 0.0f64..1e6, height in 0.0f64..1e6) {
        prop_assert!(close(triangle_area(base, height), base * height / 2.0));
    }

    #[test]
    fn hypotenuse_dominates_legs(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        let (a, b) = (f64::from(a), f64::from(b));
        let h = hypotenuse(a, b);
        prop_assert!(h >= a.abs().max(b.abs()));
        prop_assert!(close(h * h, a * a + b * b));
    }

    #[test]
    fn sqrt_inverts_square(x in 0.0f64..1e9) {
        let r = sqrt(x * x).unwrap();
        prop_assert!(close(r, x));
    }

    #[test]
    fn negative_radicands_fail(x in -1e9f64..-1e-9) {
        prop_assert!(sqrt(x).is_err());
    }

    #[test]
    fn roundings_bracket_value(x in -1e6f64..1e6) {
        let r = roundings(x);
        prop_assert!(r.floor <= x && x <= r.ceil);
        prop_assert!(r.nearest == r.floor || r.nearest == r.ceil);
        prop_assert!((r.nearest - x).abs() <= 0.5);
    }

    #[test]
    fn circle_area_scales_quadratically(r in 0.0f64..1e3) {
        prop_assert!(close(circle_area(2.0 * r), 4.0 * circle_area(r)));
    }
}
