//! Scalar geometry helpers.
//!
//! Pre: inputs are finite reals. Only `sqrt` validates its domain; the area
//! helpers accept any sign and return the formula's value unchanged.

use nalgebra::Vector2;
use serde::Serialize;

use crate::error::DomainError;

/// Floor, ceiling and nearest integer of a value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Roundings {
    pub floor: f64,
    pub ceil: f64,
    /// Round half to even: 2.5 -> 2, 3.5 -> 4.
    pub nearest: f64,
}

/// Square root; negative and NaN inputs are rejected.
pub fn sqrt(x: f64) -> Result<f64, DomainError> {
    if !(x >= 0.0) {
        return Err(DomainError::NegativeRadicand { value: x });
    }
    Ok(x.sqrt())
}

pub fn roundings(x: f64) -> Roundings {
    Roundings {
        floor: x.floor(),
        ceil: x.ceil(),
        nearest: x.round_ties_even(),
    }
}

/// `π·r²`
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    std::f64::consts::PI * radius.powi(2)
}

/// `base·height/2`
#[inline]
pub fn triangle_area(base: f64, height: f64) -> f64 {
    (base * height) / 2.0
}

/// Length of the hypotenuse for legs `a` and `b`.
/// Post: equals the Euclidean norm of `(a, b)`; never smaller than either |leg|.
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    Vector2::new(a, b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::FLOAT_EPS;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn sqrt_guards_negative_input() {
        assert_eq!(sqrt(16.0), Ok(4.0));
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert!(matches!(
            sqrt(-1.0),
            Err(DomainError::NegativeRadicand { .. })
        ));
        assert!(sqrt(f64::NAN).is_err());
    }

    #[test]
    fn roundings_use_half_to_even() {
        let r = roundings(2.5);
        assert_eq!((r.floor, r.ceil, r.nearest), (2.0, 3.0, 2.0));
        assert_eq!(roundings(3.5).nearest, 4.0);
        let r = roundings(-1.2);
        assert_eq!((r.floor, r.ceil, r.nearest), (-2.0, -1.0, -1.0));
    }

    #[test]
    fn areas_axis_cases() {
        assert!((circle_area(1.0) - std::f64::consts::PI).abs() < FLOAT_EPS);
        assert!((circle_area(2.0) - 4.0 * std::f64::consts::PI).abs() < FLOAT_EPS);
        assert!((triangle_area(3.0, 4.0) - 6.0).abs() < FLOAT_EPS);
        assert!((hypotenuse(3.0, 4.0) - 5.0).abs() < FLOAT_EPS);
    }

    #[test]
    fn hypotenuse_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let a: f64 = rng.gen_range(-100.0..100.0);
            let b: f64 = rng.gen_range(-100.0..100.0);
            let expected = (a * a + b * b).sqrt();
            assert!((hypotenuse(a, b) - expected).abs() < FLOAT_EPS);
        }
    }
}
