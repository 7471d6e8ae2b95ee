//! Numeric primitives shared by the solar, lunar and event modules.
//!
//! Angles are in degrees throughout. Trigonometric helpers take and return
//! degrees so the coefficient tables can be used exactly as published.
#[allow(unused_imports)]
use core_maths::CoreFloat;

use core::ops::{Add, Rem};

/// Bisection stops once the bracket is narrower than this many days (under a second).
pub(crate) const ANGULAR_TOLERANCE: f64 = 1e-5;

/// Hard cap on bisection steps; a 4-day bracket converges in about 19.
const MAX_BISECTIONS: u32 = 64;

/// Hard cap on the steps a linear search may take from its starting estimate.
const MAX_LINEAR_STEPS: u32 = 64;

/// Computes the floored modulo operation.
///
/// Unlike Rust's `%` operator which truncates toward zero, the result always
/// carries the sign of `m`. Works for integers and floats alike.
///
/// # Arguments
///
/// * `x` - The dividend
/// * `m` - The modulus
///
/// # Examples
///
/// ```
/// use lunisolar::math::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(-7_i64, 3), 2);
/// assert_eq!(floored_mod(7_i64, -3), -2);
/// ```
pub fn floored_mod<T>(x: T, m: T) -> T
where
    T: Copy + Add<Output = T> + Rem<Output = T>,
{
    ((x % m) + m) % m
}

/// Interval modulo: shifts `x` into `[a, b)`. Returns `x` unchanged when `a == b`.
pub fn mod3(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        x
    } else {
        a + floored_mod(x - a, b - a)
    }
}

/// Normalizes an angle in degrees to the range [0, 360).
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    floored_mod(degrees, 360.0)
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered lowest degree first, `[a₀, a₁, a₂, ...]` for
/// `a₀ + x(a₁ + x(a₂ + ...))`. An empty slice evaluates to zero.
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result.mul_add(x, coeff);
    }
    result
}

/// Sums `term` over every row of a periodic-series table.
///
/// Each row holds the i-th element of every coefficient list (amplitude and
/// argument multipliers), so the lists are equal-length by construction.
pub fn sigma<const N: usize>(rows: &[[f64; N]], term: impl Fn(&[f64; N]) -> f64) -> f64 {
    rows.iter().map(term).sum()
}

/// Direction a [`linear_search`] steps its counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Steps an integer counter by one from `start` until `pred` holds.
///
/// Returns the first index (in stepping order) for which `pred` is true,
/// or `None` if the predicate does not flip within a bounded number of
/// steps. Callers pass an estimate that is already within a step or two of
/// the boundary.
pub fn linear_search(start: i64, direction: Direction, pred: impl Fn(i64) -> bool) -> Option<i64> {
    let step = match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    };
    let mut k = start;
    for _ in 0..MAX_LINEAR_STEPS {
        if pred(k) {
            return Some(k);
        }
        k += step;
    }
    None
}

/// First `k >= start` for which `pred(k)` holds.
pub fn next(start: i64, pred: impl Fn(i64) -> bool) -> Option<i64> {
    linear_search(start, Direction::Forward, pred)
}

/// Last `k >= start` for which `pred` still holds, assuming `pred(start)`.
pub fn final_index(start: i64, pred: impl Fn(i64) -> bool) -> Option<i64> {
    linear_search(start + 1, Direction::Forward, |k| !pred(k)).map(|k| k - 1)
}

/// Finds `x` in `[a, b]` such that `f(x) ≡ y (mod 360)` by bisection.
///
/// `f` must increase monotonically (modulo wraparound) over the bracket and
/// cross `y` exactly once; multiple crossings are not detected. The search
/// halves the bracket until it is narrower than [`ANGULAR_TOLERANCE`] and
/// returns the midpoint.
///
/// # Arguments
///
/// * `f` - Angle-valued function of a moment, in degrees
/// * `y` - Target angle in degrees
/// * `a` - Lower end of the bracket
/// * `b` - Upper end of the bracket
pub fn invert_angular(f: impl Fn(f64) -> f64, y: f64, a: f64, b: f64) -> f64 {
    let (mut lo, mut hi) = (a, b);
    let mut iter = 0;
    while hi - lo >= ANGULAR_TOLERANCE && iter < MAX_BISECTIONS {
        let x = (lo + hi) / 2.0;
        if floored_mod(f(x) - y, 360.0) < 180.0 {
            hi = x;
        } else {
            lo = x;
        }
        iter += 1;
    }
    tracing::trace!(iterations = iter, width = hi - lo, "angular inversion converged");
    (lo + hi) / 2.0
}

pub(crate) fn sin_degrees(theta: f64) -> f64 {
    theta.to_radians().sin()
}

pub(crate) fn cos_degrees(theta: f64) -> f64 {
    theta.to_radians().cos()
}

pub(crate) fn tan_degrees(theta: f64) -> f64 {
    theta.to_radians().tan()
}

pub(crate) fn arcsin_degrees(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub(crate) fn arccos_degrees(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Quadrant-correct arctangent of `y / x`, in [0, 360).
pub(crate) fn arctan_degrees(y: f64, x: f64) -> f64 {
    normalize_degrees_360(y.atan2(x).to_degrees())
}

/// Converts degrees, arcminutes and arcseconds to decimal degrees.
pub(crate) fn angle(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + (minutes + seconds / 60.0) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floored_mod_takes_sign_of_modulus() {
        assert_eq!(floored_mod(-1.0, 360.0), 359.0);
        assert_eq!(floored_mod(725.5, 360.0), 5.5);
        assert_eq!(floored_mod(-5_i64, 4), 3);
        assert_eq!(floored_mod(5_i64, -4), -3);
        assert_eq!(floored_mod(-8_i64, 4), 0);
    }

    #[test]
    fn mod3_shifts_into_interval() {
        assert_eq!(mod3(190.0, -180.0, 180.0), -170.0);
        assert_eq!(mod3(-190.0, -180.0, 180.0), 170.0);
        assert_eq!(mod3(42.0, 5.0, 5.0), 42.0);
    }

    #[test]
    fn polynomial_matches_direct_evaluation() {
        let x = 1.7_f64;
        assert_eq!(polynomial(&[], x), 0.0);
        assert_eq!(polynomial(&[3.0], x), 3.0);
        let coeffs = [2.0, -1.0, 0.5, 4.0, -0.25, 1.5];
        for degree in 0..coeffs.len() {
            let c = &coeffs[..=degree];
            let direct: f64 = c.iter().enumerate().map(|(i, a)| a * x.powi(i as i32)).sum();
            assert!((polynomial(c, x) - direct).abs() < 1e-9, "degree {degree}");
        }
    }

    #[test]
    fn sigma_sums_rows() {
        let rows = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(sigma(&rows, |[a, b]| a * b), 44.0);
        let empty: [[f64; 2]; 0] = [];
        assert_eq!(sigma(&empty, |[a, _]| *a), 0.0);
    }

    #[test]
    fn linear_search_finds_boundary_in_both_directions() {
        assert_eq!(linear_search(0, Direction::Forward, |k| k >= 5), Some(5));
        assert_eq!(linear_search(10, Direction::Backward, |k| k < 3), Some(2));
        assert_eq!(next(7, |k| k * k >= 50), Some(8));
        assert_eq!(final_index(1, |k| k * k < 50), Some(7));
        assert_eq!(linear_search(0, Direction::Forward, |_| false), None);
    }

    #[test]
    fn invert_angular_handles_wraparound() {
        // Crosses 0/360 inside the bracket.
        let f = |x: f64| normalize_degrees_360(350.0 + 12.0 * x);
        let x = invert_angular(f, 5.0, 0.0, 2.0);
        assert!((x - 1.25).abs() < 1e-4);
        assert!((floored_mod(f(x) - 5.0 + 180.0, 360.0) - 180.0).abs() < 1e-3);
        assert!((0.0..=2.0).contains(&x));
    }

    #[test]
    fn arctan_degrees_is_quadrant_correct() {
        assert!((arctan_degrees(1.0, 1.0) - 45.0).abs() < 1e-12);
        assert!((arctan_degrees(1.0, -1.0) - 135.0).abs() < 1e-12);
        assert!((arctan_degrees(-1.0, -1.0) - 225.0).abs() < 1e-12);
        assert!((arctan_degrees(-1.0, 1.0) - 315.0).abs() < 1e-12);
    }
}
