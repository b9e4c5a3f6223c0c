//! Tolerance-based comparison.
//!
//! Two complex numbers are considered equal when the Euclidean distance
//! between them is strictly below a tolerance; two scalars when their absolute
//! difference is. `==` uses [`DEFAULT_TOLERANCE`]; [`equals`] and
//! [`approx_eq`] take the tolerance explicitly.

use crate::Complex;

/// The tolerance used by `==` and as the default epsilon for
/// [`approx::AbsDiffEq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Compares two complex numbers for equality, based on the given tolerance
/// for the Euclidean distance between them.
#[must_use]
pub fn equals(lhs: &Complex, rhs: &Complex, tol: f64) -> bool {
    (lhs - rhs).rad() < tol
}

/// Compares two scalars for equality, based on the given tolerance.
#[must_use]
pub fn approx_eq(lhs: f64, rhs: f64, tol: f64) -> bool {
    (lhs - rhs).abs() < tol
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other, DEFAULT_TOLERANCE)
    }
}

/// A complex number equals a real scalar when its imaginary part is within
/// [`DEFAULT_TOLERANCE`] of zero and its real part within
/// [`DEFAULT_TOLERANCE`] of the scalar.
impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        approx_eq(self.real(), *other, DEFAULT_TOLERANCE)
            && approx_eq(self.im(), 0.0, DEFAULT_TOLERANCE)
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

impl approx::AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        equals(self, other, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_with_explicit_tolerance() {
        let c1 = Complex::from_cartesian(12.0, -0.5);
        let c2 = Complex::from_cartesian(11.0, 0.0);
        // distance is sqrt(1.25) ≈ 1.118
        assert!(equals(&c1, &c2, 1.5));
        assert!(!equals(&c1, &c2, 1.0));

        let c3 = Complex::from_polar(2.0, -3.0);
        let c4 = Complex::from_polar(4.5, 1.5);
        assert!(equals(&c3, &c4, 6.5));
    }

    #[rstest::rstest]
    #[case(true, 1.0, 1.0)]
    #[case(true, 1.0, 1.0 + 1e-6)]
    #[case(false, 1.0, 1.0 + 1e-4)]
    #[case(true, -0.5, -0.5 - 1e-6)]
    fn approx_eq_default_tolerance(#[case] expected: bool, #[case] lhs: f64, #[case] rhs: f64) {
        assert_eq!(expected, approx_eq(lhs, rhs, DEFAULT_TOLERANCE));
    }

    #[test]
    fn default_equality() {
        let a = Complex::from_cartesian(1.0, 1.0);
        assert_eq!(a, Complex::from_cartesian(1.0 + 1e-7, 1.0 - 1e-7));
        assert_ne!(a, Complex::from_cartesian(1.0 + 1e-3, 1.0));
    }

    #[test]
    fn scalar_equality() {
        let c = Complex::from_cartesian(11.0, 0.0);
        assert_eq!(c, 11.0);
        assert_eq!(11.0, c);
        assert_eq!(Complex::from_cartesian(11.0, 1e-6), 11.0);
        assert_ne!(Complex::from_cartesian(11.0, 0.1), 11.0);
        assert_ne!(Complex::from_cartesian(11.1, 0.0), 11.0);
        assert_eq!(Complex::from_polar(1.0, 0.0), 1.0);
    }

    #[test]
    fn abs_diff_eq() {
        let c1 = Complex::from_cartesian(12.0, -0.5);
        let c2 = Complex::from_cartesian(11.0, 0.0);
        approx::assert_abs_diff_eq!(c1, c2, epsilon = 1.5);
        approx::assert_abs_diff_ne!(c1, c2);
    }
}
