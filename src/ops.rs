//! Arithmetic on [`Complex`].
//!
//! Each operation works on the representation that is convenient for it:
//! `+`, `-`, unary `-` and `*` on the Cartesian form, `/` and
//! [`Complex::mul_polar`] on the polar form. Scalar operands are lifted to a
//! degenerate `Complex` in the representation matching the operator and
//! delegated to the complex-complex form, so mixed-operand behavior always
//! agrees with the pure-complex one.

use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Complex;

impl Complex {
    /// Multiplies two complex numbers in their polar form.
    ///
    /// Agrees with `*` within the comparison tolerance; the product angle is
    /// reduced into `[0, 2π)` by the polar constructor.
    #[must_use]
    pub fn mul_polar(&self, rhs: &Complex) -> Complex {
        Complex::from_polar(self.rad() * rhs.rad(), self.phi() + rhs.phi())
    }

    /// Multiplies by a real scalar in polar form.
    #[must_use]
    pub fn mul_polar_scalar(&self, rhs: f64) -> Complex {
        self.mul_polar(&polar_of(rhs))
    }
}

impl From<f64> for Complex {
    /// The Cartesian degenerate `(value, 0)`.
    fn from(value: f64) -> Self {
        Self::from_cartesian(value, 0.0)
    }
}

/// The polar degenerate of a real scalar: magnitude `|value|`, angle `0` for
/// non-negative values and `π` otherwise.
fn polar_of(value: f64) -> Complex {
    Complex::from_polar(value.abs(), if value >= 0.0 { 0.0 } else { PI })
}

impl Add<&Complex> for &Complex {
    type Output = Complex;

    fn add(self, rhs: &Complex) -> Self::Output {
        Complex::from_cartesian(self.real() + rhs.real(), self.im() + rhs.im())
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        &self + &rhs
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, rhs: f64) -> Self::Output {
        &self + &Complex::from(rhs)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        &Complex::from(self) + &rhs
    }
}

impl Sub<&Complex> for &Complex {
    type Output = Complex;

    fn sub(self, rhs: &Complex) -> Self::Output {
        Complex::from_cartesian(self.real() - rhs.real(), self.im() - rhs.im())
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, rhs: f64) -> Self::Output {
        &self - &Complex::from(rhs)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        &Complex::from(self) - &rhs
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Complex::from_cartesian(-self.real(), -self.im())
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Mul<&Complex> for &Complex {
    type Output = Complex;

    fn mul(self, rhs: &Complex) -> Self::Output {
        Complex::from_cartesian(
            self.real() * rhs.real() - self.im() * rhs.im(),
            self.im() * rhs.real() + self.real() * rhs.im(),
        )
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Self::Output {
        &self * &Complex::from(rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        &Complex::from(self) * &rhs
    }
}

impl Div<&Complex> for &Complex {
    type Output = Complex;

    fn div(self, rhs: &Complex) -> Self::Output {
        Complex::from_polar(self.rad() / rhs.rad(), self.phi() - rhs.phi())
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Self::Output {
        &self / &rhs
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, rhs: f64) -> Self::Output {
        &self / &polar_of(rhs)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Self::Output {
        &polar_of(self) / &rhs
    }
}
