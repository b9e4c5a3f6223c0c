use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::OnceLock;

/// A complex number observable in Cartesian form `a + bi` and polar form
/// `r·e^(iφ)`.
///
/// A value is constructed from exactly one of the two forms
/// ([`Complex::from_cartesian`] or [`Complex::from_polar`]); the other form is
/// derived on first access and cached, so each field is computed at most once
/// per instance. The cells are synchronized, so sharing a value across threads
/// is safe even when the first access happens concurrently.
///
/// The angle is always reported in `[0, 2π)`.
#[derive(Clone)]
pub struct Complex {
    real: OnceLock<f64>,
    im: OnceLock<f64>,
    rad: OnceLock<f64>,
    phi: OnceLock<f64>,
}

impl Complex {
    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub fn from_cartesian(real: f64, im: f64) -> Self {
        let c = Self::unfilled();
        let _ = c.real.set(real);
        let _ = c.im.set(im);
        c
    }

    /// Creates a complex number from polar coordinates.
    ///
    /// `phi` may be any finite angle; it is reduced into `[0, 2π)` (e.g.
    /// `-π/2` becomes `3π/2`, `3π` becomes `π`). `rad` is stored as given and
    /// is expected to be non-negative.
    #[must_use]
    pub fn from_polar(rad: f64, phi: f64) -> Self {
        let c = Self::unfilled();
        let _ = c.rad.set(rad);
        let _ = c.phi.set(normalized(phi));
        c
    }

    fn unfilled() -> Self {
        Self {
            real: OnceLock::new(),
            im: OnceLock::new(),
            rad: OnceLock::new(),
            phi: OnceLock::new(),
        }
    }

    /// Returns the real part.
    #[must_use]
    pub fn real(&self) -> f64 {
        *self.real.get_or_init(|| self.rad() * self.phi().cos())
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn im(&self) -> f64 {
        *self.im.get_or_init(|| self.rad() * self.phi().sin())
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn rad(&self) -> f64 {
        *self.rad.get_or_init(|| self.real().hypot(self.im()))
    }

    /// Returns the angle, in `[0, 2π)`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        *self.phi.get_or_init(|| phi_of(self.real(), self.im()))
    }
}

/// Reduces an angle into `[0, 2π)`.
fn normalized(phi: f64) -> f64 {
    let phi = phi.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if phi >= TAU {
        0.0
    } else {
        phi
    }
}

/// Angle of a Cartesian pair, in `[0, 2π)`.
///
/// Quadrant-corrected arctangent; the `real == 0` column is resolved
/// explicitly so the infinite ratio never propagates.
fn phi_of(real: f64, im: f64) -> f64 {
    if real == 0.0 {
        return if im > 0.0 {
            FRAC_PI_2
        } else if im < 0.0 {
            3.0 * FRAC_PI_2
        } else {
            0.0
        };
    }
    let t = (im / real).atan();
    if real < 0.0 {
        PI + t
    } else if im < 0.0 {
        TAU + t
    } else {
        t
    }
}

impl std::fmt::Debug for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Complex")
            .field("real", &self.real.get())
            .field("im", &self.im.get())
            .field("rad", &self.rad.get())
            .field("phi", &self.phi.get())
            .finish()
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:+}i", self.real(), self.im())
    }
}
