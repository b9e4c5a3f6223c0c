#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Complex numbers with two coexisting representations.
//!
//! A [`Complex`] is constructed from either its Cartesian form `a + bi` or its
//! polar form `r·e^(iφ)`; the other form is derived on first access and cached
//! for the lifetime of the value. Each arithmetic operation works on the form
//! that is numerically convenient for it: `+`, `-` and `*` on the Cartesian
//! form, `/` and [`Complex::mul_polar`] on the polar form.
//!
//! Comparisons are tolerance-based rather than exact: `==` uses
//! [`DEFAULT_TOLERANCE`], [`equals`] takes an explicit tolerance.
//!
//! # Example
//!
//! ```
//! use nums::Complex;
//!
//! let a = Complex::from_cartesian(1.0, 1.0);
//! let b = Complex::from_polar(2.0 * 2f64.sqrt(), std::f64::consts::FRAC_PI_4);
//! assert_eq!(a.clone() * b.clone(), Complex::from_cartesian(0.0, 4.0));
//! assert_eq!(a.mul_polar(&b), Complex::from_cartesian(0.0, 4.0));
//! ```

mod complex;
mod ops;
mod tolerance;

pub use complex::Complex;
pub use tolerance::{approx_eq, equals, DEFAULT_TOLERANCE};
