//! Immutable complex scalar used for statevector amplitudes.
//!
//! [`Complex`] wraps [`num_complex::Complex64`] but narrows its surface to
//! what the engine needs: approximate equality, division that refuses
//! near-zero divisors instead of producing `NaN`/`inf`, and the canonical
//! six-decimal rendering used by state displays.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;

use crate::error::{SimError, SimResult};

/// Tolerance for scalar equality and for rejecting divisors.
pub const EPSILON: f64 = 1e-15;

/// A complex number `re + im·i`.
///
/// Values are `Copy` and every operation returns a new value. Equality is
/// approximate (both components within [`EPSILON`]); there is no ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex(Complex64);

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// `1 + 0i`
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// `0 + 1i`
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Create a complex number from its real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Create a purely real complex number.
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Real part.
    pub fn real(self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    pub fn imaginary(self) -> f64 {
        self.0.im
    }

    /// Complex conjugate `re - im·i`.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self(self.0.conj())
    }

    /// `sqrt(re² + im²)`
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// `re² + im²`, the probability weight of an amplitude.
    pub fn magnitude_squared(self) -> f64 {
        self.0.norm_sqr()
    }

    /// Divide by another complex number.
    ///
    /// Fails with [`SimError::DivisionByZero`] when `|other| < EPSILON`.
    pub fn checked_div(self, other: Complex) -> SimResult<Self> {
        let divisor = other.magnitude();
        if divisor < EPSILON {
            return Err(SimError::DivisionByZero { divisor });
        }
        Ok(Self(self.0 / other.0))
    }

    /// Divide by a real factor.
    ///
    /// Fails with [`SimError::DivisionByZero`] when `|factor| < EPSILON`.
    pub fn checked_div_real(self, factor: f64) -> SimResult<Self> {
        if factor.abs() < EPSILON {
            return Err(SimError::DivisionByZero { divisor: factor });
        }
        Ok(Self(self.0 / factor))
    }

    /// Component-wise comparison with a caller-chosen tolerance.
    pub fn approx_eq(self, other: Complex, tolerance: f64) -> bool {
        (self.real() - other.real()).abs() < tolerance
            && (self.imaginary() - other.imaginary()).abs() < tolerance
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other, EPSILON)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex(self.0 * rhs.0)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex {
        Complex(self.0 * rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex(rhs.0 * self)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Self {
        value.0
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for Complex {
    /// Six decimals; a negligible imaginary part prints the real part only,
    /// a negligible real part prints `<im>i`, otherwise `<re>±<im>i`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.real(), self.imaginary());
        if im.abs() < EPSILON {
            write!(f, "{re:.6}")
        } else if re.abs() < EPSILON {
            write!(f, "{im:.6}i")
        } else {
            let sign = if im >= 0.0 { "+" } else { "" };
            write!(f, "{re:.6}{sign}{im:.6}i")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);

        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        // (1 + 2i)(3 - i) = 3 - i + 6i - 2i² = 5 + 5i
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(0.5 * a, Complex::new(0.5, 1.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn test_operands_are_unchanged() {
        let a = Complex::new(1.0, 1.0);
        let _ = a + Complex::ONE;
        let _ = a.conjugate();
        assert_eq!(a, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_division() {
        let a = Complex::new(5.0, 5.0);
        let b = Complex::new(3.0, -1.0);
        assert!(a.checked_div(b).unwrap().approx_eq(Complex::new(1.0, 2.0), 1e-12));
        assert_eq!(a.checked_div_real(5.0).unwrap(), Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_division_by_zero() {
        let a = Complex::new(1.0, 0.0);
        assert!(matches!(
            a.checked_div_real(0.0),
            Err(SimError::DivisionByZero { .. })
        ));
        assert!(matches!(
            a.checked_div_real(1e-16),
            Err(SimError::DivisionByZero { .. })
        ));
        assert!(matches!(
            a.checked_div(Complex::ZERO),
            Err(SimError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_magnitude() {
        let a = Complex::new(3.0, 4.0);
        assert!((a.magnitude() - 5.0).abs() < 1e-12);
        assert!((a.magnitude_squared() - 25.0).abs() < 1e-12);
        assert_eq!(a.conjugate(), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_approximate_equality() {
        let a = Complex::new(0.1 + 0.2, 0.0);
        assert_eq!(a, Complex::new(0.3, 0.0));
        assert_ne!(Complex::new(0.3, 0.0), Complex::new(0.3 + 1e-12, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(0.5, 0.0).to_string(), "0.500000");
        assert_eq!(Complex::new(-1.0, 1e-17).to_string(), "-1.000000");
        assert_eq!(Complex::new(0.0, 0.25).to_string(), "0.250000i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-1.000000i");
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1.000000+2.000000i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1.000000-2.000000i");
        assert_eq!(
            Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0).to_string(),
            "0.707107"
        );
    }
}
