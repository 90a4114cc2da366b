//! Polynomials over the complex plane, evaluated with Horner's method.
use num_complex::Complex;
use num_traits::{Float, Zero};

/// A polynomial with complex coefficients.
///
/// Coefficients are stored in descending-power order: `coefficients[0]` is the
/// highest-degree term, the last element is the constant term, so the stored
/// sequence `[c0, c1, ..., ck]` represents `c0·xᵏ + c1·x^(k-1) + … + ck`.
/// The coefficient list is immutable once the polynomial is built.
///
/// An empty coefficient list is treated as the constant-zero polynomial:
/// [`ComplexPolynomial::evaluate`] returns zero for it at every point.
///
/// # Example
/// ```rust
/// use num_complex::Complex;
/// use zplane_math::polynomial::ComplexPolynomial;
///
/// // p(x) = x² (descending order: [1, 0, 0])
/// let p = ComplexPolynomial::from_real(&[1.0, 0.0, 0.0]);
/// let value = p.evaluate(Complex::new(2.0, 0.0));
/// assert_eq!(value, Complex::new(4.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPolynomial<T> {
    coefficients: Vec<Complex<T>>,
}

impl<T: Float> ComplexPolynomial<T> {
    /// Creates a polynomial from complex coefficients in descending-power order.
    pub fn new(coefficients: Vec<Complex<T>>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from real coefficients in descending-power order,
    /// promoting each to a complex number with zero imaginary part.
    pub fn from_real(coefficients: &[T]) -> Self {
        Self::new(
            coefficients
                .iter()
                .map(|&c| Complex::new(c, T::zero()))
                .collect(),
        )
    }

    /// Returns the stored coefficients, highest-degree term first.
    pub fn coefficients(&self) -> &[Complex<T>] {
        &self.coefficients
    }

    /// Returns the degree of this polynomial, or `None` for the empty
    /// (constant-zero) polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// One multiply-add per coefficient; numerically equivalent to summing the
    /// power terms directly, without the O(k²) multiplications.
    pub fn evaluate(&self, x: Complex<T>) -> Complex<T> {
        let mut acc = Complex::zero();
        for &coefficient in &self.coefficients {
            acc = acc * x + coefficient;
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evaluate_square() {
        let p = ComplexPolynomial::from_real(&[1.0, 0.0, 0.0]);
        let value = p.evaluate(Complex::new(2.0, 0.0));
        assert!(approx::relative_eq!(value.re, 4.0));
        assert!(approx::relative_eq!(value.im, 0.0));
    }

    #[test]
    fn test_evaluate_constant() {
        let p = ComplexPolynomial::from_real(&[3.5]);
        assert_eq!(p.evaluate(Complex::new(-7.0, 2.0)), Complex::new(3.5, 0.0));
    }

    #[test]
    fn test_evaluate_empty_is_zero() {
        let p: ComplexPolynomial<f64> = ComplexPolynomial::new(vec![]);
        assert_eq!(p.evaluate(Complex::new(1.0, 1.0)), Complex::zero());
        assert_eq!(p.degree(), None);
    }

    #[test]
    fn test_evaluate_complex_point() {
        // p(x) = x² + 1 has roots at ±i
        let p = ComplexPolynomial::from_real(&[1.0, 0.0, 1.0]);
        let value = p.evaluate(Complex::new(0.0, 1.0));
        assert!(value.norm() < 1e-15);
    }

    #[test]
    fn test_degree() {
        let p = ComplexPolynomial::from_real(&[1.0, -0.5]);
        assert_eq!(p.degree(), Some(1));
    }

    fn coefficient() -> impl Strategy<Value = f64> {
        -1e3..1e3
    }

    proptest! {
        #[test]
        fn test_horner_matches_power_sum(
            coefficients in proptest::collection::vec(coefficient(), 0..10),
            re in -1.5..1.5f64,
            im in -1.5..1.5f64,
        ) {
            let p = ComplexPolynomial::from_real(&coefficients);
            let x = Complex::new(re, im);

            let degree = coefficients.len() as i32 - 1;
            let direct = coefficients
                .iter()
                .enumerate()
                .fold(Complex::zero(), |sum, (i, &c)| {
                    sum + x.powi(degree - i as i32) * c
                });

            let value = p.evaluate(x);
            prop_assert!((value - direct).norm() <= 1e-6 * (1.0 + direct.norm()));
        }
    }
}
