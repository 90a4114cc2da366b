//! Sampled complex frequency response of a discrete-time filter.
use crate::coefficients::FilterCoefficients;
use crate::error::ResponseError;
use az::CastFrom;
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use zplane_math::polynomial::ComplexPolynomial;
use zplane_math::{linear_to_db, reversed};

/// The complex frequency response of a filter, sampled at `N` equally spaced
/// angular frequencies.
///
/// Holds two arrays of equal length: the frequencies (in radians, covering
/// `[0, π)` with `frequencies[i] = i·π/N`; π itself is never sampled) and the
/// complex gain of the filter at each of those frequencies. Both are computed
/// in full by [`TransferFunction::new`] and are read-only afterwards.
///
/// If a pole of the filter lands exactly on a sample point, the gain at that
/// index is non-finite (infinite or NaN magnitude). That is a valid output
/// value, not a construction failure; check `Complex::is_finite` before
/// rendering or analyzing results near poles.
///
/// # Example
/// ```rust
/// use zplane_response::{FilterCoefficients, TransferFunction};
///
/// // One-pole low-pass: H(z) = 1 / (1 - 0.5·z⁻¹)
/// let coefficients = FilterCoefficients::new(vec![1.0_f64], vec![1.0, -0.5]);
/// let response = TransferFunction::new(512, &coefficients).unwrap();
///
/// assert_eq!(response.len(), 512);
/// // At DC the gain is 1 / (1 - 0.5) = 2.
/// assert!((response.gain()[0].re - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction<T> {
    coefficients: FilterCoefficients<T>,
    frequencies: Vec<T>,
    gain: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + CastFrom<f64>> TransferFunction<T> {
    /// Samples the frequency response of `coefficients` at `number_of_points`
    /// frequencies over `[0, π)`.
    ///
    /// Either all points are computed and a fully populated response is
    /// returned, or construction fails before any sampling occurs; there is
    /// no partially computed state.
    ///
    /// # Errors
    ///
    /// [`ResponseError::NoPoints`] when `number_of_points` is zero, and
    /// [`ResponseError::EmptyNumerator`]/[`ResponseError::EmptyDenominator`]
    /// when a coefficient sequence is empty.
    pub fn new(
        number_of_points: usize,
        coefficients: &FilterCoefficients<T>,
    ) -> Result<Self, ResponseError> {
        if number_of_points == 0 {
            return Err(ResponseError::NoPoints);
        }
        if coefficients.b_coefficients().is_empty() {
            return Err(ResponseError::EmptyNumerator);
        }
        if coefficients.a_coefficients().is_empty() {
            return Err(ResponseError::EmptyDenominator);
        }

        let (frequencies, gain) = Self::sample(number_of_points, coefficients);
        Ok(Self {
            coefficients: coefficients.clone(),
            frequencies,
            gain,
        })
    }

    #[profiling::function]
    fn sample(
        number_of_points: usize,
        coefficients: &FilterCoefficients<T>,
    ) -> (Vec<T>, Vec<Complex<T>>) {
        // The coefficient sets are ascending-power; Horner evaluation wants
        // the highest-degree term first.
        let numerator = ComplexPolynomial::from_real(&reversed(coefficients.b_coefficients()));
        let denominator = ComplexPolynomial::from_real(&reversed(coefficients.a_coefficients()));

        let count = T::cast_from(number_of_points as f64);
        let mut frequencies = Vec::with_capacity(number_of_points);
        let mut gain = Vec::with_capacity(number_of_points);
        for i in 0..number_of_points {
            let frequency = T::cast_from(i as f64) * T::PI() / count;
            // z⁻¹ evaluated on the unit circle at z = e^(jω)
            let exponent = Complex::new(T::zero(), -frequency).exp();
            let value = numerator.evaluate(exponent) / denominator.evaluate(exponent);
            frequencies.push(frequency);
            gain.push(value);
        }
        (frequencies, gain)
    }

    /// Returns the number of sampled points.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns `true` when no points were sampled. Successful construction
    /// always yields at least one point.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Returns the coefficients this response was computed from.
    pub fn coefficients(&self) -> &FilterCoefficients<T> {
        &self.coefficients
    }

    /// Returns the sampled frequencies in radians, strictly increasing over
    /// `[0, π)`.
    pub fn frequencies(&self) -> &[T] {
        &self.frequencies
    }

    /// Returns the frequency at `index`, or `None` when `index` is out of
    /// range.
    pub fn frequency(&self, index: usize) -> Option<T> {
        self.frequencies.get(index).copied()
    }

    /// Returns the complex gain at each sampled frequency.
    pub fn gain(&self) -> &[Complex<T>] {
        &self.gain
    }

    /// Returns the complex gain at `index`, or `None` when `index` is out of
    /// range.
    pub fn gain_at(&self, index: usize) -> Option<Complex<T>> {
        self.gain.get(index).copied()
    }

    /// Returns the magnitude response, |H(e^(jω))| per sampled frequency.
    pub fn magnitude(&self) -> Vec<T> {
        self.gain.iter().map(|g| g.norm()).collect()
    }

    /// Returns the magnitude response in decibels.
    pub fn magnitude_db(&self) -> Vec<T> {
        self.gain.iter().map(|g| linear_to_db(g.norm())).collect()
    }

    /// Returns the phase response, arg(H(e^(jω))) per sampled frequency, in
    /// radians.
    pub fn phase(&self) -> Vec<T> {
        self.gain.iter().map(|g| g.arg()).collect()
    }
}
