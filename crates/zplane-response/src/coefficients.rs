//! Coefficient storage for a discrete-time filter's transfer function.

/// Numerator and denominator coefficients of a filter's transfer function.
///
/// Both sequences are ordered by ascending power of z⁻¹: index 0 holds the
/// constant term. `b` is the numerator, `a` the denominator. The sequences
/// are immutable once built; whoever designs the filter is responsible for
/// normalization (such as a leading denominator coefficient of 1), it is not
/// enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T> FilterCoefficients<T> {
    /// Creates a coefficient set from numerator (`b`) and denominator (`a`)
    /// sequences in ascending-power order.
    pub fn new(b: Vec<T>, a: Vec<T>) -> Self {
        Self { b, a }
    }

    /// Returns the numerator coefficients, constant term first.
    pub fn b_coefficients(&self) -> &[T] {
        &self.b
    }

    /// Returns the denominator coefficients, constant term first.
    pub fn a_coefficients(&self) -> &[T] {
        &self.a
    }
}
