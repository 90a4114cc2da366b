//! Failure conditions of transfer-function construction.
use thiserror::Error;

/// Reasons a [`TransferFunction`](crate::TransferFunction) cannot be built.
///
/// Every variant is rejected before any sampling occurs; construction is
/// all-or-nothing. A denominator evaluating to (near-)zero at a sample point
/// is not an error: it surfaces as a non-finite gain value in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The requested number of sample points was zero.
    #[error("number of points must be positive")]
    NoPoints,
    /// The numerator coefficient sequence was empty.
    #[error("numerator coefficients are empty")]
    EmptyNumerator,
    /// The denominator coefficient sequence was empty.
    #[error("denominator coefficients are empty")]
    EmptyDenominator,
}
