#![warn(missing_docs)]
//! Frequency-response evaluation for discrete-time filters.
//!
//! Given the numerator/denominator coefficients of a filter's transfer
//! function H(z) = B(z⁻¹)/A(z⁻¹), this crate samples the complex frequency
//! response at equally spaced angular frequencies over [0, π) by evaluating
//! both polynomials at points e^(−jω) on the unit circle and dividing.
//!
//! This crate only evaluates an already-given transfer function; designing
//! the coefficients (pole/zero placement, stability analysis) is out of
//! scope.

pub mod coefficients;
pub mod error;
pub mod transfer;

pub use coefficients::FilterCoefficients;
pub use error::ResponseError;
pub use transfer::TransferFunction;
