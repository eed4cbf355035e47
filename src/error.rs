//! Error types for vector operations.

use thiserror::Error;

/// Errors produced by the fallible vector operations.
///
/// Component-wise addition, subtraction, scaling, component access, cloning and formatting are
/// total and never produce one of these; only the operations whose documentation says so do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Operand dimensions are incompatible for the requested operation.
    ///
    /// Returned by [`dot`][crate::Vector::dot] when the operands differ in dimension, by
    /// [`cross`][crate::Vector::cross] when either operand is not 3-dimensional, and by
    /// [`div_elem`][crate::Vector::div_elem] when the divisor has fewer components than the
    /// dividend.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Dimension the operation required.
        expected: usize,
        /// Dimension it was given.
        actual: usize,
    },

    /// A negative dimension was requested from [`uniform`][crate::Vector::uniform].
    #[error("invalid dimension: {0}")]
    InvalidDimension(i64),

    /// [`set_relative`][crate::Vector::set_relative] was called without an explicit basis on a
    /// vector that has none.
    #[error("missing basis: no explicit basis given and the target has none")]
    MissingBasis,

    /// A basis chain revisited a frame while being resolved to world coordinates.
    #[error("cyclic basis chain")]
    CyclicBasis,

    /// Component-wise division hit a zero divisor component.
    #[error("division by zero at component {index}")]
    DivisionByZero {
        /// Index of the offending divisor component.
        index: usize,
    },
}
