// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the maximum of the backing storage
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below the minimum of the backing storage
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
