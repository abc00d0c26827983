// ============================================================================
// Numeric Module
// Fixed-point arithmetic backing the monetary value types
// ============================================================================
//
// This module provides:
// - FixedDecimal<D, S>: Fixed-point decimal with compile-time precision
// - Backing: Sealed trait over the supported integer storage kinds
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point storage; f64 only appears at construction boundaries
// - All arithmetic is checked and returns Result (operators panic loudly)
// - Scale and storage kind are type parameters, never runtime state

mod backing;
mod errors;
mod fixed_decimal;

pub use backing::Backing;
pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::FixedDecimal;
