// ============================================================================
// Money Specs
// Runtime descriptors for (currency, scale, storage) and their resolution
// ============================================================================
//
// The typed Money<C, D, S> surface resolves currency, precision and storage
// at compile time. These descriptors are the runtime mirror of that triple
// for callers that only hold a CurrencyId: a MoneySpec may leave scale and
// storage open, and fill() resolves the gaps against the registry into a
// FilledMoneySpec. Filling is idempotent.

use super::MoneyError;
use crate::numeric::NumericError;
use crate::registry::{self, CurrencyId, HasCurrency};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// The integer kinds that can back a monetary value at runtime.
///
/// Mirrors the sealed [`Backing`](crate::numeric::Backing) implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageKind {
    I32,
    #[default]
    I64,
    I128,
}

impl StorageKind {
    /// The largest scale for which 10^scale fits the storage kind (capped
    /// at 28, the `Decimal` mantissa limit, for `I128`).
    pub const fn max_decimals(self) -> u8 {
        match self {
            StorageKind::I32 => 9,
            StorageKind::I64 => 18,
            StorageKind::I128 => 28,
        }
    }

    /// Whether a minor-unit count fits this storage kind.
    pub const fn fits(self, minor_units: i128) -> bool {
        match self {
            StorageKind::I32 => minor_units >= i32::MIN as i128 && minor_units <= i32::MAX as i128,
            StorageKind::I64 => minor_units >= i64::MIN as i128 && minor_units <= i64::MAX as i128,
            StorageKind::I128 => true,
        }
    }
}

/// A partially specified monetary type: currency plus optional scale and
/// storage.
///
/// Resolve with [`fill`](Self::fill) before constructing values from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoneySpec {
    pub currency: CurrencyId,
    /// Explicit decimal precision; `None` defers to the registry default
    pub scale: Option<u8>,
    /// Explicit storage kind; `None` defers to the standard `I64`
    pub storage: Option<StorageKind>,
}

impl MoneySpec {
    /// Start a spec for a currency, with scale and storage left open.
    pub fn new(currency: impl HasCurrency) -> Self {
        Self {
            currency: currency.currency_id(),
            scale: None,
            storage: None,
        }
    }

    /// Builder method: Set an explicit decimal precision.
    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builder method: Set an explicit storage kind.
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Resolve the open fields into a fully concrete descriptor.
    ///
    /// Missing storage becomes [`StorageKind::I64`]; missing scale becomes
    /// the registry default for the currency. Filling an already filled
    /// spec yields the same result, so the operation is idempotent.
    ///
    /// # Errors
    /// - [`MoneyError::UndefinedPrecision`] if the registry reports the -1
    ///   sentinel and no explicit scale was supplied
    /// - `Overflow` if the scale does not fit the storage kind
    pub fn fill(self) -> Result<FilledMoneySpec, MoneyError> {
        let storage = self.storage.unwrap_or_default();
        let scale = match self.scale {
            Some(scale) => scale,
            None => u8::try_from(registry::decimals(self.currency))
                .map_err(|_| MoneyError::UndefinedPrecision(self.currency))?,
        };
        if scale > storage.max_decimals() {
            return Err(NumericError::Overflow.into());
        }
        Ok(FilledMoneySpec {
            currency: self.currency,
            scale,
            storage,
        })
    }
}

impl HasCurrency for MoneySpec {
    #[inline]
    fn currency_id(&self) -> CurrencyId {
        self.currency
    }
}

impl From<FilledMoneySpec> for MoneySpec {
    fn from(filled: FilledMoneySpec) -> Self {
        Self {
            currency: filled.currency,
            scale: Some(filled.scale),
            storage: Some(filled.storage),
        }
    }
}

/// A fully concrete (currency, scale, storage) descriptor.
///
/// The scale is `u8`, so a filled spec can never hold the registry's -1
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilledMoneySpec {
    pub currency: CurrencyId,
    pub scale: u8,
    pub storage: StorageKind,
}

impl FilledMoneySpec {
    /// The raw minor-unit count of one major unit: 10^scale.
    pub fn major_unit_minor(&self) -> i128 {
        10i128.pow(self.scale as u32)
    }

    /// Convert a real amount to a raw minor-unit count under this spec,
    /// rounding half away from zero.
    ///
    /// This is the runtime mirror of the typed `Money::from_decimal_rounded`
    /// constructors for callers that only hold a descriptor.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value exceeds the storage kind.
    pub fn minor_units_from_decimal(&self, value: Decimal) -> Result<i128, MoneyError> {
        let factor = Decimal::from_i128_with_scale(self.major_unit_minor(), 0);
        let scaled = value.checked_mul(factor).ok_or(NumericError::Overflow)?;
        let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let minor_units = rounded.to_i128().ok_or(NumericError::Overflow)?;
        if !self.storage.fits(minor_units) {
            return Err(NumericError::Overflow.into());
        }
        Ok(minor_units)
    }
}

impl HasCurrency for FilledMoneySpec {
    #[inline]
    fn currency_id(&self) -> CurrencyId {
        self.currency
    }
}

// ============================================================================
// Tests
// ============================================================================
