// ============================================================================
// Currency Registry
// Immutable, process-wide currency metadata with three lookup shapes
// ============================================================================
//
// The registry is a compiled-in table (see data.rs). Every accessor resolves
// through the same identifier-shaped lookup, `CurrencyId::record`; the
// type-witness and instance-witness shapes are forwarding wrappers over it
// via the HasCurrency trait. Nothing here is ever mutated after startup: the
// table is const data and the by-code index is built complete once, then
// frozen, so unsynchronized concurrent reads are safe by construction.

mod data;

pub use data::{tags, CurrencyId};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors produced by registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The given code names no currency in the registry
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Metadata for one currency in the registry.
///
/// Exactly one record exists per [`CurrencyId`]; records are plain const
/// data and are never retained inside monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrencyRecord {
    /// The identifier this record belongs to
    pub id: CurrencyId,
    /// ISO 4217 alphabetic code (uppercase), or a lowercase custom code
    pub alpha_code: &'static str,
    /// ISO 4217 numeric code, 0 for non-ISO currencies
    pub numeric_code: u16,
    /// Default number of decimal places; -1 means the currency has no sane
    /// minor unit and callers must supply a scale explicitly
    pub default_scale: i8,
    /// English description
    pub description: &'static str,
    /// Short display symbol, if one is registered
    pub short_symbol: Option<&'static str>,
    /// Long (disambiguated) display symbol, if one is registered
    pub long_symbol: Option<&'static str>,
}

/// Compile-time currency witness.
///
/// Implemented by the zero-sized structs in [`tags`]; carries the currency
/// identity and its registry default scale as associated consts so that
/// [`Money`](crate::money::Money) can be tagged at the type level.
pub trait CurrencyTag: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The identifier this tag witnesses.
    const ID: CurrencyId;
    /// The registry default scale (-1 sentinel included).
    const DEFAULT_SCALE: i8;
}

/// Anything that can say which currency it is about.
///
/// This is the polymorphism-over-identity-representation seam: the bare
/// identifier ([`CurrencyId`]), every type witness in [`tags`], and every
/// [`Money`](crate::money::Money) instance implement it, so one accessor
/// serves all three call shapes.
pub trait HasCurrency {
    /// Resolve to the bare currency identifier.
    fn currency_id(&self) -> CurrencyId;
}

impl HasCurrency for CurrencyId {
    #[inline]
    fn currency_id(&self) -> CurrencyId {
        *self
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record().alpha_code)
    }
}

impl FromStr for CurrencyId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

// ============================================================================
// String Resolution
// ============================================================================

static CODE_INDEX: LazyLock<HashMap<&'static str, CurrencyId>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(CurrencyId::ALL.len());
    for &id in CurrencyId::ALL {
        index.insert(id.record().alpha_code, id);
    }
    tracing::debug!(currencies = index.len(), "currency registry index built");
    index
});

/// Resolve an alphabetic code to a currency identifier.
///
/// Matching is exact: ISO codes are uppercase, custom codes lowercase.
///
/// # Errors
/// Returns [`RegistryError::UnknownCurrency`] for codes not in the registry.
pub fn resolve(code: &str) -> Result<CurrencyId, RegistryError> {
    CODE_INDEX
        .get(code)
        .copied()
        .ok_or_else(|| RegistryError::UnknownCurrency(code.to_string()))
}

/// Look up the full record for an alphabetic code.
///
/// # Errors
/// Returns [`RegistryError::UnknownCurrency`] for codes not in the registry.
pub fn lookup(code: &str) -> Result<CurrencyRecord, RegistryError> {
    resolve(code).map(CurrencyId::record)
}

// ============================================================================
// Accessors (identifier, type witness, or instance witness)
// ============================================================================

/// The full metadata record of a currency.
#[inline]
pub fn record(currency: impl HasCurrency) -> CurrencyRecord {
    currency.currency_id().record()
}

/// Default number of decimal places, or `-1` when the currency has no sane
/// minor unit (callers needing a concrete scale must then supply one).
#[inline]
pub fn decimals(currency: impl HasCurrency) -> i8 {
    record(currency).default_scale
}

/// English description of a currency.
#[inline]
pub fn description(currency: impl HasCurrency) -> &'static str {
    record(currency).description
}

/// ISO 4217 numeric code, 0 for non-ISO currencies.
#[inline]
pub fn numeric_code(currency: impl HasCurrency) -> u16 {
    record(currency).numeric_code
}

/// ISO 4217 alphabetic code, or the lowercase custom code.
#[inline]
pub fn alpha_code(currency: impl HasCurrency) -> &'static str {
    record(currency).alpha_code
}

/// Short display symbol, falling back to the alphabetic code.
#[inline]
pub fn short_symbol(currency: impl HasCurrency) -> &'static str {
    let record = record(currency);
    record.short_symbol.unwrap_or(record.alpha_code)
}

/// Long display symbol, falling back to the alphabetic code.
#[inline]
pub fn long_symbol(currency: impl HasCurrency) -> &'static str {
    let record = record(currency);
    record.long_symbol.unwrap_or(record.alpha_code)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_agrees_with_record() {
        for &id in CurrencyId::ALL {
            let record = id.record();
            assert_eq!(lookup(record.alpha_code), Ok(record));
            assert_eq!(resolve(record.alpha_code), Ok(id));
            assert_eq!(decimals(id), record.default_scale);
        }
    }

    #[test]
    fn test_unknown_code_fails() {
        assert_eq!(
            lookup("ZZZ"),
            Err(RegistryError::UnknownCurrency("ZZZ".to_string()))
        );
        // Matching is exact: ISO codes are uppercase only
        assert!(resolve("usd").is_err());
        assert!("".parse::<CurrencyId>().is_err());
    }

    #[test]
    fn test_identifier_and_type_witness_shapes_agree() {
        assert_eq!(decimals(CurrencyId::Usd), decimals(tags::Usd));
        assert_eq!(description(CurrencyId::Jpy), description(tags::Jpy));
        assert_eq!(numeric_code(CurrencyId::Xau), numeric_code(tags::Xau));
        assert_eq!(alpha_code(CurrencyId::Btc), alpha_code(tags::Btc));
        assert_eq!(short_symbol(CurrencyId::Eur), short_symbol(tags::Eur));
        assert_eq!(long_symbol(CurrencyId::Cad), long_symbol(tags::Cad));
    }

    #[test]
    fn test_symbol_fallback_to_alpha_code() {
        // AED registers no symbols at all
        assert_eq!(short_symbol(CurrencyId::Aed), "AED");
        assert_eq!(long_symbol(CurrencyId::Aed), "AED");
        // EUR has a short symbol but no long one
        assert_eq!(short_symbol(CurrencyId::Eur), "€");
        assert_eq!(long_symbol(CurrencyId::Eur), "EUR");
    }

    #[test]
    fn test_alpha_code_case_policy() {
        assert_eq!(alpha_code(CurrencyId::Usd), "USD");
        assert_eq!(alpha_code(CurrencyId::Btc), "btc");
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        for &id in CurrencyId::ALL {
            assert_eq!(id.to_string().parse::<CurrencyId>(), Ok(id));
        }
    }
}
