// ============================================================================
// Fixed Money Library
// Currency-safe monetary values over exact fixed-point integer arithmetic
// ============================================================================

//! # Fixed Money
//!
//! Monetary amounts represented exactly: a value tagged with its currency
//! and a fixed number of decimal places, backed by integer storage, so that
//! arithmetic can neither mix currencies silently nor accumulate binary
//! rounding error.
//!
//! ## Features
//!
//! - **Compile-time currency safety**: currency, precision and storage kind
//!   are type parameters; mismatched operands do not type-check
//! - **Exact fixed-point arithmetic** over `i32`/`i64`/`i128`, checked on
//!   every path
//! - **Immutable currency registry** compiled into the binary: decimal
//!   precision, ISO 4217 codes, descriptions and display symbols
//! - **Three lookup shapes** for every registry accessor: bare identifier,
//!   type witness, or value instance
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! // Typed path: the alias bakes the registry's default scale (2) in
//! let price = Usd::from_minor(325); // 3.25 USD
//! let order = price * 3 + Usd::from_minor(99);
//! assert_eq!(order.to_string(), "10.74 USD");
//!
//! // Registry lookups accept all three shapes
//! assert_eq!(decimals(CurrencyId::Usd), 2);
//! assert_eq!(decimals(order), 2);
//!
//! // Runtime path: resolve a partial descriptor against the registry
//! let spec = MoneySpec::new(CurrencyId::Jpy).fill()?;
//! assert_eq!(spec.major_unit_minor(), 1);
//! # Ok::<(), fixed_money::money::MoneyError>(())
//! ```
//!
//! Adding `Usd` to `Eur`, or two `Usd` values at different precisions, is
//! rejected by the compiler before any computation occurs; no runtime
//! currency check exists in the crate.

pub mod money;
pub mod numeric;
pub mod registry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{
        Aud, Bhd, Btc, Cad, Chf, Clf, Cny, Eur, FilledMoneySpec, Gbp, Inr, Jpy, Krw, Kwd, Money,
        MoneyError, MoneySpec, StorageKind, Usd, Usdt,
    };
    pub use crate::numeric::{Backing, FixedDecimal, NumericError, NumericResult};
    pub use crate::registry::{
        alpha_code, decimals, description, long_symbol, lookup, numeric_code, resolve,
        short_symbol, CurrencyId, CurrencyRecord, CurrencyTag, HasCurrency, RegistryError,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::registry::tags;

    #[test]
    fn test_usd_cents_scenario() {
        // decimals(:USD) == 2; 325 minor units represent 3.25 USD
        assert_eq!(decimals(CurrencyId::Usd), 2);
        let value = Usd::from_minor(325);
        assert_eq!(value.to_string(), "3.25 USD");
        assert_eq!(value.amount().to_decimal().unwrap().to_string(), "3.25");
    }

    #[test]
    fn test_precious_metal_requires_explicit_scale() {
        // XAU has no sane minor unit
        assert_eq!(decimals(CurrencyId::Xau), -1);

        // Constructing from a real value without an explicit scale fails
        let err = MoneySpec::new(CurrencyId::Xau).fill().unwrap_err();
        assert_eq!(err, MoneyError::UndefinedPrecision(CurrencyId::Xau));

        // With an explicit scale the same construction succeeds
        let spec = MoneySpec::new(CurrencyId::Xau).with_scale(3).fill().unwrap();
        assert_eq!(
            spec.minor_units_from_decimal(rust_decimal::Decimal::ONE).unwrap(),
            1_000
        );
    }

    #[test]
    fn test_non_iso_codes_pass_through_lowercase() {
        assert_eq!(alpha_code(CurrencyId::Btc), "btc");
        assert_eq!(numeric_code(CurrencyId::Btc), 0);
        assert_eq!(alpha_code(CurrencyId::Usd), "USD");
        assert_eq!(numeric_code(CurrencyId::Usd), 840);
    }

    #[test]
    fn test_major_units_across_scales() {
        assert_eq!(Jpy::one().unwrap().minor_units(), 1);
        assert_eq!(Usd::one().unwrap().minor_units(), 100);
        assert_eq!(
            MoneySpec::new(CurrencyId::Jpy).fill().unwrap().major_unit_minor(),
            1
        );
        assert_eq!(
            MoneySpec::new(CurrencyId::Usd).fill().unwrap().major_unit_minor(),
            100
        );
    }

    #[test]
    fn test_all_shapes_agree_for_every_currency() {
        for &id in CurrencyId::ALL {
            assert_eq!(lookup(alpha_code(id)).unwrap().id, id);
            assert_eq!(decimals(id), id.record().default_scale);
        }
        // Type witness and instance witness against the identifier shape
        assert_eq!(decimals(tags::Eur), decimals(CurrencyId::Eur));
        let pocket_money = Eur::from_major(5).unwrap();
        assert_eq!(decimals(pocket_money), decimals(CurrencyId::Eur));
        assert_eq!(short_symbol(pocket_money), short_symbol(CurrencyId::Eur));
    }

    #[test]
    fn test_unknown_code_surfaces_error() {
        assert!(matches!(
            lookup("XYZ"),
            Err(RegistryError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }

    #[test]
    fn test_end_to_end_ledger_style_sum() {
        let line_items = [
            Usd::from_minor(1_099),
            Usd::from_minor(299) * 3,
            Usd::from_minor(-500), // discount
        ];
        let total = line_items
            .iter()
            .copied()
            .try_fold(Usd::zero(), Usd::checked_add)
            .unwrap();
        assert_eq!(total.minor_units(), 1_496);
        assert_eq!(total.to_string(), "14.96 USD");
    }
}
