// ============================================================================
// Currency-Tagged Money
// Monetary values that carry currency, precision and storage in the type
// ============================================================================

mod spec;

pub use spec::{FilledMoneySpec, MoneySpec, StorageKind};

use crate::numeric::{Backing, FixedDecimal, NumericError, NumericResult};
use crate::registry::{tags, CurrencyId, CurrencyTag, HasCurrency, RegistryError};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors produced when constructing or resolving monetary values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// A string code named no currency in the registry
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Arithmetic or conversion failure in the fixed-point layer
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// The registry has no canonical minor unit for this currency and no
    /// explicit scale was supplied
    #[error("currency {0} has no canonical minor unit; supply an explicit scale")]
    UndefinedPrecision(CurrencyId),
}

/// A monetary amount tagged with its currency at the type level.
///
/// Wraps a [`FixedDecimal`] plus a zero-sized currency witness `C` from
/// [`tags`](crate::registry::tags). Currency identity, decimal precision and
/// storage kind are all part of the static type, never the runtime value:
/// adding USD to EUR, or USD at two decimals to USD at three, is a
/// compile-time type error. No runtime currency check exists anywhere.
///
/// The per-currency aliases ([`Usd`], [`Jpy`], ...) bake the registry's
/// default scale into the type. Currencies with no sane minor unit (the
/// precious metals) have no alias; spelling out `Money<tags::Xau, 3>` is the
/// explicit-scale opt-in the registry sentinel demands.
///
/// # Example
/// ```
/// use fixed_money::money::Usd;
///
/// let price = Usd::from_minor(325); // 3.25 USD
/// let total = price + Usd::from_minor(75);
/// assert_eq!(total.to_string(), "4.00 USD");
/// ```
#[derive(Clone, Copy)]
pub struct Money<C: CurrencyTag, const DECIMALS: u8, S: Backing = i64> {
    amount: FixedDecimal<DECIMALS, S>,
    currency: PhantomData<C>,
}

impl<C: CurrencyTag, const D: u8, S: Backing> Money<C, D, S> {
    /// The currency this type is tagged with.
    pub const CURRENCY: CurrencyId = C::ID;

    /// Number of decimal places carried by this type.
    pub const DECIMALS: u8 = D;

    #[inline]
    fn wrap(amount: FixedDecimal<D, S>) -> Self {
        Self {
            amount,
            currency: PhantomData,
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw count of minor units (no scaling applied).
    #[inline]
    pub const fn from_minor(minor_units: S) -> Self {
        Self {
            amount: FixedDecimal::from_raw(minor_units),
            currency: PhantomData,
        }
    }

    /// Create from a whole number of major units.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value is out of range.
    #[inline]
    pub fn from_major(major_units: S) -> NumericResult<Self> {
        FixedDecimal::from_integer(major_units).map(Self::wrap)
    }

    /// Create from a `Decimal`, rejecting values this precision cannot
    /// represent exactly.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `value` has more fractional digits than DECIMALS
    /// - `Overflow` if the scaled value is out of range
    #[inline]
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        FixedDecimal::from_decimal(value).map(Self::wrap)
    }

    /// Create from a `Decimal`, rounding half away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value is out of range.
    #[inline]
    pub fn from_decimal_rounded(value: Decimal) -> NumericResult<Self> {
        FixedDecimal::from_decimal_rounded(value).map(Self::wrap)
    }

    /// Create from an `f64`, rounding half away from zero.
    ///
    /// # Errors
    /// - `InvalidInput` if the value is not finite
    /// - `Overflow` if the scaled value is out of range
    #[inline]
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        FixedDecimal::from_f64(value).map(Self::wrap)
    }

    /// Zero in this currency.
    #[inline]
    pub fn zero() -> Self {
        Self::wrap(FixedDecimal::zero())
    }

    /// Exactly one major unit: raw minor-unit count 10^DECIMALS.
    ///
    /// # Errors
    /// Returns `Overflow` if 10^DECIMALS does not fit the storage kind.
    #[inline]
    pub fn one() -> NumericResult<Self> {
        FixedDecimal::one().map(Self::wrap)
    }

    // ========================================================================
    // Projections
    // ========================================================================

    /// The currency identifier, read back from the static tag.
    ///
    /// This performs no registry lookup; the tag is self-describing.
    #[inline]
    pub fn currency(self) -> CurrencyId {
        C::ID
    }

    /// The decimal precision, read back from the static type.
    #[inline]
    pub fn decimals(self) -> u8 {
        D
    }

    /// The wrapped fixed-point amount.
    #[inline]
    pub fn amount(self) -> FixedDecimal<D, S> {
        self.amount
    }

    /// The raw count of minor units.
    #[inline]
    pub fn minor_units(self) -> S {
        self.amount.raw_value()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.amount.is_positive()
    }

    /// Check if the value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.amount.is_negative()
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for the storage kind's minimum value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.amount.abs().map(Self::wrap)
    }

    // ========================================================================
    // Arithmetic (closed over currency, precision and storage)
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.amount.checked_add(rhs.amount).map(Self::wrap)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.amount.checked_sub(rhs.amount).map(Self::wrap)
    }

    /// Checked negation.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.amount.checked_neg().map(Self::wrap)
    }

    /// Multiply by an integer scalar (e.g. a quantity).
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul_int(self, rhs: S) -> NumericResult<Self> {
        self.amount.checked_mul_int(rhs).map(Self::wrap)
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::wrap(self.amount.min(other.amount))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::wrap(self.amount.max(other.amount))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<C: CurrencyTag, const D: u8, S: Backing> HasCurrency for Money<C, D, S> {
    #[inline]
    fn currency_id(&self) -> CurrencyId {
        C::ID
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Default for Money<C, D, S> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> PartialEq for Money<C, D, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Eq for Money<C, D, S> {}

impl<C: CurrencyTag, const D: u8, S: Backing> PartialOrd for Money<C, D, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.amount.cmp(&other.amount))
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Ord for Money<C, D, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Hash for Money<C, D, S> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Neg for Money<C, D, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Money negation overflow")
    }
}

// Infallible operator sugar (panics on overflow - use checked_* in
// production paths)
impl<C: CurrencyTag, const D: u8, S: Backing> Add for Money<C, D, S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Money addition overflow")
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Sub for Money<C, D, S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Money subtraction overflow")
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> Mul<S> for Money<C, D, S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        self.checked_mul_int(rhs)
            .expect("Money scalar multiplication overflow")
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> fmt::Debug for Money<C, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money<{}, {}>({})",
            C::ID.record().alpha_code,
            D,
            self.amount
        )
    }
}

impl<C: CurrencyTag, const D: u8, S: Backing> fmt::Display for Money<C, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, C::ID.record().alpha_code)
    }
}

// ============================================================================
// Per-Currency Aliases (registry default scale baked into the type)
// ============================================================================

pub type Usd = Money<tags::Usd, 2>;
pub type Eur = Money<tags::Eur, 2>;
pub type Jpy = Money<tags::Jpy, 0>;
pub type Gbp = Money<tags::Gbp, 2>;
pub type Chf = Money<tags::Chf, 2>;
pub type Cad = Money<tags::Cad, 2>;
pub type Aud = Money<tags::Aud, 2>;
pub type Cny = Money<tags::Cny, 2>;
pub type Inr = Money<tags::Inr, 2>;
pub type Krw = Money<tags::Krw, 0>;
pub type Bhd = Money<tags::Bhd, 3>;
pub type Kwd = Money<tags::Kwd, 3>;
pub type Clf = Money<tags::Clf, 4>;
pub type Btc = Money<tags::Btc, 8>;
pub type Usdt = Money<tags::Usdt, 6>;

// ============================================================================
// Tests
// ============================================================================
