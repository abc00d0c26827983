// ============================================================================
// Fixed-Point Decimal
// Exact decimal arithmetic over integer storage with compile-time precision
// ============================================================================

use super::backing::Backing;
use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` in the backing integer `S`.
/// The represented value is always exactly `raw / 10^DECIMALS`; this is a
/// notational identity, never a runtime division.
///
/// # Type Parameters
/// - `DECIMALS`: Number of decimal places (0-18 for `i64`, 0-9 for `i32`,
///   up to 28 for `i128`).
/// - `S`: Backing storage kind. Defaults to `i64`.
///
/// # Overflow
/// Every arithmetic path is checked. The `checked_*` methods return
/// [`NumericError::Overflow`] / [`NumericError::Underflow`]; the operator
/// impls (`+`, `-`, unary `-`, `* scalar`) panic on the same conditions.
/// Nothing wraps silently.
///
/// # Mixing scales or storage kinds
/// Two values participate in the same operation only when `DECIMALS` and `S`
/// match. A mismatch is a compile-time type error; no runtime scale check
/// exists anywhere in this type.
///
/// # Rounding
/// Constructors that accept a real number (`from_f64`,
/// `from_decimal_rounded`) round half away from zero.
///
/// # Example
/// ```
/// use fixed_money::numeric::FixedDecimal;
///
/// let price = FixedDecimal::<2>::from_integer(100)?; // 100.00
/// let total = (price * 3).checked_add(FixedDecimal::from_raw(25))?; // 300.25
/// assert_eq!(total.to_string(), "300.25");
/// # Ok::<(), fixed_money::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8, S: Backing = i64>(S);

/// Compute 10^n at compile time
const fn pow10_i128(n: u8) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8, S: Backing> FixedDecimal<D, S> {
    /// Number of decimal places carried by this type.
    pub const DECIMALS: u8 = D;

    /// The scale factor (10^DECIMALS) widened to i128.
    pub const SCALE_I128: i128 = pow10_i128(D);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// No scaling is applied: the caller asserts `raw` is already expressed
    /// in units of 10^-DECIMALS.
    #[inline]
    pub const fn from_raw(raw: S) -> Self {
        Self(raw)
    }

    /// Zero (0.0).
    #[inline]
    pub fn zero() -> Self {
        Self(S::ZERO)
    }

    /// One (1.0), i.e. raw = 10^DECIMALS.
    ///
    /// # Errors
    /// Returns `Overflow` if 10^DECIMALS does not fit the storage kind.
    #[inline]
    pub fn one() -> NumericResult<Self> {
        Self::scale_factor().map(Self)
    }

    /// The scale factor 10^DECIMALS in the storage kind.
    ///
    /// # Errors
    /// Returns `Overflow` if it does not fit (e.g. `i32` with DECIMALS > 9).
    #[inline]
    pub fn scale_factor() -> NumericResult<S> {
        S::pow10(D).ok_or(NumericError::Overflow)
    }

    /// Create from an integer value (whole units).
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: S) -> NumericResult<Self> {
        let scale = Self::scale_factor()?;
        value
            .checked_mul(scale)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from a `Decimal`, rejecting any value this precision cannot
    /// represent exactly.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `value` has more fractional digits than DECIMALS
    /// - `Overflow` if the scaled value is out of range
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let scaled = value
            .checked_mul(Self::decimal_scale())
            .ok_or(NumericError::Overflow)?;
        let truncated = scaled.round_dp_with_strategy(0, RoundingStrategy::ToZero);
        if truncated != scaled {
            return Err(NumericError::PrecisionLoss);
        }
        Self::from_scaled_decimal(truncated)
    }

    /// Create from a `Decimal`, rounding half away from zero to DECIMALS
    /// places.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value is out of range.
    pub fn from_decimal_rounded(value: Decimal) -> NumericResult<Self> {
        let scaled = value
            .checked_mul(Self::decimal_scale())
            .ok_or(NumericError::Overflow)?;
        let rounded =
            scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self::from_scaled_decimal(rounded)
    }

    /// Create from an `f64`, rounding half away from zero to DECIMALS places.
    ///
    /// # Errors
    /// - `InvalidInput` if the value is not finite
    /// - `Overflow` if the scaled value is out of range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        let decimal = Decimal::from_f64(value).ok_or(NumericError::InvalidInput)?;
        Self::from_decimal_rounded(decimal)
    }

    fn decimal_scale() -> Decimal {
        Decimal::from_i128_with_scale(Self::SCALE_I128, 0)
    }

    fn from_scaled_decimal(scaled: Decimal) -> NumericResult<Self> {
        let raw = scaled.to_i128().ok_or(NumericError::Overflow)?;
        S::from_i128(raw).map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    ///
    /// This is the value × 10^DECIMALS.
    #[inline]
    pub fn raw_value(self) -> S {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub fn integer_part(self) -> i128 {
        self.0.to_i128() / Self::SCALE_I128
    }

    /// Get the fractional part as a positive raw count of minor units.
    #[inline]
    pub fn fractional_part(self) -> u128 {
        (self.0.to_i128() % Self::SCALE_I128).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == S::ZERO
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > S::ZERO
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < S::ZERO
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Convert to a `Decimal` with the exact same value.
    ///
    /// The result carries DECIMALS fractional digits; no precision is lost
    /// relative to the raw/scale pair.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw value exceeds the `Decimal` mantissa
    /// range (only possible with `i128` storage).
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        Decimal::try_from_i128_with_scale(self.0.to_i128(), D as u32)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > S::ZERO {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < S::ZERO {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked negation.
    ///
    /// Only the storage kind's minimum value fails to negate.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Multiply by an integer scalar (no rescaling needed).
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul_int(self, rhs: S) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(Ord::min(self.0, other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(Ord::max(self.0, other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8, S: Backing> Default for FixedDecimal<D, S> {
    #[inline]
    fn default() -> Self {
        Self(S::ZERO)
    }
}

impl<const D: u8, S: Backing> PartialEq for FixedDecimal<D, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8, S: Backing> Eq for FixedDecimal<D, S> {}

impl<const D: u8, S: Backing> PartialOrd for FixedDecimal<D, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8, S: Backing> Ord for FixedDecimal<D, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8, S: Backing> Hash for FixedDecimal<D, S> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const D: u8, S: Backing> Neg for FixedDecimal<D, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("FixedDecimal negation overflow")
    }
}

// Infallible Add/Sub/Mul for ergonomics (panic on overflow - use checked_* in
// production paths)
impl<const D: u8, S: Backing> Add for FixedDecimal<D, S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedDecimal addition overflow")
    }
}

impl<const D: u8, S: Backing> Sub for FixedDecimal<D, S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedDecimal subtraction overflow")
    }
}

impl<const D: u8, S: Backing> Mul<S> for FixedDecimal<D, S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        self.checked_mul_int(rhs)
            .expect("FixedDecimal scalar multiplication overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8, S: Backing> fmt::Debug for FixedDecimal<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8, S: Backing> fmt::Display for FixedDecimal<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.is_negative() && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8, S: Backing> std::str::FromStr for FixedDecimal<D, S> {
    type Err = NumericError;

    /// Parse from a plain decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.00
    /// - "123.45" -> 123.45
    /// - "-0.01" -> -0.01
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], Some(&s[pos + 1..]))
        } else {
            (s, None)
        };

        if int_str.is_empty() && frac_str.map_or(true, str::is_empty) {
            return Err(NumericError::InvalidInput);
        }

        let int_val: u128 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::InvalidInput)?
        };

        let frac_val: u128 = match frac_str {
            None | Some("") => 0,
            Some(frac) if frac.len() > D as usize => {
                return Err(NumericError::PrecisionLoss);
            }
            Some(frac) => {
                // Pad with zeros to reach DECIMALS length
                let padded = format!("{:0<width$}", frac, width = D as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            }
        };

        let magnitude = int_val
            .checked_mul(Self::SCALE_I128 as u128)
            .and_then(|v| v.checked_add(frac_val))
            .ok_or(NumericError::Overflow)?;

        let raw: i128 = if is_negative {
            if magnitude > i128::MAX as u128 + 1 {
                return Err(NumericError::Overflow);
            }
            (magnitude as i128).wrapping_neg()
        } else {
            if magnitude > i128::MAX as u128 {
                return Err(NumericError::Overflow);
            }
            magnitude as i128
        };

        S::from_i128(raw).map(Self).ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type FD2 = FixedDecimal<2>;
    type FD0 = FixedDecimal<0>;

    #[test]
    fn test_constants() {
        assert_eq!(FD2::SCALE_I128, 100);
        assert_eq!(FD2::scale_factor().unwrap(), 100i64);
        assert_eq!(FD2::zero().raw_value(), 0);
        assert_eq!(FD2::one().unwrap().raw_value(), 100);
        assert_eq!(FD0::one().unwrap().raw_value(), 1);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let x = FD2::from_raw(325);
        assert_eq!(x.raw_value(), 325);
        assert_eq!(x.integer_part(), 3);
        assert_eq!(x.fractional_part(), 25);

        assert_eq!(FD2::from_raw(i64::MAX).raw_value(), i64::MAX);
        assert_eq!(FD2::from_raw(i64::MIN).raw_value(), i64::MIN);
    }

    #[test]
    fn test_from_integer() {
        let x = FD2::from_integer(100).unwrap();
        assert_eq!(x.raw_value(), 10_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);

        // Scaling i64::MAX overflows
        assert_eq!(FD2::from_integer(i64::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_scale_factor_too_wide_for_storage() {
        // 10^10 does not fit i32
        type Narrow = FixedDecimal<10, i32>;
        assert_eq!(Narrow::scale_factor(), Err(NumericError::Overflow));
        assert_eq!(Narrow::from_integer(1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_add() {
        let a = FD2::from_integer(100).unwrap();
        let b = FD2::from_integer(50).unwrap();
        assert_eq!(a.checked_add(b).unwrap().integer_part(), 150);

        let max = FD2::from_raw(i64::MAX);
        assert_eq!(
            max.checked_add(FD2::one().unwrap()),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_checked_sub() {
        let a = FD2::from_integer(100).unwrap();
        let b = FD2::from_integer(30).unwrap();
        assert_eq!(a.checked_sub(b).unwrap().integer_part(), 70);
        assert_eq!(b.checked_sub(a).unwrap().integer_part(), -70);

        let min = FD2::from_raw(i64::MIN);
        assert_eq!(
            min.checked_sub(FD2::one().unwrap()),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_checked_neg_and_abs() {
        let x = FD2::from_integer(-100).unwrap();
        assert_eq!(x.checked_neg().unwrap().integer_part(), 100);
        assert_eq!(x.abs().unwrap().integer_part(), 100);

        let min = FD2::from_raw(i64::MIN);
        assert_eq!(min.checked_neg(), Err(NumericError::Overflow));
        assert_eq!(min.abs(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_mul_int() {
        let x = FD2::from_raw(299);
        assert_eq!(x.checked_mul_int(3).unwrap().raw_value(), 897);

        let big = FD2::from_raw(i64::MAX / 2 + 1);
        assert_eq!(big.checked_mul_int(2), Err(NumericError::Overflow));
    }

    #[test]
    fn test_operators() {
        let a = FD2::from_raw(1000);
        let b = FD2::from_raw(500);
        assert_eq!((a + b).raw_value(), 1500);
        assert_eq!((a - b).raw_value(), 500);
        assert_eq!((a * 3).raw_value(), 3000);
        assert_eq!((-a).raw_value(), -1000);
    }

    #[test]
    fn test_comparison() {
        let a = FD2::from_integer(100).unwrap();
        let b = FD2::from_integer(50).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(FD2::from_raw(1099).to_string(), "10.99");
        assert_eq!(FD2::from_raw(500).to_string(), "5.00");
        assert_eq!(FD2::from_raw(-550).to_string(), "-5.50");
        assert_eq!(FD2::from_raw(-1).to_string(), "-0.01");
        assert_eq!(FD2::from_raw(0).to_string(), "0.00");
        assert_eq!(FD0::from_raw(42).to_string(), "42");
    }

    #[test]
    fn test_from_str() {
        let x: FD2 = "123.45".parse().unwrap();
        assert_eq!(x.raw_value(), 12_345);

        let y: FD2 = "-0.01".parse().unwrap();
        assert_eq!(y.raw_value(), -1);

        let z: FD2 = "42".parse().unwrap();
        assert_eq!(z.raw_value(), 4200);

        let w: FD2 = "7.5".parse().unwrap();
        assert_eq!(w.raw_value(), 750);
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("not_a_number".parse::<FD2>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<FD2>(), Err(NumericError::InvalidInput));
        assert_eq!(".".parse::<FD2>(), Err(NumericError::InvalidInput));
        // Too many decimals
        assert_eq!("1.123".parse::<FD2>(), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_from_decimal_strict() {
        let x = FD2::from_decimal(Decimal::new(325, 2)).unwrap(); // 3.25
        assert_eq!(x.raw_value(), 325);

        // 3.255 cannot be represented with two decimals
        assert_eq!(
            FD2::from_decimal(Decimal::new(3255, 3)),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_from_decimal_rounded_half_away_from_zero() {
        // 0.005 -> 0.01
        let up = FD2::from_decimal_rounded(Decimal::new(5, 3)).unwrap();
        assert_eq!(up.raw_value(), 1);

        // -0.005 -> -0.01
        let down = FD2::from_decimal_rounded(Decimal::new(-5, 3)).unwrap();
        assert_eq!(down.raw_value(), -1);

        // 0.125 -> 0.13 (not banker's 0.12)
        let midpoint = FD2::from_decimal_rounded(Decimal::new(125, 3)).unwrap();
        assert_eq!(midpoint.raw_value(), 13);
    }

    #[test]
    fn test_from_f64() {
        let x = FD2::from_f64(3.25).unwrap();
        assert_eq!(x.raw_value(), 325);

        // Binary-inexact inputs land on the nearest representable value
        let y = FD2::from_f64(0.1).unwrap();
        assert_eq!(y.raw_value(), 10);

        assert_eq!(FD2::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(FD2::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
        // Representable as a Decimal but too wide for i64 once scaled
        assert_eq!(FD2::from_f64(1e20), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_decimal_exact() {
        let x = FD2::from_raw(325);
        assert_eq!(x.to_decimal().unwrap().to_string(), "3.25");

        let y = FD2::from_raw(-1);
        assert_eq!(y.to_decimal().unwrap().to_string(), "-0.01");

        // Round-trips through the strict constructor
        assert_eq!(FD2::from_decimal(x.to_decimal().unwrap()).unwrap(), x);
    }

    #[test]
    fn test_alternate_storage_kinds() {
        let narrow = FixedDecimal::<2, i32>::from_integer(100).unwrap();
        assert_eq!(narrow.raw_value(), 10_000i32);

        let wide = FixedDecimal::<18, i128>::from_integer(1_000_000_000).unwrap();
        assert_eq!(wide.integer_part(), 1_000_000_000);
        assert_eq!(wide.to_string(), "1000000000.000000000000000000");
    }

    proptest! {
        #[test]
        fn prop_raw_round_trip(raw in any::<i64>()) {
            prop_assert_eq!(FD2::from_raw(raw).raw_value(), raw);
        }

        #[test]
        fn prop_add_matches_raw_sum(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            let sum = FD2::from_raw(a).checked_add(FD2::from_raw(b)).unwrap();
            prop_assert_eq!(sum.raw_value(), a + b);
        }

        #[test]
        fn prop_display_parse_round_trip(raw in -1_000_000_000i64..1_000_000_000) {
            let x = FD2::from_raw(raw);
            let parsed: FD2 = x.to_string().parse().unwrap();
            prop_assert_eq!(parsed, x);
        }
    }
}
