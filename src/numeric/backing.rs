// ============================================================================
// Integer Backing Storage
// Sealed abstraction over the fixed-width integers that can back a decimal
// ============================================================================

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for i128 {}
}

/// Signed integer kinds that can back a [`FixedDecimal`](super::FixedDecimal).
///
/// The trait is sealed: exactly `i32`, `i64` and `i128` implement it. All
/// arithmetic goes through the checked methods so that overflow is always
/// observable, never silently wrapped.
///
/// `i64` is the standard storage kind; the others exist for callers that
/// need a narrower or wider range.
pub trait Backing:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + sealed::Sealed + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// `10^exp`, or `None` if it does not fit this storage kind.
    fn pow10(exp: u8) -> Option<Self>;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// Widen to `i128` (always exact).
    fn to_i128(self) -> i128;

    /// Narrow from `i128`, or `None` if the value is out of range.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_backing {
    ($($ty:ty),+) => {
        $(
            impl Backing for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn pow10(exp: u8) -> Option<Self> {
                    (10 as $ty).checked_pow(exp as u32)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )+
    };
}

impl_backing!(i32, i64, i128);
