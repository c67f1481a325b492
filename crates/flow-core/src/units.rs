//! Numeric amount abstraction and compile-time tag binding.
//!
//! Every container, snapshot and limiter is generic over a `Units` type. A
//! domain picks its representation once by implementing `Tag` on a marker type,
//! then uses the `Tagged*` aliases from `flow-container`.

use std::fmt::Debug;
use std::ops::{Add, Sub};

/// A real-number amount: comparable, addable, subtractable, with a zero.
///
/// Arithmetic on sanitized values (see `non_negative`/`clamp_to`) never
/// leaves `[0, capacity]`, so unsigned types never underflow here.
pub trait Units:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Default + Debug + Send + Sync + 'static
{
    const ZERO: Self;

    /// Smaller of two amounts. Returns `a` when they are unordered.
    #[inline]
    fn min_of(a: Self, b: Self) -> Self {
        if b < a {
            b
        } else {
            a
        }
    }

    /// Maps negative and NaN amounts to zero.
    #[inline]
    fn non_negative(self) -> Self {
        if self > Self::ZERO {
            self
        } else {
            Self::ZERO
        }
    }

    /// Maps `self` into `[0, max]`. `max` is expected to be non-negative.
    #[inline]
    fn clamp_to(self, max: Self) -> Self {
        Self::min_of(self.non_negative(), max)
    }

    /// True for zero and positive amounts; false for negatives and NaN.
    #[inline]
    fn is_non_negative(self) -> bool {
        self >= Self::ZERO
    }
}

macro_rules! impl_units {
    ($zero:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Units for $t {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_units!(0.0 => f32, f64);
impl_units!(0 => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Binds a marker type to the numeric representation used for its amounts.
///
/// ```
/// use flow_core::{Tag, Units};
///
/// struct FuelTag;
/// impl Tag for FuelTag {
///     type Units = f32;
/// }
///
/// assert_eq!(<<FuelTag as Tag>::Units as Units>::ZERO, 0.0f32);
/// ```
pub trait Tag {
    type Units: Units;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_clamps_negatives_and_nan() {
        assert_eq!((-3.5f32).non_negative(), 0.0);
        assert_eq!(f64::NAN.non_negative(), 0.0);
        assert_eq!(7.25f64.non_negative(), 7.25);
        assert_eq!((-4i32).non_negative(), 0);
        assert_eq!(9u32.non_negative(), 9);
    }

    #[test]
    fn clamp_to_respects_both_bounds() {
        assert_eq!(300.0f32.clamp_to(255.0), 255.0);
        assert_eq!((-1.0f32).clamp_to(255.0), 0.0);
        assert_eq!(100.0f32.clamp_to(255.0), 100.0);
        assert_eq!(500u64.clamp_to(10), 10);
    }

    #[test]
    fn min_of_picks_smaller() {
        assert_eq!(f32::min_of(1.5, 2.5), 1.5);
        assert_eq!(i64::min_of(8, -2), -2);
    }

    #[test]
    fn validity_rejects_nan() {
        assert!(0.0f32.is_non_negative());
        assert!(!f32::NAN.is_non_negative());
        assert!(!(-1i8).is_non_negative());
    }
}
