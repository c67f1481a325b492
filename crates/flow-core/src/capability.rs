//! Abstract transfer roles.
//!
//! The concrete implementations live in `flow-container`. We keep only traits
//! here so any crate can take part in a transfer without depending on the
//! container itself.

use crate::units::Units;

/// Something that can give up units: a full tank, a budget, a battery.
///
/// Implementations must keep their own fill in range: `provide` never removes
/// more than `available_units` reports, and never goes negative.
pub trait Provider {
    type Units: Units;

    /// Units that could be provided right now.
    fn available_units(&self) -> Self::Units;

    /// Remove up to `amount` units and return how many were actually removed.
    fn provide(&mut self, amount: Self::Units) -> Self::Units;
}

/// Something that can take in units up to some remaining room.
///
/// `consume` never accepts more than `request_units` reports.
pub trait Consumer {
    type Units: Units;

    /// Units that could be accepted right now.
    fn request_units(&self) -> Self::Units;

    /// Accept up to `amount` units and return how many were actually added.
    fn consume(&mut self, amount: Self::Units) -> Self::Units;
}

impl<T: Provider + ?Sized> Provider for &mut T {
    type Units = T::Units;

    #[inline]
    fn available_units(&self) -> Self::Units {
        (**self).available_units()
    }

    #[inline]
    fn provide(&mut self, amount: Self::Units) -> Self::Units {
        (**self).provide(amount)
    }
}

impl<T: Consumer + ?Sized> Consumer for &mut T {
    type Units = T::Units;

    #[inline]
    fn request_units(&self) -> Self::Units {
        (**self).request_units()
    }

    #[inline]
    fn consume(&mut self, amount: Self::Units) -> Self::Units {
        (**self).consume(amount)
    }
}

// NOTE: Do *not* add default impls here that would silently report room or
// availability. Only concrete types know their own bounds.
