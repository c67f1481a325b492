//! Budget decorators over a borrowed provider or consumer.
//!
//! A limiter exposes the same role as the object it wraps but never lets more
//! than its budget through, summed over every call made through it. The
//! wrapped object keeps its own invariant; the limiter only narrows the amount
//! it is asked to move. The `&'a mut` borrow ties the limiter's lifetime to
//! the wrapped object.

use flow_core::{Consumer, Provider, Units};

/// Caps the total amount provided through it.
#[derive(Debug)]
pub struct ProvideLimiter<'a, P: Provider + ?Sized> {
    source: &'a mut P,
    limit: P::Units,
    remaining: P::Units,
}

impl<'a, P: Provider + ?Sized> ProvideLimiter<'a, P> {
    /// Wrap `source` with a budget of `limit` units. A negative/NaN limit is zero.
    pub fn new(source: &'a mut P, limit: P::Units) -> Self {
        let limit = limit.non_negative();
        Self {
            source,
            limit,
            remaining: limit,
        }
    }

    /// Budget the limiter was created with.
    pub fn limit(&self) -> P::Units {
        self.limit
    }

    /// Budget still unspent.
    pub fn remaining(&self) -> P::Units {
        self.remaining
    }

    /// Total provided through this limiter so far.
    pub fn transferred(&self) -> P::Units {
        self.limit - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= P::Units::ZERO
    }

    pub fn get_ref(&self) -> &P {
        &*self.source
    }
}

impl<P: Provider + ?Sized> Provider for ProvideLimiter<'_, P> {
    type Units = P::Units;

    fn available_units(&self) -> P::Units {
        P::Units::min_of(self.source.available_units(), self.remaining)
    }

    fn provide(&mut self, amount: P::Units) -> P::Units {
        let capped = P::Units::min_of(amount.non_negative(), self.remaining);
        let removed = self.source.provide(capped);
        self.remaining = (self.remaining - removed).non_negative();
        removed
    }
}

/// Caps the total amount consumed through it.
#[derive(Debug)]
pub struct ConsumeLimiter<'a, C: Consumer + ?Sized> {
    sink: &'a mut C,
    limit: C::Units,
    remaining: C::Units,
}

impl<'a, C: Consumer + ?Sized> ConsumeLimiter<'a, C> {
    /// Wrap `sink` with a budget of `limit` units. A negative/NaN limit is zero.
    pub fn new(sink: &'a mut C, limit: C::Units) -> Self {
        let limit = limit.non_negative();
        Self {
            sink,
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> C::Units {
        self.limit
    }

    pub fn remaining(&self) -> C::Units {
        self.remaining
    }

    /// Total consumed through this limiter so far.
    pub fn transferred(&self) -> C::Units {
        self.limit - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= C::Units::ZERO
    }

    pub fn get_ref(&self) -> &C {
        &*self.sink
    }
}

impl<C: Consumer + ?Sized> Consumer for ConsumeLimiter<'_, C> {
    type Units = C::Units;

    fn request_units(&self) -> C::Units {
        C::Units::min_of(self.sink.request_units(), self.remaining)
    }

    fn consume(&mut self, amount: C::Units) -> C::Units {
        let capped = C::Units::min_of(amount.non_negative(), self.remaining);
        let added = self.sink.consume(capped);
        self.remaining = (self.remaining - added).non_negative();
        added
    }
}
