//! The transfer primitive and its operator spellings.
//!
//! There is one operation: move `min(provider.available, consumer.request)`
//! units from a provider into a consumer. It comes in two call shapes:
//!
//! - `consumer << provider` (`receive`): fill one consumer from a sequence of
//!   providers. Evaluates to the consumer.
//! - `provider >> consumer` (`send`): drain one provider into a sequence of
//!   consumers. Evaluates to the provider.
//!
//! Each link of a chain re-reads the driving side, so
//! `&mut tank << &mut a << &mut b` tops `tank` up from `a` first and only asks
//! `b` for whatever room is left.

use std::ops::{Shl, Shr};

use flow_core::{Consumer, Provider, Units};

use crate::container::Container;
use crate::limiter::{ConsumeLimiter, ProvideLimiter};

/// Move as much as both sides allow from `provider` into `consumer`.
///
/// Returns the amount the consumer accepted. Saturated pairs (empty provider or
/// full consumer) are no-ops and return zero.
pub fn transfer<P, C>(provider: &mut P, consumer: &mut C) -> P::Units
where
    P: Provider + ?Sized,
    C: Consumer<Units = P::Units> + ?Sized,
{
    let amount = P::Units::min_of(consumer.request_units(), provider.available_units());
    if amount <= P::Units::ZERO {
        return P::Units::ZERO;
    }
    let removed = provider.provide(amount);
    let added = consumer.consume(removed);
    #[cfg(feature = "tracing")]
    tracing::trace!(?amount, ?removed, ?added, "transfer");
    added
}

/// `consumer << provider`: top up `consumer` from `provider`.
pub fn receive<'c, C, P>(consumer: &'c mut C, provider: &mut P) -> &'c mut C
where
    C: Consumer + ?Sized,
    P: Provider<Units = C::Units> + ?Sized,
{
    transfer(provider, consumer);
    consumer
}

/// `provider >> consumer`: drain `provider` into `consumer`.
pub fn send<'p, P, C>(provider: &'p mut P, consumer: &mut C) -> &'p mut P
where
    P: Provider + ?Sized,
    C: Consumer<Units = P::Units> + ?Sized,
{
    transfer(provider, consumer);
    provider
}

// ----- consumer << provider -----

impl<'a, 'r, U, P> Shl<&'r mut P> for &'a mut Container<U>
where
    U: Units,
    P: Provider<Units = U> + ?Sized,
{
    type Output = &'a mut Container<U>;

    fn shl(self, provider: &'r mut P) -> Self::Output {
        receive(self, provider)
    }
}

impl<'a, 'b, U, P> Shl<ProvideLimiter<'b, P>> for &'a mut Container<U>
where
    U: Units,
    P: Provider<Units = U> + ?Sized,
{
    type Output = &'a mut Container<U>;

    fn shl(self, mut provider: ProvideLimiter<'b, P>) -> Self::Output {
        receive(self, &mut provider)
    }
}

impl<'a, 'b, 'r, C, P> Shl<&'r mut P> for &'a mut ConsumeLimiter<'b, C>
where
    C: Consumer + ?Sized,
    P: Provider<Units = C::Units> + ?Sized,
{
    type Output = &'a mut ConsumeLimiter<'b, C>;

    fn shl(self, provider: &'r mut P) -> Self::Output {
        receive(self, provider)
    }
}

impl<'b, 'r, C, P> Shl<&'r mut P> for ConsumeLimiter<'b, C>
where
    C: Consumer + ?Sized,
    P: Provider<Units = C::Units> + ?Sized,
{
    type Output = ConsumeLimiter<'b, C>;

    fn shl(mut self, provider: &'r mut P) -> Self::Output {
        transfer(provider, &mut self);
        self
    }
}

impl<'b, 'c, C, P> Shl<ProvideLimiter<'c, P>> for ConsumeLimiter<'b, C>
where
    C: Consumer + ?Sized,
    P: Provider<Units = C::Units> + ?Sized,
{
    type Output = ConsumeLimiter<'b, C>;

    fn shl(mut self, mut provider: ProvideLimiter<'c, P>) -> Self::Output {
        transfer(&mut provider, &mut self);
        self
    }
}

// ----- provider >> consumer -----

impl<'a, 'r, U, C> Shr<&'r mut C> for &'a mut Container<U>
where
    U: Units,
    C: Consumer<Units = U> + ?Sized,
{
    type Output = &'a mut Container<U>;

    fn shr(self, consumer: &'r mut C) -> Self::Output {
        send(self, consumer)
    }
}

impl<'a, 'b, U, C> Shr<ConsumeLimiter<'b, C>> for &'a mut Container<U>
where
    U: Units,
    C: Consumer<Units = U> + ?Sized,
{
    type Output = &'a mut Container<U>;

    fn shr(self, mut consumer: ConsumeLimiter<'b, C>) -> Self::Output {
        send(self, &mut consumer)
    }
}

impl<'a, 'b, 'r, P, C> Shr<&'r mut C> for &'a mut ProvideLimiter<'b, P>
where
    P: Provider + ?Sized,
    C: Consumer<Units = P::Units> + ?Sized,
{
    type Output = &'a mut ProvideLimiter<'b, P>;

    fn shr(self, consumer: &'r mut C) -> Self::Output {
        send(self, consumer)
    }
}

impl<'b, 'r, P, C> Shr<&'r mut C> for ProvideLimiter<'b, P>
where
    P: Provider + ?Sized,
    C: Consumer<Units = P::Units> + ?Sized,
{
    type Output = ProvideLimiter<'b, P>;

    fn shr(mut self, consumer: &'r mut C) -> Self::Output {
        transfer(&mut self, consumer);
        self
    }
}

impl<'b, 'c, P, C> Shr<ConsumeLimiter<'c, C>> for ProvideLimiter<'b, P>
where
    P: Provider + ?Sized,
    C: Consumer<Units = P::Units> + ?Sized,
{
    type Output = ProvideLimiter<'b, P>;

    fn shr(mut self, mut consumer: ConsumeLimiter<'c, C>) -> Self::Output {
        transfer(&mut self, &mut consumer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::{Properties, State};

    fn tank(capacity: f32, fill: f32) -> Container<f32> {
        Container::with_state(Properties::new(capacity), &State::new(fill))
    }

    #[test]
    fn transfer_moves_the_smaller_side() {
        let mut provider = tank(10.0, 4.0);
        let mut consumer = tank(10.0, 8.0);
        assert_eq!(transfer(&mut provider, &mut consumer), 2.0);
        assert_eq!(provider.available_units(), 2.0);
        assert!(consumer.is_full());
    }

    #[test]
    fn transfer_between_saturated_sides_is_noop() {
        let mut provider = tank(10.0, 0.0);
        let mut consumer = tank(10.0, 3.0);
        assert_eq!(transfer(&mut provider, &mut consumer), 0.0);
        assert_eq!(consumer.available_units(), 3.0);
    }

    #[test]
    fn receive_returns_consumer_for_chaining() {
        let mut a = tank(10.0, 3.0);
        let mut b = tank(10.0, 10.0);
        let mut sink = tank(10.0, 0.0);
        let sink_ref = receive(&mut sink, &mut a);
        receive(sink_ref, &mut b);
        assert_eq!(a.available_units(), 0.0);
        assert_eq!(b.available_units(), 3.0);
        assert!(sink.is_full());
    }

    #[test]
    fn shl_chain_fills_from_several_providers() {
        let mut a = tank(10.0, 4.0);
        let mut b = tank(10.0, 4.0);
        let mut sink = tank(10.0, 0.0);
        let _ = &mut sink << &mut a << &mut b;
        assert_eq!(sink.available_units(), 8.0);
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn shr_chain_drains_into_several_consumers() {
        let mut source = tank(10.0, 10.0);
        let mut x = tank(10.0, 6.0);
        let mut y = tank(10.0, 6.0);
        let _ = &mut source >> &mut x >> &mut y;
        assert!(x.is_full());
        assert!(y.is_full());
        assert_eq!(source.available_units(), 2.0);
    }

    #[test]
    fn limiter_temporaries_cap_a_chain() {
        let mut a = tank(10.0, 10.0);
        let mut b = tank(10.0, 10.0);
        let mut sink = tank(20.0, 0.0);
        let limiter = ConsumeLimiter::new(&mut sink, 12.0) << &mut a << &mut b;
        assert_eq!(limiter.transferred(), 12.0);
        assert_eq!(a.available_units(), 0.0);
        assert_eq!(b.available_units(), 8.0);
    }

    #[test]
    fn limiter_to_limiter() {
        let mut source = tank(10.0, 10.0);
        let mut sink = tank(10.0, 0.0);
        let _ = ProvideLimiter::new(&mut source, 6.0) >> ConsumeLimiter::new(&mut sink, 4.0);
        assert_eq!(source.available_units(), 6.0);
        assert_eq!(sink.available_units(), 4.0);
    }
}
