//! The owning bounded store.
//!
//! A `Container` keeps `0 <= fill <= capacity` at all times. Every mutator
//! clamps; none of them reject input.

use flow_core::error::Result;
use flow_core::{Consumer, ContainerConfig, Properties, Provider, State, Units};

/// A bounded quantity with a fixed capacity and a current fill.
///
/// New containers start full. Load a `State` to start anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<U> {
    properties: Properties<U>,
    fill: U,
}

impl<U: Units> Container<U> {
    pub fn new(properties: Properties<U>) -> Self {
        Self {
            fill: properties.capacity(),
            properties,
        }
    }

    /// Build a container and immediately load `state` into it (clamped).
    pub fn with_state(properties: Properties<U>, state: &State<U>) -> Self {
        let mut container = Self::new(properties);
        container.load_state(state);
        container
    }

    pub fn from_config(config: &ContainerConfig<U>) -> Result<Self> {
        let properties = config.properties()?;
        Ok(match config.initial_state() {
            Some(state) => Self::with_state(properties, &state),
            None => Self::new(properties),
        })
    }

    #[inline]
    pub fn properties(&self) -> &Properties<U> {
        &self.properties
    }

    #[inline]
    pub fn capacity(&self) -> U {
        self.properties.capacity()
    }

    /// Current fill.
    #[inline]
    pub fn available_units(&self) -> U {
        self.fill
    }

    /// Room left before the container is full.
    #[inline]
    pub fn request_units(&self) -> U {
        self.capacity() - self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.fill <= U::ZERO
    }

    pub fn is_full(&self) -> bool {
        self.fill >= self.capacity()
    }

    /// Overwrite the fill with `state.amount`, clamped to `[0, capacity]`.
    pub fn load_state(&mut self, state: &State<U>) {
        let clamped = state.amount.clamp_to(self.capacity());
        #[cfg(feature = "tracing")]
        trace_clamp(state.amount, clamped, self.capacity());
        self.fill = clamped;
    }

    /// Write the current fill into `state`.
    pub fn save_state(&self, state: &mut State<U>) {
        state.amount = self.fill;
    }

    /// Snapshot of the current fill.
    pub fn state(&self) -> State<U> {
        State::new(self.fill)
    }

    /// Remove up to `amount` units. Negative/NaN amounts remove nothing.
    pub fn provide(&mut self, amount: U) -> U {
        let removed = U::min_of(amount.non_negative(), self.fill);
        self.fill = if removed >= self.fill {
            U::ZERO
        } else {
            (self.fill - removed).non_negative()
        };
        removed
    }

    /// Add up to `amount` units. Negative/NaN amounts add nothing.
    pub fn consume(&mut self, amount: U) -> U {
        let room = self.request_units();
        let added = U::min_of(amount.non_negative(), room);
        self.fill = if added >= room {
            self.capacity()
        } else {
            U::min_of(self.fill + added, self.capacity())
        };
        added
    }
}

#[cfg(feature = "tracing")]
fn trace_clamp<U: Units>(requested: U, loaded: U, capacity: U) {
    if loaded != requested {
        tracing::debug!(?requested, ?loaded, ?capacity, "state clamped on load");
    }
}

impl<U: Units> Provider for Container<U> {
    type Units = U;

    #[inline]
    fn available_units(&self) -> U {
        Container::available_units(self)
    }

    #[inline]
    fn provide(&mut self, amount: U) -> U {
        Container::provide(self, amount)
    }
}

impl<U: Units> Consumer for Container<U> {
    type Units = U;

    #[inline]
    fn request_units(&self) -> U {
        Container::request_units(self)
    }

    #[inline]
    fn consume(&mut self, amount: U) -> U {
        Container::consume(self, amount)
    }
}
