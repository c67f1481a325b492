//! Detached fill snapshot.

use serde::{Deserialize, Serialize};

/// A fill level with no capacity attached.
///
/// Nothing is validated here: whichever container loads the state clamps the
/// amount to its own `[0, capacity]` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct State<U> {
    pub amount: U,
}

impl<U: Copy> State<U> {
    pub fn new(amount: U) -> Self {
        Self { amount }
    }

    #[inline]
    pub fn amount(&self) -> U {
        self.amount
    }
}

impl<U> From<U> for State<U> {
    fn from(amount: U) -> Self {
        Self { amount }
    }
}
