//! Container configuration that callers can serialize/deserialize.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::properties::Properties;
use crate::state::State;
use crate::units::Units;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerConfig<U> {
    /// Maximum fill. Must be non-negative.
    pub capacity: U,

    /// Starting fill. Containers start full when this is absent; out-of-range
    /// values are clamped on load like any other `State`.
    #[serde(default)]
    pub initial_fill: Option<U>,
}

impl<U: Units> ContainerConfig<U> {
    /// A config for a container that starts full.
    pub fn new(capacity: U) -> Self {
        Self {
            capacity,
            initial_fill: None,
        }
    }

    pub fn with_initial_fill(mut self, fill: U) -> Self {
        self.initial_fill = Some(fill);
        self
    }

    /// Reject configs that describe an impossible container.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_non_negative() {
            return Err(Error::Config(format!(
                "capacity must be non-negative, got {:?}",
                self.capacity
            )));
        }
        Ok(())
    }

    pub fn properties(&self) -> Result<Properties<U>> {
        Properties::try_new(self.capacity)
    }

    /// Snapshot to load after construction, if any.
    pub fn initial_state(&self) -> Option<State<U>> {
        self.initial_fill.map(State::new)
    }
}

impl<U> ContainerConfig<U>
where
    U: Units + DeserializeOwned,
{
    /// Parse and validate a JSON config, e.g. `{"capacity": 255.0, "initial_fill": 0.0}`.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
