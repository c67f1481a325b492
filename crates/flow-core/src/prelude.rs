//! Convenient re-exports for downstream crates.

pub use crate::capability::{Consumer, Provider};
pub use crate::config::ContainerConfig;
pub use crate::error::{Error, Result};
pub use crate::properties::Properties;
pub use crate::state::State;
pub use crate::units::{Tag, Units};
