#![forbid(unsafe_code)]
//! flow-core: the plain types shared by every Flow crate.
//!
//! Holds the `Units` numeric abstraction, `Properties`/`State` values and the
//! `Provider`/`Consumer` capability traits. Concrete containers, limiters and
//! the transfer algebra live in `flow-container`.

pub mod capability;
pub mod config;
pub mod error;
pub mod prelude;
pub mod properties;
pub mod state;
pub mod units;

pub use capability::{Consumer, Provider};
pub use config::ContainerConfig;
pub use error::{Error, Result};
pub use properties::Properties;
pub use state::State;
pub use units::{Tag, Units};
