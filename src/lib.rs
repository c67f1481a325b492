//! Flow: bounded containers and capped transfers between them.
//!
//! Re-exports `flow-core` (units, properties, state, roles) and
//! `flow-container` (containers, limiters, transfer algebra).

pub use flow_container::{
    receive, send, transfer, ConsumeLimiter, Container, ProvideLimiter, TaggedContainer,
    TaggedProperties, TaggedState,
};
pub use flow_core::prelude::*;
pub use flow_core::{config, error};
