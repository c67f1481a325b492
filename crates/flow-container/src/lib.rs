#![forbid(unsafe_code)]
//! flow-container: bounded containers and the transfer algebra.
//!
//! This crate provides concrete implementations of the `Provider`/`Consumer`
//! roles defined in `flow-core::capability`: the owning `Container` and the
//! two borrowing limiters. Transfers between any provider/consumer pair go
//! through `transfer::transfer` or the `<<`/`>>` operators built on it.
//!
//! Everything here is synchronous, single-threaded and total: out-of-range
//! amounts saturate instead of failing.

pub mod container;
pub mod limiter;
pub mod transfer;

pub use container::Container;
pub use limiter::{ConsumeLimiter, ProvideLimiter};
pub use transfer::{receive, send, transfer};

use flow_core::{Properties, State, Tag};

/// Container whose unit type is chosen by a domain tag.
pub type TaggedContainer<T> = Container<<T as Tag>::Units>;
/// Properties whose unit type is chosen by a domain tag.
pub type TaggedProperties<T> = Properties<<T as Tag>::Units>;
/// State whose unit type is chosen by a domain tag.
pub type TaggedState<T> = State<<T as Tag>::Units>;
