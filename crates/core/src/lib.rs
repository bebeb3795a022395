//! `orderdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the order record as held by the remote content store, and the deterministic
//! policy that turns a fetched set of orders into a display sequence.

pub mod error;
pub mod order;
pub mod ordering;

pub use error::{DomainError, DomainResult};
pub use order::{Order, OrderId, OrderStatus};
pub use ordering::display_order;
