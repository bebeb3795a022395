//! `orderdesk-gateway` — the order gateway.
//!
//! Translates local read/update intents into remote content-store requests,
//! validates inputs before they reach the wire, and maps transport failures
//! into typed outcomes. Every call is a single attempt; retrying is the
//! caller's decision, and the gateway never mutates any locally cached copy.

pub mod config;
pub mod http;
pub mod in_memory;
pub mod store;

pub use config::{ConfigError, RemoteStoreConfig};
pub use http::ContentStoreClient;
pub use in_memory::InMemoryOrderStore;
pub use store::{GatewayError, GatewayResult, OrderStore};
