//! `orderdesk-dashboard` — the session-gated sync controller.
//!
//! Owns the in-memory working set of orders, triggers a refresh on the
//! transition into an authenticated session, applies confirmed status
//! updates, and drives loading/error state for the UI.
//!
//! The state machine itself ([`SyncController`]) is pure and synchronous:
//! network effects are represented by tickets handed out when an operation
//! begins and consumed when its result arrives, so interleavings (duplicate
//! triggers, stale responses, failures) are unit-testable without I/O.
//! [`Dashboard`] binds the machine to an [`orderdesk_gateway::OrderStore`].

pub mod controller;
pub mod driver;
pub mod session;

pub use controller::{FetchTicket, Notice, SyncController, SyncPhase, UpdateRejected, UpdateTicket};
pub use driver::Dashboard;
pub use session::SessionStatus;
