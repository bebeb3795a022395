//! Session boundary.

/// Snapshot of the external credential gate's signal.
///
/// The gate itself (a fixed single-administrator identity check) is outside
/// this crate; the controller only consumes these snapshots, passed
/// explicitly per invocation rather than read from ambient state. Any
/// identity the gate does not recognize presents here as `Unauthenticated`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// The gate has not yet resolved the session.
    Loading,
    /// The administrator is signed in.
    Authenticated,
    /// No session, or an unrecognized identity.
    Unauthenticated,
}
