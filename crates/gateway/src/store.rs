//! The gateway seam: a typed view of the remote order store.

use async_trait::async_trait;
use thiserror::Error;

use orderdesk_core::{Order, OrderId, OrderStatus};

use crate::config::ConfigError;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway failure taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Malformed local input; never reaches the network.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Non-success response, network failure, or malformed payload from the
    /// remote store.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Required remote-store credentials absent at startup.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GatewayError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Asynchronous access to the remote order store.
///
/// Implementations make exactly one attempt per call and never touch any
/// local working set; reconciliation belongs to the sync controller.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch all orders. A store that legitimately holds zero orders yields
    /// `Ok(vec![])`, not a failure.
    async fn fetch_orders(&self) -> GatewayResult<Vec<Order>>;

    /// Patch a single order's status, keyed by `order_id`.
    async fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> GatewayResult<()>;
}

/// Fail-fast input validation shared by every store implementation. Runs
/// before any network work.
pub(crate) fn validate_update(order_id: &OrderId) -> GatewayResult<()> {
    if order_id.is_blank() {
        return Err(GatewayError::invalid_request("orderId must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_order_ids_are_rejected() {
        assert_eq!(
            validate_update(&OrderId::new("")),
            Err(GatewayError::invalid_request("orderId must not be empty"))
        );
        assert_eq!(
            validate_update(&OrderId::new("  ")),
            Err(GatewayError::invalid_request("orderId must not be empty"))
        );
        assert!(validate_update(&OrderId::new("ord-1")).is_ok());
    }
}
