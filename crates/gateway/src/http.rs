//! HTTP implementation of [`OrderStore`] against the remote content store.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use orderdesk_core::{Order, OrderId, OrderStatus};

use crate::config::RemoteStoreConfig;
use crate::store::{validate_update, GatewayError, GatewayResult, OrderStore};

/// Read query issued against the store. The store-side ordering is only a
/// convenience; the display sequence is derived locally by the ordering
/// policy.
const ORDERS_QUERY: &str = "*[_type == \"order\"] | order(status != 'Delivered', status asc)";

/// Query responses wrap the matched documents in a `result` field, which the
/// store omits when nothing matches.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Vec<Order>,
}

/// Single-attempt HTTP client for the remote order store.
#[derive(Debug, Clone)]
pub struct ContentStoreClient {
    config: RemoteStoreConfig,
    http: reqwest::Client,
}

impl ContentStoreClient {
    pub fn new(config: RemoteStoreConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OrderStore for ContentStoreClient {
    async fn fetch_orders(&self) -> GatewayResult<Vec<Order>> {
        let response = self
            .http
            .get(self.config.query_url())
            .query(&[("query", ORDERS_QUERY)])
            .bearer_auth(self.config.token())
            .send()
            .await
            .map_err(|e| GatewayError::transport(format!("order query failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::transport(format!(
                "content store returned {status} for order query"
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::transport(format!("malformed order payload: {e}")))?;

        tracing::debug!(count = body.result.len(), "fetched orders");
        Ok(body.result)
    }

    async fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> GatewayResult<()> {
        validate_update(order_id)?;

        // Single-field patch keyed by the order id.
        let mutation = json!({
            "mutations": [
                {
                    "patch": {
                        "id": order_id.as_str(),
                        "set": { "status": status.as_str() },
                    }
                }
            ]
        });

        let response = self
            .http
            .post(self.config.mutate_url())
            .bearer_auth(self.config.token())
            .json(&mutation)
            .send()
            .await
            .map_err(|e| GatewayError::transport(format!("status mutation failed: {e}")))?;

        let http_status = response.status();
        if !http_status.is_success() {
            return Err(GatewayError::transport(format!(
                "content store returned {http_status} for status mutation"
            )));
        }

        tracing::debug!(order_id = %order_id, status = %status, "order status patched");
        Ok(())
    }
}
