use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use orderdesk_core::{OrderId, OrderStatus};
use orderdesk_gateway::OrderStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/api/orders", get(list_orders).put(update_order))
}

pub async fn list_orders(
    Extension(store): Extension<Arc<dyn OrderStore>>,
) -> axum::response::Response {
    match store.fetch_orders().await {
        Ok(orders) => Json(orders).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "order fetch failed");
            errors::gateway_error_to_response(e)
        }
    }
}

pub async fn update_order(
    Extension(store): Extension<Arc<dyn OrderStore>>,
    Json(body): Json<dto::UpdateOrderRequest>,
) -> axum::response::Response {
    let (Some(order_id), Some(raw_status)) = (body.order_id, body.status) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Missing orderId or status");
    };

    let status: OrderStatus = match raw_status.parse() {
        Ok(s) => s,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    // An empty-but-present orderId passes through so the gateway's own
    // fail-fast validation rejects it before any network call.
    let order_id = OrderId::new(order_id);

    match store.update_status(&order_id, status).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, order_id = %order_id, "order update failed");
            errors::gateway_error_to_response(e)
        }
    }
}
