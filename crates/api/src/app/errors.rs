use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderdesk_gateway::GatewayError;

pub fn gateway_error_to_response(err: GatewayError) -> axum::response::Response {
    match err {
        GatewayError::InvalidRequest(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        GatewayError::Transport(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),
        // Config problems are caught at startup; if one ever surfaces here it
        // is still a server-side failure.
        GatewayError::Config(e) => json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
