use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /api/orders`. Fields are optional so a missing one maps to a
/// 400 with the expected error body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    pub status: Option<String>,
}
