//! The order record as held by the remote content store.

use core::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of an order.
///
/// Assigned by the remote store and opaque to this core; we only require it to
/// be a non-blank string. `Ord` is derived so identical timestamps still sort
/// into a total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap a raw remote identifier without validation (wire decoding path).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("OrderId: must not be blank"));
        }
        Ok(Self(s.to_string()))
    }
}

/// Delivery status of an order.
///
/// `Delivered` is terminal: the only supported transition is into it, never
/// out of it. The remote store records status as a free-form string; anything
/// other than `"Delivered"` is treated as still pending, matching the store's
/// own `status != "Delivered"` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Terminal statuses offer no further mutation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "Delivered" {
            OrderStatus::Delivered
        } else {
            OrderStatus::Pending
        })
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Strict parse for the mutation path: only the known status names are
    /// accepted, unlike wire decoding which folds unknown values into
    /// `Pending`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Delivered" => Ok(OrderStatus::Delivered),
            other => Err(DomainError::validation(format!(
                "unknown order status: {other:?}"
            ))),
        }
    }
}

/// A customer purchase record, as fetched from the remote store.
///
/// This is a snapshot copy: the remote store is authoritative, and the core
/// never holds more than a possibly-stale view of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub customer_name: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    /// Non-negative, currency-less.
    pub amount: f64,
    pub status: OrderStatus,
    /// Used purely for display ordering.
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

/// The store sends either RFC 3339 timestamps or bare `YYYY-MM-DD` dates
/// (interpreted as midnight UTC).
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|date| {
            date.and_hms_opt(0, 0, 0)
                .expect("midnight is a valid time")
                .and_utc()
        })
        .map_err(|_| {
            serde::de::Error::custom(format!("createdAt is not a timestamp or date: {raw:?}"))
        })
}
