//! In-memory implementation of [`OrderStore`].
//!
//! Intended for tests/dev: holds a scripted order set, can be told to fail
//! the next calls, and counts how many requests actually reached it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use orderdesk_core::{Order, OrderId, OrderStatus};

use crate::store::{validate_update, GatewayError, GatewayResult, OrderStore};

#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    fetch_failure: Mutex<Option<GatewayError>>,
    update_failure: Mutex<Option<GatewayError>>,
    fetch_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let store = Self::new();
        store.set_orders(orders);
        store
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.lock().unwrap() = orders;
    }

    /// Fail every subsequent fetch with the given error until cleared.
    pub fn fail_fetches_with(&self, error: GatewayError) {
        *self.fetch_failure.lock().unwrap() = Some(error);
    }

    pub fn clear_fetch_failure(&self) {
        *self.fetch_failure.lock().unwrap() = None;
    }

    /// Fail every subsequent update with the given error until cleared.
    pub fn fail_updates_with(&self, error: GatewayError) {
        *self.update_failure.lock().unwrap() = Some(error);
    }

    /// Number of fetch requests that reached the store.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of update requests that reached the store. Requests rejected by
    /// fail-fast validation are not counted: they never go on the wire.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn fetch_orders(&self) -> GatewayResult<Vec<Order>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.fetch_failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self.orders.lock().unwrap().clone())
    }

    async fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> GatewayResult<()> {
        validate_update(order_id)?;
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.update_failure.lock().unwrap().clone() {
            return Err(error);
        }

        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| &o.id == order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(GatewayError::transport(format!(
                "no such order: {order_id}"
            ))),
        }
    }
}
