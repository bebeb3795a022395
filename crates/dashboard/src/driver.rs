//! Async driver binding the controller to an order store.

use orderdesk_core::{Order, OrderId, OrderStatus};
use orderdesk_gateway::OrderStore;

use crate::controller::{Notice, SyncController, SyncPhase, UpdateRejected};
use crate::session::SessionStatus;

/// The dashboard: a sync controller wired to a concrete [`OrderStore`].
///
/// All calls are cooperative and single-threaded; a fetch or update suspends
/// its caller without blocking other interactive work.
#[derive(Debug)]
pub struct Dashboard<S> {
    controller: SyncController,
    store: S,
}

impl<S: OrderStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            controller: SyncController::new(),
            store,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.controller.phase()
    }

    pub fn orders(&self) -> &[Order] {
        self.controller.orders()
    }

    pub fn can_mark_delivered(&self, order_id: &OrderId) -> bool {
        self.controller.can_mark_delivered(order_id)
    }

    /// Feed a session snapshot; fetches on the transition into an
    /// authenticated session.
    pub async fn on_session(&mut self, status: SessionStatus) -> Option<Notice> {
        let ticket = self.controller.on_session(status)?;
        let result = self.store.fetch_orders().await;
        let notice = self.controller.complete_fetch(ticket, result);
        log_notice(notice.as_ref());
        notice
    }

    /// Explicitly refresh the working set (no-op while a fetch is in
    /// flight).
    pub async fn refresh(&mut self) -> Option<Notice> {
        let ticket = self.controller.begin_fetch()?;
        let result = self.store.fetch_orders().await;
        let notice = self.controller.complete_fetch(ticket, result);
        log_notice(notice.as_ref());
        notice
    }

    /// Mark one order delivered, reconciling local state only once the store
    /// confirms.
    pub async fn mark_delivered(
        &mut self,
        order_id: &OrderId,
    ) -> Result<Option<Notice>, UpdateRejected> {
        let ticket = self.controller.begin_update(order_id)?;
        let result = self
            .store
            .update_status(order_id, OrderStatus::Delivered)
            .await;
        let notice = self.controller.complete_update(ticket, result);
        log_notice(notice.as_ref());
        Ok(notice)
    }
}

fn log_notice(notice: Option<&Notice>) {
    match notice {
        Some(Notice::OrdersRefreshed) => tracing::debug!("order list refreshed"),
        Some(Notice::RefreshFailed(reason)) => {
            tracing::warn!(%reason, "order refresh failed");
        }
        Some(Notice::StatusUpdated(order_id)) => {
            tracing::info!(%order_id, "order marked delivered");
        }
        Some(Notice::UpdateFailed { order_id, reason }) => {
            tracing::warn!(%order_id, %reason, "order status update failed");
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use orderdesk_gateway::{GatewayError, InMemoryOrderStore};

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn order(id: &str, status: OrderStatus, created_at: DateTime<Utc>) -> Order {
        Order {
            id: OrderId::new(id),
            customer_name: format!("customer {id}"),
            email: format!("{id}@example.com"),
            address: "somewhere".to_string(),
            postal_code: "00000".to_string(),
            amount: 10.0,
            status,
            created_at,
        }
    }

    #[tokio::test]
    async fn sign_in_fetches_once_and_publishes_sorted_orders() {
        let store = InMemoryOrderStore::with_orders(vec![
            order("2", OrderStatus::Delivered, ts(2)),
            order("1", OrderStatus::Pending, ts(1)),
        ]);
        let mut dashboard = Dashboard::new(store);

        dashboard.on_session(SessionStatus::Loading).await;
        let notice = dashboard.on_session(SessionStatus::Authenticated).await;
        assert_eq!(notice, Some(Notice::OrdersRefreshed));

        // Already authenticated: no second fetch.
        assert!(dashboard.on_session(SessionStatus::Authenticated).await.is_none());

        let ids: Vec<&str> = dashboard.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(dashboard.store.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn mark_delivered_confirms_against_the_store_then_reconciles() {
        let store = InMemoryOrderStore::with_orders(vec![order("1", OrderStatus::Pending, ts(1))]);
        let mut dashboard = Dashboard::new(store);
        dashboard.on_session(SessionStatus::Authenticated).await;

        let notice = dashboard
            .mark_delivered(&OrderId::new("1"))
            .await
            .unwrap();
        assert_eq!(notice, Some(Notice::StatusUpdated(OrderId::new("1"))));
        assert_eq!(dashboard.orders()[0].status, OrderStatus::Delivered);
        assert!(!dashboard.can_mark_delivered(&OrderId::new("1")));

        // The remote copy was patched too; a refresh agrees with the view.
        dashboard.refresh().await;
        assert_eq!(dashboard.orders()[0].status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn failed_update_surfaces_a_notice_and_changes_nothing() {
        let store = InMemoryOrderStore::with_orders(vec![order("1", OrderStatus::Pending, ts(1))]);
        store.fail_updates_with(GatewayError::transport("mutation rejected"));
        let mut dashboard = Dashboard::new(store);
        dashboard.on_session(SessionStatus::Authenticated).await;

        let before = dashboard.orders().to_vec();
        let notice = dashboard
            .mark_delivered(&OrderId::new("1"))
            .await
            .unwrap();

        assert!(matches!(notice, Some(Notice::UpdateFailed { .. })));
        assert_eq!(dashboard.orders(), &before[..]);
    }

    #[tokio::test]
    async fn refresh_failure_keeps_the_last_good_list() {
        let store = InMemoryOrderStore::with_orders(vec![order("1", OrderStatus::Pending, ts(1))]);
        let mut dashboard = Dashboard::new(store);
        dashboard.on_session(SessionStatus::Authenticated).await;

        dashboard
            .store
            .fail_fetches_with(GatewayError::transport("store unreachable"));
        let notice = dashboard.refresh().await;

        assert!(matches!(notice, Some(Notice::RefreshFailed(_))));
        assert!(matches!(dashboard.phase(), SyncPhase::Error(_)));
        assert_eq!(dashboard.orders().len(), 1);
    }

    #[tokio::test]
    async fn logout_discards_the_working_set() {
        let store = InMemoryOrderStore::with_orders(vec![order("1", OrderStatus::Pending, ts(1))]);
        let mut dashboard = Dashboard::new(store);
        dashboard.on_session(SessionStatus::Authenticated).await;
        assert_eq!(dashboard.orders().len(), 1);

        dashboard.on_session(SessionStatus::Unauthenticated).await;
        assert_eq!(dashboard.phase(), SyncPhase::Idle);
        assert!(dashboard.orders().is_empty());
    }
}
