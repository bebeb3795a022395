//! The sync controller state machine.

use thiserror::Error;

use orderdesk_core::{display_order, Order, OrderId, OrderStatus};
use orderdesk_gateway::GatewayResult;

use crate::session::SessionStatus;

/// Observable phase of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncPhase {
    /// No authenticated session; nothing loaded.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The working set reflects the last successful fetch.
    Ready,
    /// The last fetch failed. The previous working set, if any, is kept for
    /// display so a refresh failure does not blank the screen.
    Error(String),
}

/// Token for an in-flight fetch. Carries a monotonic sequence number so a
/// response that arrives after the controller has moved on is discarded
/// instead of overwriting newer state.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
}

/// Token for an in-flight status update.
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateTicket {
    order_id: OrderId,
}

/// User-visible outcome of a completed operation, for the UI layer to render
/// as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    OrdersRefreshed,
    RefreshFailed(String),
    StatusUpdated(OrderId),
    UpdateFailed { order_id: OrderId, reason: String },
}

/// Why an update could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateRejected {
    #[error("no order list is loaded")]
    NotReady,

    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),

    /// Delivered is terminal; the UI must not offer this action, but the
    /// controller enforces it regardless.
    #[error("order {0} is already delivered")]
    AlreadyDelivered(OrderId),
}

/// Session-gated owner of the in-memory order list.
///
/// Single-threaded and cooperative: callers interleave `begin_*` /
/// `complete_*` calls however their runtime schedules them, and the machine
/// stays consistent because each completion is checked against the tickets
/// it handed out.
#[derive(Debug, Default)]
pub struct SyncController {
    phase: Phase,
    /// The working set: a non-authoritative, possibly stale view. The remote
    /// store owns the truth.
    orders: Vec<Order>,
    /// Edge-trigger guard: set on the transition into an authenticated
    /// session, so repeated `Authenticated` signals do not refetch.
    session_active: bool,
    /// Sequence number of the fetch currently in flight, if any.
    in_flight: Option<u64>,
    next_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SyncPhase {
        match &self.phase {
            Phase::Idle => SyncPhase::Idle,
            Phase::Loading => SyncPhase::Loading,
            Phase::Ready => SyncPhase::Ready,
            Phase::Error(msg) => SyncPhase::Error(msg.clone()),
        }
    }

    /// The current display sequence.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether the UI should offer the "mark delivered" action for an order.
    pub fn can_mark_delivered(&self, order_id: &OrderId) -> bool {
        self.phase == Phase::Ready
            && self
                .orders
                .iter()
                .any(|o| &o.id == order_id && !o.status.is_terminal())
    }

    /// Feed a snapshot of the external session signal.
    ///
    /// Returns a ticket when (and only when) this snapshot is the transition
    /// into an authenticated session: the caller must then perform exactly
    /// one fetch and report back via [`complete_fetch`](Self::complete_fetch).
    pub fn on_session(&mut self, status: SessionStatus) -> Option<FetchTicket> {
        match status {
            SessionStatus::Loading => None,
            SessionStatus::Authenticated => {
                if self.session_active {
                    return None;
                }
                self.session_active = true;
                self.begin_fetch()
            }
            SessionStatus::Unauthenticated => {
                // No stale data after logout. Clearing the in-flight token
                // also voids any response still on the wire.
                self.phase = Phase::Idle;
                self.orders.clear();
                self.session_active = false;
                self.in_flight = None;
                None
            }
        }
    }

    /// Start a refresh of the working set.
    ///
    /// Returns `None` while another fetch is already in flight: duplicate
    /// triggers must not produce duplicate requests.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            return None;
        }

        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.phase = Phase::Loading;
        Some(FetchTicket { seq: self.next_seq })
    }

    /// Apply the result of a fetch.
    ///
    /// A completion whose ticket no longer matches the in-flight sequence is
    /// dropped: the controller has been reset or superseded since the request
    /// went out, and the response is stale.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: GatewayResult<Vec<Order>>,
    ) -> Option<Notice> {
        if self.in_flight != Some(ticket.seq) {
            tracing::debug!(seq = ticket.seq, "discarding stale fetch response");
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(fetched) => {
                self.orders = display_order(&fetched);
                self.phase = Phase::Ready;
                Some(Notice::OrdersRefreshed)
            }
            Err(error) => {
                // Keep the previous working set for display fallback.
                self.phase = Phase::Error(error.to_string());
                Some(Notice::RefreshFailed(error.to_string()))
            }
        }
    }

    /// Start marking an order delivered.
    ///
    /// Only allowed with a loaded list, for an order that is present and not
    /// already in its terminal state. The displayed status does not change
    /// until the server confirms.
    pub fn begin_update(&mut self, order_id: &OrderId) -> Result<UpdateTicket, UpdateRejected> {
        if self.phase != Phase::Ready {
            return Err(UpdateRejected::NotReady);
        }

        let order = self
            .orders
            .iter()
            .find(|o| &o.id == order_id)
            .ok_or_else(|| UpdateRejected::UnknownOrder(order_id.clone()))?;

        if order.status.is_terminal() {
            return Err(UpdateRejected::AlreadyDelivered(order_id.clone()));
        }

        Ok(UpdateTicket {
            order_id: order_id.clone(),
        })
    }

    /// Apply the result of a status update.
    ///
    /// On confirmed success the affected order is patched in place and the
    /// ordering policy re-applied, since the status flip moves it into the
    /// delivered partition. On failure the working set is left untouched.
    pub fn complete_update(
        &mut self,
        ticket: UpdateTicket,
        result: GatewayResult<()>,
    ) -> Option<Notice> {
        if !self.session_active {
            tracing::debug!(order_id = %ticket.order_id, "discarding update response after logout");
            return None;
        }

        match result {
            Ok(()) => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == ticket.order_id) {
                    order.status = OrderStatus::Delivered;
                }
                self.orders = display_order(&self.orders);
                Some(Notice::StatusUpdated(ticket.order_id))
            }
            Err(error) => Some(Notice::UpdateFailed {
                order_id: ticket.order_id,
                reason: error.to_string(),
            }),
        }
    }
}
