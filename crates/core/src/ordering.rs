//! Display ordering policy.

use std::cmp::Ordering;

use crate::order::Order;

/// Derive the display sequence for a fetched set of orders.
///
/// Open orders come first ("finish the open ones first"): every `Delivered`
/// order sorts after every non-`Delivered` order regardless of timestamp.
/// Within a partition, orders sort by `created_at` descending (newest first),
/// with ties broken by `id` ascending so the result is a total order. The
/// input is left untouched.
pub fn display_order(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(compare_for_display);
    sorted
}

fn compare_for_display(a: &Order, b: &Order) -> Ordering {
    a.status
        .is_terminal()
        .cmp(&b.status.is_terminal())
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderId, OrderStatus};
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

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

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn delivered_orders_sort_last() {
        let input = vec![
            order("1", OrderStatus::Pending, ts(1)),
            order("2", OrderStatus::Delivered, ts(2)),
        ];

        assert_eq!(ids(&display_order(&input)), vec!["1", "2"]);
    }

    #[test]
    fn open_orders_sort_newest_first() {
        let input = vec![
            order("old", OrderStatus::Pending, ts(1)),
            order("new", OrderStatus::Pending, ts(3)),
            order("mid", OrderStatus::Pending, ts(2)),
        ];

        assert_eq!(ids(&display_order(&input)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn timestamp_ties_break_by_id() {
        let input = vec![
            order("b", OrderStatus::Pending, ts(1)),
            order("a", OrderStatus::Pending, ts(1)),
        ];

        assert_eq!(ids(&display_order(&input)), vec!["a", "b"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![
            order("1", OrderStatus::Delivered, ts(1)),
            order("2", OrderStatus::Pending, ts(2)),
        ];
        let snapshot = input.clone();

        let _ = display_order(&input);
        assert_eq!(input, snapshot);
    }

    fn arb_order() -> impl Strategy<Value = Order> {
        (
            "[a-z0-9]{1,8}",
            prop_oneof![Just(OrderStatus::Pending), Just(OrderStatus::Delivered)],
            1u32..=28,
        )
            .prop_map(|(id, status, day)| order(&id, status, ts(day)))
    }

    proptest! {
        #[test]
        fn sort_is_idempotent(orders in prop::collection::vec(arb_order(), 0..20)) {
            let once = display_order(&orders);
            let twice = display_order(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn delivered_partition_is_contiguous_and_last(
            orders in prop::collection::vec(arb_order(), 0..20)
        ) {
            let sorted = display_order(&orders);
            let first_delivered = sorted
                .iter()
                .position(|o| o.status.is_terminal())
                .unwrap_or(sorted.len());
            for o in &sorted[first_delivered..] {
                prop_assert!(o.status.is_terminal());
            }
        }

        #[test]
        fn sort_is_independent_of_input_order(
            orders in prop::collection::vec(arb_order(), 0..20),
        ) {
            let mut reversed = orders.clone();
            reversed.reverse();
            prop_assert_eq!(display_order(&orders), display_order(&reversed));
        }
    }
}
