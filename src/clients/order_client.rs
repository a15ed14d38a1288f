use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderStatus, OrderSubmission};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for the order/booking store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

fn newest_first(orders: &mut [Order]) {
    // Stable: storage order (newest insert first) breaks timestamp ties.
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl OrderClient {
    /// Stores the order with a fresh id and creation time. Neither the booking
    /// nor the total is checked here.
    #[instrument(skip(self, submission), fields(customer_email = %submission.customer.email))]
    pub async fn submit(&self, submission: OrderSubmission) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(submission).await?;
        info!(order_id = %order.id, total = order.total, "Order submitted");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.list().await?;
        newest_first(&mut orders);
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn list_orders_by_customer_email(&self, email: &str) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders: Vec<Order> = self
            .inner
            .list()
            .await?
            .into_iter()
            .filter(|order| order.customer.email == email)
            .collect();
        newest_first(&mut orders);
        Ok(orders)
    }

    /// Orders in storage order, unsorted. Used by projections that must see
    /// the collection as it is kept.
    #[instrument(skip(self))]
    pub async fn stored_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id.to_string(), OrderAction::SetStatus(status)).await? {
            OrderActionResult::StatusSet(order) => {
                info!(status = status.label(), "Order status changed");
                Ok(order)
            }
        }
    }

    /// Removes every order placed under this email. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn remove_by_customer_email(&self, email: &str) -> Result<usize, OrderError> {
        debug!("Sending request");
        let target = email.to_string();
        let removed = self.inner.remove_where(move |order: &Order| order.customer.email == target).await?;
        Ok(removed.len())
    }

    /// Orders grouped by booking date, earliest first; within a day by slot.
    #[instrument(skip(self))]
    pub async fn booking_schedule(&self) -> Result<BTreeMap<NaiveDate, Vec<Order>>, OrderError> {
        debug!("Sending request");
        let mut schedule: BTreeMap<NaiveDate, Vec<Order>> = BTreeMap::new();
        for order in self.inner.list().await? {
            schedule.entry(order.booking.date).or_default().push(order);
        }
        for day in schedule.values_mut() {
            day.sort_by(|a, b| a.booking.time_slot.cmp(&b.booking.time_slot));
        }
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{FrameworkError, ResourceActor};
    use crate::domain::{BookingDetails, BookingType, CustomerDetails};
    use chrono::Utc;

    fn start() -> OrderClient {
        let (actor, inner) = ResourceActor::<Order>::new("orders", 8, crate::app_system::short_id);
        tokio::spawn(actor.run());
        OrderClient::new(inner)
    }

    fn submission(email: &str, date: NaiveDate, slot: &str) -> OrderSubmission {
        OrderSubmission {
            customer: CustomerDetails::new("Cliente", email, "600000000", "Calle Mayor 1"),
            items: Vec::new(),
            total: 0.0,
            booking: BookingDetails {
                booking_type: BookingType::StorePickup,
                date,
                time_slot: slot.to_string(),
            },
            status: OrderStatus::Received,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_submit_assigns_unique_ids_and_timestamps() {
        let client = start();
        let before = Utc::now();

        let mut ids = Vec::new();
        for _ in 0..20 {
            let order = client.submit(submission("a@example.com", day(15), "09:00 - 10:00")).await.unwrap();
            assert!(order.created_at >= before);
            assert!(!ids.contains(&order.id));
            ids.push(order.id);
        }
    }

    #[tokio::test]
    async fn test_listing_by_email_is_newest_first_subset() {
        let client = start();
        let a1 = client.submit(submission("a@example.com", day(15), "09:00 - 10:00")).await.unwrap();
        client.submit(submission("b@example.com", day(15), "09:00 - 10:00")).await.unwrap();
        let a2 = client.submit(submission("a@example.com", day(16), "09:00 - 10:00")).await.unwrap();

        let mine = client.list_orders_by_customer_email("a@example.com").await.unwrap();
        let ids: Vec<_> = mine.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![a2.id, a1.id]);
        assert!(mine.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        assert!(client.list_orders_by_customer_email("A@example.com").await.unwrap().is_empty());
        assert_eq!(client.list_orders().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_any_status_transition_is_accepted() {
        let client = start();
        let order = client.submit(submission("a@example.com", day(15), "09:00 - 10:00")).await.unwrap();

        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                client.set_status(&order.id, from).await.unwrap();
                let updated = client.set_status(&order.id, to).await.unwrap();
                assert_eq!(updated.status, to, "{from:?} -> {to:?}");
            }
        }

        let err = client.set_status("missing", OrderStatus::Shipped).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("missing".into()));
    }

    #[tokio::test]
    async fn test_delete_order() {
        let client = start();
        let order = client.submit(submission("a@example.com", day(15), "09:00 - 10:00")).await.unwrap();

        client.delete_order(&order.id).await.unwrap();
        assert_eq!(client.get_order(&order.id).await.unwrap(), None);
        assert!(matches!(client.delete_order(&order.id).await, Err(OrderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_booking_schedule_groups_by_date_then_slot() {
        let client = start();
        client.submit(submission("a@example.com", day(17), "16:00 - 17:00")).await.unwrap();
        client.submit(submission("b@example.com", day(15), "11:00 - 12:00")).await.unwrap();
        client.submit(submission("c@example.com", day(17), "09:00 - 10:00")).await.unwrap();

        let schedule = client.booking_schedule().await.unwrap();
        let days: Vec<_> = schedule.keys().copied().collect();
        assert_eq!(days, vec![day(15), day(17)]);

        let slots: Vec<_> = schedule[&day(17)].iter().map(|o| o.booking.time_slot.as_str()).collect();
        assert_eq!(slots, vec!["09:00 - 10:00", "16:00 - 17:00"]);
    }

    #[tokio::test]
    async fn test_orders_only_change_through_status_action() {
        let client = start();
        let order = client.submit(submission("a@example.com", day(15), "09:00 - 10:00")).await.unwrap();

        let err = client.inner.update(order.id.clone(), ()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("orders are not patched".into()));
        let stored = client.get_order(&order.id).await.unwrap();
        assert_eq!(stored, Some(order));
    }
}
