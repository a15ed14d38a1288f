use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::availability;
use crate::clients::OrderClient;
use crate::domain::{BookingDraft, Cart, CustomerDetails, Order, OrderStatus, OrderSubmission};
use crate::error::CheckoutError;

/// Turns a cart and a booking into a submitted order.
///
/// The order store accepts whatever it is given, so the checks live here:
/// the cart has lines, the booking is complete, its date is not before
/// `today` and its slot is offered on that date. The total is computed from
/// the same snapshot that is stored.
#[derive(Clone)]
pub struct Checkout {
    order_client: OrderClient,
}

impl Checkout {
    pub fn new(order_client: OrderClient) -> Self {
        Self { order_client }
    }

    #[instrument(skip_all, fields(customer_email = %customer.email))]
    pub async fn place_order(
        &self,
        cart: &Cart,
        customer: CustomerDetails,
        draft: &BookingDraft,
        today: NaiveDate,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            warn!("Checkout with empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let booking = draft.to_details().ok_or(CheckoutError::IncompleteBooking)?;
        if booking.date < today {
            warn!(date = %booking.date, %today, "Booking date in the past");
            return Err(CheckoutError::PastDate { date: booking.date, today });
        }
        if !availability::is_offered(booking.date, &booking.time_slot) {
            warn!(date = %booking.date, slot = %booking.time_slot, "Slot not offered");
            return Err(CheckoutError::SlotUnavailable {
                date: booking.date,
                slot: booking.time_slot,
            });
        }

        let items = cart.snapshot();
        let total: f64 = items.iter().map(|item| item.line_total()).sum();
        let submission = OrderSubmission {
            customer,
            items,
            total,
            booking,
            status: OrderStatus::Received,
        };

        let order = self.order_client.submit(submission).await?;
        info!(order_id = %order.id, "Checkout complete");
        Ok(order)
    }
}
