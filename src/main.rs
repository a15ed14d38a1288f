use tracing::{error, info, warn, Instrument};

use storefront::app_system::{setup_tracing, Seed, StorefrontConfig, StorefrontSystem};
use storefront::availability;
use storefront::domain::{BookingDraft, BookingType, Cart, CustomerDetails, OrderStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting storefront");

    let seed = if config.seed_demo_data { Seed::demo(chrono::Utc::now()) } else { Seed::empty() };
    let system = StorefrontSystem::start(&config, seed)?;

    let span = tracing::info_span!("registration");
    let profile = async {
        info!("Registering demo customer");
        system.user_client.register("Lucía Romero", "lucia@example.com", "fresas2024").await
    }
    .instrument(span)
    .await?;
    info!(user_id = %profile.id, "Customer registered");

    let mut cart = Cart::new();
    for product in system.product_client.list_products().await?.into_iter().take(2) {
        if let Err(e) = cart.add(product) {
            warn!(error = %e, "Skipping product");
        }
    }

    // Next day with any slot open.
    let mut date = chrono::Utc::now().date_naive();
    let slot = loop {
        date = date.succ_opt().unwrap_or(date);
        if let Some(slot) = availability::slots_for(date).first() {
            break *slot;
        }
    };
    let mut booking = BookingDraft::new(BookingType::HomeDelivery);
    booking.set_date(date);
    booking.set_time_slot(slot);

    let customer = CustomerDetails::new(profile.name.clone(), profile.email.clone(), "600111222", "Calle del Mercado 4, Sevilla");

    let span = tracing::info_span!("checkout");
    let today = chrono::Utc::now().date_naive();
    let placed = system.checkout.place_order(&cart, customer, &booking, today).instrument(span).await;

    match placed {
        Ok(order) => {
            info!(order_id = %order.id, total = order.total, "Order placed");
            let updated = system.order_client.set_status(&order.id, OrderStatus::Preparing).await?;
            info!(status = updated.status.label(), "Order moved along");
            info!(order = %serde_json::to_string(&updated)?, "Stored order");
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    for customer in system.customer_client.list_customers().await? {
        info!(email = %customer.email, phone = %customer.phone, "Customer");
    }

    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}
