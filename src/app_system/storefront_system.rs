use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::actor_framework::ResourceActor;
use crate::app_system::{Seed, StorefrontConfig};
use crate::checkout::Checkout;
use crate::clients::{CustomerClient, OrderClient, ProductClient, UserClient};
use crate::domain::{Order, Product, UserRecord};
use crate::error::SystemError;

/// Short random id for products and orders.
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

pub fn user_id() -> String {
    format!("user-{}", short_id())
}

/// The storefront back end: one actor per store, wired together.
///
/// The customer directory reads both the identity and the order store; the
/// other stores are independent.
pub struct StorefrontSystem {
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub order_client: OrderClient,
    pub customer_client: CustomerClient,
    pub checkout: Checkout,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns the store actors seeded with `seed`. Must run inside a tokio runtime.
    ///
    /// Every store is seeded before any actor is spawned, so a seed with
    /// duplicate ids or emails starts nothing.
    pub fn start(config: &StorefrontConfig, seed: Seed) -> Result<Self, SystemError> {
        info!(
            products = seed.products.len(),
            users = seed.users.len(),
            orders = seed.orders.len(),
            "Starting storefront system"
        );
        let buffer = config.channel_buffer;

        let (product_actor, product_inner) = ResourceActor::<Product>::new("products", buffer, short_id);
        let product_actor = product_actor.with_records(seed.products)?;
        let (user_actor, user_inner) = ResourceActor::<UserRecord>::new("users", buffer, user_id);
        let user_actor = user_actor.with_records(seed.users)?;
        let (order_actor, order_inner) = ResourceActor::<Order>::new("orders", buffer, short_id);
        let order_actor = order_actor.with_records(seed.orders)?;

        let product_handle = tokio::spawn(product_actor.run());
        let user_handle = tokio::spawn(user_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        let product_client = ProductClient::new(product_inner);
        let user_client = UserClient::new(user_inner);
        let order_client = OrderClient::new(order_inner);

        let customer_client = CustomerClient::new(user_client.clone(), order_client.clone());
        let checkout = Checkout::new(order_client.clone());

        Ok(Self {
            product_client,
            user_client,
            order_client,
            customer_client,
            checkout,
            handles: vec![product_handle, user_handle, order_handle],
        })
    }

    /// Drops this system's clients and waits for the actors to stop.
    ///
    /// Actors only stop once every client clone is gone, so callers must drop
    /// theirs first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self {
            product_client,
            user_client,
            order_client,
            customer_client,
            checkout,
            handles,
        } = self;

        // Drop clients to close channels
        drop(checkout);
        drop(customer_client);
        drop(order_client);
        drop(user_client);
        drop(product_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
