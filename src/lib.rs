//! # Storefront
//!
//! In-process back end for a fresh-produce shop: catalog, accounts, orders
//! with delivery or pickup bookings, and the admin customer directory.
//!
//! Each store is a [`ResourceActor`](actor_framework::ResourceActor) task that
//! owns its collection, so writes to one collection never interleave. Callers
//! talk to the stores through typed clients:
//!
//! - [`ProductClient`](clients::ProductClient) - catalog CRUD
//! - [`UserClient`](clients::UserClient) - authentication and registration
//! - [`OrderClient`](clients::OrderClient) - submission, listing, status, schedule
//! - [`CustomerClient`](clients::CustomerClient) - directory built from users and orders
//! - [`Checkout`](checkout::Checkout) - cart + booking validation before submission
//!
//! [`StorefrontSystem`](app_system::StorefrontSystem) starts and wires all of them.
//!
//! ```no_run
//! use storefront::app_system::{Seed, StorefrontConfig, StorefrontSystem};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = StorefrontSystem::start(&StorefrontConfig::default(), Seed::demo(chrono::Utc::now()))?;
//! let products = system.product_client.list_products().await?;
//! let admin = system.user_client.authenticate("admin@example.com", "password").await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod availability;
pub mod checkout;
pub mod clients;
pub mod domain;
pub mod error;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
