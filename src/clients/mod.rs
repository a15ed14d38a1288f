//! Typed handles over the store actors. Every method is instrumented.

#[macro_use]
mod macros;

pub mod customer_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
