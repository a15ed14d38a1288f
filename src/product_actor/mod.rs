//! Catalog store: product records managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).

pub mod entity;
pub mod error;

pub use error::*;
