//! Identity store: credentials and roles, unique by email.

pub mod entity;
pub mod error;

pub use error::*;
