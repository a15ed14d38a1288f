//! Plain data shapes shared by every store. No actor concerns live here.

pub mod booking;
pub mod cart;
pub mod customer;
pub mod order;
pub mod product;
pub mod user;

pub use booking::*;
pub use cart::*;
pub use customer::*;
pub use order::*;
pub use product::*;
pub use user::*;
