use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::order_actor::OrderError;
use crate::user_actor::UserError;

/// Errors from the customer directory, which spans the identity and order stores.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Why a checkout could not be placed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Booking needs both a date and a time slot")]
    IncompleteBooking,
    #[error("Product {0} is out of stock")]
    OutOfStock(String),
    #[error("Booking date {date} is before {today}")]
    PastDate { date: chrono::NaiveDate, today: chrono::NaiveDate },
    #[error("Slot {slot} is not offered on {date}")]
    SlotUnavailable { date: chrono::NaiveDate, slot: String },
    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] FrameworkError),
}
