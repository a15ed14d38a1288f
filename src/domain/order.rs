use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingDetails, CartItem, CustomerDetails};

/// Lifecycle status. Any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Received,
    Preparing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Text shown in the back office.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Recibido",
            OrderStatus::Preparing => "En preparación",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Completed => "Completado",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

/// Represents a customer order.
///
/// `customer` and `items` are snapshots taken at submission; later changes to
/// the user or the catalog do not reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: CustomerDetails,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub booking: BookingDetails,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting an order. Id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub customer: CustomerDetails,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub booking: BookingDetails,
    pub status: OrderStatus,
}

impl Order {
    pub fn from_submission(id: impl Into<String>, submission: OrderSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            customer: submission.customer,
            items: submission.items,
            total: submission.total,
            booking: submission.booking,
            status: submission.status,
            created_at,
        }
    }
}
