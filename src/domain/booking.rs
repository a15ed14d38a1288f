use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingType {
    HomeDelivery,
    StorePickup,
}

impl BookingType {
    /// Text shown to shoppers.
    pub fn label(self) -> &'static str {
        match self {
            BookingType::HomeDelivery => "Envío a domicilio",
            BookingType::StorePickup => "Recogida en tienda",
        }
    }
}

/// A complete delivery or pickup reservation attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub date: NaiveDate,
    pub time_slot: String,
}

/// Booking under construction at checkout. Incomplete until both a date and a
/// slot are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    booking_type: BookingType,
    date: Option<NaiveDate>,
    time_slot: Option<String>,
}

impl BookingDraft {
    pub fn new(booking_type: BookingType) -> Self {
        Self { booking_type, date: None, time_slot: None }
    }

    pub fn booking_type(&self) -> BookingType {
        self.booking_type
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    /// Switching between delivery and pickup starts the booking over.
    pub fn set_booking_type(&mut self, booking_type: BookingType) {
        if self.booking_type != booking_type {
            *self = Self::new(booking_type);
        }
    }

    /// A new date invalidates the previously chosen slot.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time_slot = None;
    }

    pub fn set_time_slot(&mut self, slot: impl Into<String>) {
        let slot = slot.into();
        self.time_slot = if slot.is_empty() { None } else { Some(slot) };
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time_slot.is_some()
    }

    pub fn to_details(&self) -> Option<BookingDetails> {
        Some(BookingDetails {
            booking_type: self.booking_type,
            date: self.date?,
            time_slot: self.time_slot.clone()?,
        })
    }
}
