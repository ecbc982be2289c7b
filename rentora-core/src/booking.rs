use chrono::{DateTime, NaiveDate, Utc};
use rentora_catalog::{BookingDuration, Quote};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// What the booking card hands to checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub listing_id: u32,
    pub date: NaiveDate,
    pub duration: BookingDuration,
}

impl BookingRequest {
    /// Booking card defaults: two hours, today.
    pub fn for_listing(listing_id: u32) -> Self {
        Self {
            listing_id,
            date: Utc::now().date_naive(),
            duration: BookingDuration::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub listing_id: u32,
    pub date: NaiveDate,
    pub duration: BookingDuration,
    pub subtotal: u32,
    pub service_fee: u32,
    pub total: u32,
    pub currency: String,
    pub status: BookingStatus,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn pending(request: &BookingRequest, quote: &Quote) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id: request.listing_id,
            date: request.date,
            duration: request.duration,
            subtotal: quote.subtotal,
            service_fee: quote.service_fee,
            total: quote.total,
            currency: quote.currency.clone(),
            status: BookingStatus::Pending,
            payment_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn confirm(&mut self, payment_id: String) {
        self.payment_id = Some(payment_id);
        self.status = BookingStatus::Confirmed;
    }

    /// Only a pending booking can be cancelled. Returns whether it was.
    pub fn cancel(&mut self) -> bool {
        if self.status != BookingStatus::Pending {
            return false;
        }
        self.status = BookingStatus::Cancelled;
        true
    }
}
