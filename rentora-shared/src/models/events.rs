use uuid::Uuid;

use crate::pii::Masked;

/// Fired after the user-created listings change. Carries no data: observers
/// re-read the store to refresh their view.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingsUpdated;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub listing_id: u32,
    pub payment_id: String,
    pub total: u32,
    pub currency: String,
    pub confirmed_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SignedInEvent {
    pub session_id: Uuid,
    pub email: Masked<String>,
    pub signed_in_at: i64,
}
