use chrono::Utc;
use rentora_catalog::{BookingDuration, PricingEngine, Quote};
use rentora_shared::models::events::BookingConfirmedEvent;
use rentora_store::ListingStore;
use std::sync::Arc;

use crate::booking::{Booking, BookingRequest};
use crate::payment::{CardDetails, PaymentAdapter, PaymentStatus};
use crate::{CoreError, CoreResult};

/// Quote, charge and confirm a reservation against the listing store.
pub struct CheckoutService {
    store: Arc<ListingStore>,
    pricing: PricingEngine,
    payments: Arc<dyn PaymentAdapter>,
}

impl CheckoutService {
    pub fn new(
        store: Arc<ListingStore>,
        pricing: PricingEngine,
        payments: Arc<dyn PaymentAdapter>,
    ) -> Self {
        Self {
            store,
            pricing,
            payments,
        }
    }

    pub fn quote(&self, listing_id: u32, duration: BookingDuration) -> CoreResult<Quote> {
        let listing = self
            .store
            .listing(listing_id)
            .ok_or(CoreError::NotFound(listing_id))?;
        Ok(self.pricing.quote(&listing, duration)?)
    }

    pub async fn checkout(
        &self,
        request: &BookingRequest,
        card: &CardDetails,
    ) -> CoreResult<Booking> {
        if request.date < Utc::now().date_naive() {
            return Err(CoreError::ValidationError(format!(
                "booking date {} is in the past",
                request.date
            )));
        }

        let quote = self.quote(request.listing_id, request.duration)?;
        let mut booking = Booking::pending(request, &quote);

        let intent = self
            .payments
            .process_payment(booking.id, quote.total, &quote.currency, card)
            .await?;

        if intent.status != PaymentStatus::Succeeded {
            booking.cancel();
            tracing::warn!(
                booking_id = %booking.id,
                status = ?intent.status,
                booking_status = ?booking.status,
                "Payment not captured"
            );
            return Err(CoreError::PaymentDeclined(format!(
                "payment {} finished as {:?}",
                intent.id, intent.status
            )));
        }

        booking.confirm(intent.id.clone());

        let event = BookingConfirmedEvent {
            booking_id: booking.id,
            listing_id: booking.listing_id,
            payment_id: intent.id,
            total: booking.total,
            currency: booking.currency.clone(),
            confirmed_at: Utc::now().timestamp(),
        };
        tracing::info!(?event, "Reservation confirmed");

        Ok(booking)
    }
}
