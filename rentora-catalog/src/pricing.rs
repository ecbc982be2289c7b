use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// Hour counts the booking card offers.
pub const HOUR_OPTIONS: [u32; 9] = [1, 2, 3, 4, 5, 6, 8, 10, 12];
pub const MAX_HOURS: u32 = 12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookingDuration {
    Hourly { hours: u32 },
    Daily,
}

impl Default for BookingDuration {
    fn default() -> Self {
        BookingDuration::Hourly { hours: 2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Service fee as a fraction of the subtotal
    pub service_fee_rate: f64,

    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            service_fee_rate: 0.10,
            currency: "INR".to_string(),
        }
    }
}

/// Price breakdown shown before payment. Amounts are whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub listing_id: u32,
    pub duration: BookingDuration,
    /// Hourly or daily rate the subtotal was computed from
    pub unit_price: u32,
    pub subtotal: u32,
    pub service_fee: u32,
    pub total: u32,
    pub currency: String,
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Rounded to the nearest rupee, halves away from zero.
    pub fn service_fee(&self, subtotal: u32) -> u32 {
        (subtotal as f64 * self.config.service_fee_rate).round() as u32
    }

    pub fn quote(&self, listing: &Listing, duration: BookingDuration) -> Result<Quote, PricingError> {
        let (unit_price, subtotal) = match duration {
            BookingDuration::Hourly { hours } => {
                if hours == 0 || hours > MAX_HOURS {
                    return Err(PricingError::InvalidHours(hours));
                }
                let subtotal = listing
                    .price_hourly
                    .checked_mul(hours)
                    .ok_or(PricingError::Overflow)?;
                (listing.price_hourly, subtotal)
            }
            BookingDuration::Daily => (listing.price_daily, listing.price_daily),
        };

        let service_fee = self.service_fee(subtotal);
        let total = subtotal
            .checked_add(service_fee)
            .ok_or(PricingError::Overflow)?;

        Ok(Quote {
            listing_id: listing.id,
            duration,
            unit_price,
            subtotal,
            service_fee,
            total,
            currency: self.config.currency.clone(),
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Hours must be between 1 and 12, got {0}")]
    InvalidHours(u32),

    #[error("Price calculation overflowed")]
    Overflow,
}
