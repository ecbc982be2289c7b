use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use rentora_shared::Masked;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub booking_id: Uuid,
    pub amount: u32,
    pub currency: String,
    pub status: PaymentStatus,
    /// Masked card number for receipts, e.g. `****4242`
    pub card_hint: String,
    pub created_at: DateTime<Utc>,
}

/// Card form as entered on the payment page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub holder_name: String,
    pub number: Masked<String>,
    /// `MM/YY`
    pub expiry: String,
    pub cvv: Masked<String>,
}

impl CardDetails {
    pub fn validate(&self) -> CoreResult<()> {
        if self.holder_name.trim().is_empty() {
            return Err(CoreError::ValidationError("cardholder name is required".into()));
        }

        let digits = self.digits();
        if digits.len() < 12 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::ValidationError("card number must be 12-19 digits".into()));
        }

        let cvv = self.cvv.expose();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::ValidationError("CVV must be 3 or 4 digits".into()));
        }

        let (month, year) = self.parse_expiry()?;
        let today = Utc::now().date_naive();
        if (year, month) < (today.year(), today.month()) {
            return Err(CoreError::PaymentDeclined("card has expired".into()));
        }

        Ok(())
    }

    fn digits(&self) -> String {
        self.number.expose().chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn parse_expiry(&self) -> CoreResult<(u32, i32)> {
        let invalid = || CoreError::ValidationError("expiry must be MM/YY".into());

        let (mm, yy) = self.expiry.trim().split_once('/').ok_or_else(invalid)?;
        if mm.len() != 2 || yy.len() != 2 {
            return Err(invalid());
        }
        let month: u32 = mm.parse().map_err(|_| invalid())?;
        let year: i32 = yy.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok((month, 2000 + year))
    }
}

#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Charge `amount` for a booking. Resolves once the provider answers.
    async fn process_payment(
        &self,
        booking_id: Uuid,
        amount: u32,
        currency: &str,
        card: &CardDetails,
    ) -> CoreResult<PaymentIntent>;
}

/// Stand-in for a card processor: validates the form, waits a fixed delay
/// and approves.
pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl PaymentAdapter for SimulatedPaymentGateway {
    async fn process_payment(
        &self,
        booking_id: Uuid,
        amount: u32,
        currency: &str,
        card: &CardDetails,
    ) -> CoreResult<PaymentIntent> {
        card.validate()?;

        tracing::info!(%booking_id, amount, currency, card = %card.number.tail(4), "Processing simulated payment");
        tokio::time::sleep(self.delay).await;

        Ok(PaymentIntent {
            id: format!("pi_sim_{}", Uuid::new_v4().simple()),
            booking_id,
            amount,
            currency: currency.to_string(),
            status: PaymentStatus::Succeeded,
            card_hint: card.number.tail(4),
            created_at: Utc::now(),
        })
    }
}
