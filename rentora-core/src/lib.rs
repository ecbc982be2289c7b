pub mod booking;
pub mod checkout;
pub mod identity;
pub mod payment;

pub use booking::{Booking, BookingRequest, BookingStatus};
pub use checkout::CheckoutService;
pub use identity::{Credentials, IdentityProvider, Session, SimulatedIdentityProvider};
pub use payment::{CardDetails, PaymentAdapter, PaymentIntent, PaymentStatus, SimulatedPaymentGateway};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Listing not found: {0}")]
    NotFound(u32),
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),
    #[error("Identity verification failed: {0}")]
    IdentityError(String),
    #[error("Pricing failed: {0}")]
    PricingError(#[from] rentora_catalog::PricingError),
}

pub type CoreResult<T> = Result<T, CoreError>;
