pub mod category;
pub mod filter;
pub mod listing;
pub mod pricing;
pub mod seed;

pub use category::{Category, CATEGORIES};
pub use filter::{ListingFilter, PriceBand};
pub use listing::{Coordinates, Listing, ListingError, NewListing, Review};
pub use pricing::{BookingDuration, PricingConfig, PricingEngine, PricingError, Quote};
pub use seed::static_listings;
