use serde::{Deserialize, Serialize};

use crate::category;

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=1200&q=80";
pub const PLACEHOLDER_DESCRIPTION: &str = "No description provided yet.";
pub const PLACEHOLDER_HOST: &str = "New Host";
pub const DEFAULT_AMENITIES: [&str; 2] = ["WiFi", "AC"];

/// Daily rate used when the lister only sets an hourly one.
pub const DAILY_RATE_HOURS: u32 = 4;

/// Fallback pin for listings created without a map position (central Delhi).
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    lat: 28.6139,
    lng: 77.2090,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub name: String,
    pub date: String,
    pub comment: String,
}

/// A rentable space. Field names serialize in camelCase, which is the
/// layout of the persisted user-created subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub category: String,
    pub price_hourly: u32,
    pub price_daily: u32,
    pub rating: f64,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub host: String,
    pub coordinates: Coordinates,
}

/// Payload collected by the creation flow. Everything except the identifier;
/// optional fields fall back to the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub location: String,
    pub category: String,
    pub price_hourly: u32,
    pub price_daily: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub host: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub coordinates: Option<Coordinates>,
}

impl NewListing {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        price_hourly: u32,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            location: location.into(),
            price_hourly,
            ..Default::default()
        }
    }

    /// Same gating as the listing wizard: basic info, a location and a known
    /// category are required before submit.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.title.trim().is_empty() {
            return Err(ListingError::MissingField("title"));
        }
        if self.location.trim().is_empty() {
            return Err(ListingError::MissingField("location"));
        }
        if self.category.trim().is_empty() {
            return Err(ListingError::MissingField("category"));
        }
        if category::find(&self.category).is_none() {
            return Err(ListingError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }

    /// Validate, apply defaults and attach the assigned identifier.
    pub fn into_listing(self, id: u32) -> Result<Listing, ListingError> {
        self.validate()?;

        let price_daily = match self.price_daily {
            Some(daily) => daily,
            None => self
                .price_hourly
                .checked_mul(DAILY_RATE_HOURS)
                .ok_or(ListingError::PriceOverflow(self.price_hourly))?,
        };

        let supplied_image = self.image.filter(|i| !i.trim().is_empty());
        let images = supplied_image.iter().cloned().collect();

        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            location: self.location.trim().to_string(),
            category: self.category,
            price_hourly: self.price_hourly,
            price_daily,
            rating: 0.0,
            image: supplied_image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            images,
            description: self
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
            amenities: self
                .amenities
                .unwrap_or_else(|| DEFAULT_AMENITIES.iter().map(|a| a.to_string()).collect()),
            reviews: Vec::new(),
            host: self
                .host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_HOST.to_string()),
            coordinates: self.coordinates.unwrap_or(FALLBACK_COORDINATES),
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Daily rate overflows for hourly price {0}")]
    PriceOverflow(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let listing = NewListing::new("Studio X", "studio", "Noida", 500)
            .into_listing(1000)
            .unwrap();

        assert_eq!(listing.id, 1000);
        assert_eq!(listing.price_daily, 2000);
        assert_eq!(listing.rating, 0.0);
        assert_eq!(listing.amenities, vec!["WiFi", "AC"]);
        assert_eq!(listing.image, PLACEHOLDER_IMAGE);
        assert!(listing.images.is_empty());
        assert_eq!(listing.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(listing.host, PLACEHOLDER_HOST);
        assert_eq!(listing.coordinates, FALLBACK_COORDINATES);
        assert!(listing.reviews.is_empty());
    }

    #[test]
    fn test_explicit_values_preserved() {
        let mut draft = NewListing::new("Loft", "coworking", "Delhi", 300);
        draft.price_daily = Some(1999);
        draft.image = Some("data:image/png;base64,AAAA".to_string());
        draft.amenities = Some(vec!["Parking".to_string()]);

        let listing = draft.into_listing(1001).unwrap();
        assert_eq!(listing.price_daily, 1999);
        assert_eq!(listing.image, "data:image/png;base64,AAAA");
        assert_eq!(listing.images, vec!["data:image/png;base64,AAAA"]);
        assert_eq!(listing.amenities, vec!["Parking"]);
    }

    #[test]
    fn test_validation_rejects_incomplete_payload() {
        let missing_title = NewListing::new("  ", "studio", "Delhi", 100);
        assert_eq!(
            missing_title.validate(),
            Err(ListingError::MissingField("title"))
        );

        let unknown = NewListing::new("Roof", "rooftop", "Delhi", 100);
        assert_eq!(
            unknown.validate(),
            Err(ListingError::UnknownCategory("rooftop".to_string()))
        );
    }

    #[test]
    fn test_camel_case_layout() {
        let listing = NewListing::new("Studio X", "studio", "Noida", 500)
            .into_listing(1000)
            .unwrap();
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["priceHourly"], 500);
        assert_eq!(json["priceDaily"], 2000);
        assert!(json.get("price_hourly").is_none());
    }
}
