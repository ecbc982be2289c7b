use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::ALL;
use crate::listing::Listing;

pub const LOCATIONS: [&str; 3] = ["Delhi", "Noida", "Greater Noida"];

/// Hourly price bands offered by the browse sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBand {
    Under500,
    From500To2000,
    Over2000,
}

impl PriceBand {
    pub fn contains(&self, price_hourly: u32) -> bool {
        match self {
            PriceBand::Under500 => price_hourly < 500,
            PriceBand::From500To2000 => (500..=2000).contains(&price_hourly),
            PriceBand::Over2000 => price_hourly > 2000,
        }
    }
}

impl FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under-500" => Ok(PriceBand::Under500),
            "500-2000" | "from-500-to-2000" => Ok(PriceBand::From500To2000),
            "2000+" | "over-2000" => Ok(PriceBand::Over2000),
            other => Err(format!(
                "unknown price band '{}', expected under-500, 500-2000 or 2000+",
                other
            )),
        }
    }
}

/// Browse criteria. `None` (or the `all` category sentinel) matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    pub category: Option<String>,
    pub location: Option<String>,
    pub price_band: Option<PriceBand>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL) => true,
            Some(category) => listing.category == category,
        };
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |location| listing.location == location);
        let price_ok = self
            .price_band
            .map_or(true, |band| band.contains(listing.price_hourly));

        category_ok && location_ok && price_ok
    }

    /// Keep matching listings, preserving input order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::static_listings;

    #[test]
    fn test_price_band_edges() {
        assert!(PriceBand::Under500.contains(499));
        assert!(!PriceBand::Under500.contains(500));
        assert!(PriceBand::From500To2000.contains(500));
        assert!(PriceBand::From500To2000.contains(2000));
        assert!(PriceBand::Over2000.contains(2001));
        assert_eq!("2000+".parse::<PriceBand>(), Ok(PriceBand::Over2000));
        assert!("cheap".parse::<PriceBand>().is_err());
    }

    #[test]
    fn test_all_category_matches_everything() {
        let listings = static_listings();
        let filter = ListingFilter {
            category: Some(ALL.to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&listings).len(), listings.len());
    }

    #[test]
    fn test_combined_filter_preserves_order() {
        let listings = static_listings();
        let filter = ListingFilter {
            category: None,
            location: Some("Noida".to_string()),
            price_band: Some(PriceBand::Under500),
        };

        let matched = filter.apply(&listings);
        assert!(!matched.is_empty());
        assert!(matched
            .iter()
            .all(|l| l.location == "Noida" && l.price_hourly < 500));
        assert!(matched.windows(2).all(|w| w[0].id < w[1].id));
    }
}
