//! The bundled catalog that ships with the application.

use crate::listing::{Coordinates, Listing, Review};

struct Seed {
    id: u32,
    title: &'static str,
    location: &'static str,
    category: &'static str,
    price_hourly: u32,
    price_daily: u32,
    rating: f64,
    photo: &'static str,
    description: &'static str,
    amenities: &'static [&'static str],
    host: &'static str,
    lat: f64,
    lng: f64,
}

const SEEDS: [Seed; 12] = [
    Seed {
        id: 1,
        title: "Modern Coworking Hub",
        location: "Noida",
        category: "coworking",
        price_hourly: 199,
        price_daily: 899,
        rating: 4.8,
        photo: "photo-1497366754035-f200968a6e72",
        description: "Open-plan desks a short walk from the Sector 62 metro station.",
        amenities: &["WiFi", "AC", "Power Backup", "Cafeteria"],
        host: "Ananya Sharma",
        lat: 28.6270,
        lng: 77.3727,
    },
    Seed {
        id: 2,
        title: "Boardroom with City View",
        location: "Delhi",
        category: "meeting-rooms",
        price_hourly: 899,
        price_daily: 5999,
        rating: 4.9,
        photo: "photo-1517502884422-41eaead166d4",
        description: "Twelve-seat boardroom in Connaught Place with a 75\" display.",
        amenities: &["WiFi", "AC", "Projector", "Whiteboard"],
        host: "Rohan Mehta",
        lat: 28.6315,
        lng: 77.2167,
    },
    Seed {
        id: 3,
        title: "Sunlit Content Studio",
        location: "Delhi",
        category: "studio",
        price_hourly: 1499,
        price_daily: 8999,
        rating: 4.7,
        photo: "photo-1598488035139-bdbb2231ce04",
        description: "Natural light studio in Hauz Khas for shoots and podcasts.",
        amenities: &["WiFi", "AC", "Lighting Kit", "Green Room"],
        host: "Kabir Malhotra",
        lat: 28.5494,
        lng: 77.2001,
    },
    Seed {
        id: 4,
        title: "Maker Workshop Bay",
        location: "Greater Noida",
        category: "workshop",
        price_hourly: 349,
        price_daily: 1999,
        rating: 4.5,
        photo: "photo-1581092160562-40aa08e78837",
        description: "Bench space with hand tools and a 3D printer.",
        amenities: &["Power Backup", "Tools", "Parking"],
        host: "Vikram Singh",
        lat: 28.4744,
        lng: 77.5040,
    },
    Seed {
        id: 5,
        title: "Rooftop Event Terrace",
        location: "Delhi",
        category: "event-space",
        price_hourly: 2499,
        price_daily: 14999,
        rating: 4.6,
        photo: "photo-1519167758481-83f550bb49b3",
        description: "Terrace for up to eighty guests overlooking Lodhi Garden.",
        amenities: &["Sound System", "Catering", "Parking"],
        host: "Meera Kapoor",
        lat: 28.5931,
        lng: 77.2197,
    },
    Seed {
        id: 6,
        title: "Covered Parking Slot",
        location: "Noida",
        category: "parking",
        price_hourly: 49,
        price_daily: 249,
        rating: 4.2,
        photo: "photo-1506521781263-d8422e82f27a",
        description: "Basement slot with CCTV near Sector 18 market.",
        amenities: &["CCTV", "Security"],
        host: "Arjun Verma",
        lat: 28.5708,
        lng: 77.3261,
    },
    Seed {
        id: 7,
        title: "Commercial Cloud Kitchen",
        location: "Greater Noida",
        category: "kitchen",
        price_hourly: 599,
        price_daily: 3499,
        rating: 4.4,
        photo: "photo-1556910103-1c02745aae4d",
        description: "Licensed kitchen with ovens, burners and cold storage.",
        amenities: &["Gas", "Cold Storage", "Power Backup"],
        host: "Sanjana Rao",
        lat: 28.4595,
        lng: 77.5200,
    },
    Seed {
        id: 8,
        title: "Secure Storage Unit",
        location: "Delhi",
        category: "storage",
        price_hourly: 29,
        price_daily: 149,
        rating: 4.1,
        photo: "photo-1553413077-190dd305871c",
        description: "Climate controlled unit in Okhla with 24x7 access.",
        amenities: &["CCTV", "AC"],
        host: "Farhan Ali",
        lat: 28.5355,
        lng: 77.2910,
    },
    Seed {
        id: 9,
        title: "Boutique Fitness Studio",
        location: "Noida",
        category: "fitness",
        price_hourly: 699,
        price_daily: 3999,
        rating: 4.7,
        photo: "photo-1534438327276-14e5300c3a48",
        description: "Mirrored studio with sprung floor for classes.",
        amenities: &["AC", "Sound System", "Showers"],
        host: "Nisha Gupta",
        lat: 28.5355,
        lng: 77.3910,
    },
    Seed {
        id: 10,
        title: "Soundproof Music Room",
        location: "Delhi",
        category: "music-studio",
        price_hourly: 799,
        price_daily: 4499,
        rating: 4.8,
        photo: "photo-1511379938547-c1f69419868d",
        description: "Treated rehearsal room with drum kit and amps.",
        amenities: &["AC", "Instruments", "Power Backup"],
        host: "Aditya Bose",
        lat: 28.6448,
        lng: 77.2167,
    },
    Seed {
        id: 11,
        title: "Cyclorama Photo Studio",
        location: "Noida",
        category: "photo-studio",
        price_hourly: 1199,
        price_daily: 6999,
        rating: 4.6,
        photo: "photo-1554048612-b6a482b224b8",
        description: "White infinity cove with strobes and backdrops.",
        amenities: &["WiFi", "AC", "Lighting Kit"],
        host: "Tara Iyer",
        lat: 28.5850,
        lng: 77.3100,
    },
    Seed {
        id: 12,
        title: "Training Classroom",
        location: "Greater Noida",
        category: "classroom",
        price_hourly: 449,
        price_daily: 2499,
        rating: 4.3,
        photo: "photo-1580582932707-520aed937b7b",
        description: "Thirty-seat classroom near Knowledge Park.",
        amenities: &["WiFi", "AC", "Projector"],
        host: "Deepak Yadav",
        lat: 28.4670,
        lng: 77.4900,
    },
];

fn photo_url(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&w=1200&q=80",
        photo
    )
}

impl Seed {
    fn to_listing(&self) -> Listing {
        let image = photo_url(self.photo);
        Listing {
            id: self.id,
            title: self.title.to_string(),
            location: self.location.to_string(),
            category: self.category.to_string(),
            price_hourly: self.price_hourly,
            price_daily: self.price_daily,
            rating: self.rating,
            images: vec![image.clone()],
            image,
            description: self.description.to_string(),
            amenities: self.amenities.iter().map(|a| a.to_string()).collect(),
            reviews: vec![Review {
                name: "Guest".to_string(),
                date: "2024-11-02".to_string(),
                comment: format!("Booked {} for a day, would book again.", self.title),
            }],
            host: self.host.to_string(),
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
        }
    }
}

/// Bundled listings in their fixed display order.
pub fn static_listings() -> Vec<Listing> {
    SEEDS.iter().map(Seed::to_listing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category;
    use std::collections::HashSet;

    #[test]
    fn test_static_ids_are_unique_and_ordered() {
        let listings = static_listings();
        let ids: Vec<u32> = listings.iter().map(|l| l.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();

        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|id| *id < 1000));
    }

    #[test]
    fn test_static_listings_use_known_categories() {
        for listing in static_listings() {
            assert!(
                category::find(&listing.category).is_some(),
                "unknown category {}",
                listing.category
            );
            assert_eq!(listing.images.first(), Some(&listing.image));
        }
    }
}
