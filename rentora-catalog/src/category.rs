use serde::Serialize;

/// Sentinel used by the browse views for "no category filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: [Category; 12] = [
    Category { id: "coworking", label: "Coworking" },
    Category { id: "meeting-rooms", label: "Meeting Rooms" },
    Category { id: "studio", label: "Studios" },
    Category { id: "workshop", label: "Workshops" },
    Category { id: "event-space", label: "Event Spaces" },
    Category { id: "parking", label: "Parking" },
    Category { id: "kitchen", label: "Kitchens" },
    Category { id: "storage", label: "Storage" },
    Category { id: "fitness", label: "Fitness" },
    Category { id: "music-studio", label: "Music Studios" },
    Category { id: "photo-studio", label: "Photo Studios" },
    Category { id: "classroom", label: "Classrooms" },
];

pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Human readable form of a category id, e.g. `meeting-rooms` -> `meeting rooms`.
pub fn display_name(id: &str) -> String {
    find(id)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| id.replace('-', " "))
}
