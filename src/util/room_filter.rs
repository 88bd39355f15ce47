//! Composable room filters for the units view.
//!
//! Predicates narrow the building-scoped room list in a fixed order:
//! status, floor prefix, room-number search, then the available-only toggle.

#[cfg(test)]
#[path = "room_filter_test.rs"]
mod room_filter_test;

use super::rooms::Room;

/// Occupancy filter selected in the status dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Rented,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Available, Self::Rented];

    /// Form value used by the `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Available => "available",
            Self::Rented => "rented",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Available => "Available",
            Self::Rented => "Rented",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            "rented" => Self::Rented,
            _ => Self::All,
        }
    }

    fn matches(self, room: &Room) -> bool {
        match self {
            Self::All => true,
            Self::Available => !room.is_rented,
            Self::Rented => room.is_rented,
        }
    }
}

/// Active filter values for the selected building.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomFilters {
    pub status: StatusFilter,
    /// Floor prefix; empty means every floor.
    pub floor: String,
    /// Room-number substring; empty means no search.
    pub search: String,
    pub available_only: bool,
}

impl RoomFilters {
    /// True when no predicate narrows the list.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Rooms of `building` that pass every active predicate in `filters`.
pub fn apply(rooms: &[Room], building: &str, filters: &RoomFilters) -> Vec<Room> {
    rooms
        .iter()
        .filter(|r| r.property == building)
        .filter(|r| filters.status.matches(r))
        .filter(|r| filters.floor.is_empty() || r.room_number.starts_with(filters.floor.as_str()))
        .filter(|r| filters.search.is_empty() || r.room_number.contains(filters.search.as_str()))
        .filter(|r| !filters.available_only || !r.is_rented)
        .cloned()
        .collect()
}
