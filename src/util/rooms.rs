//! Room inventory derivation from the static building list and tenant records.
//!
//! DESIGN
//! ======
//! Rooms are never persisted. Each page load synthesizes the full room list
//! from a fixed numbering scheme (ten rooms per floor) and marks a room as
//! rented when a tenant record claims the same room number in the same
//! building. Property names compare case-insensitively because tenant records
//! and form values use lowercase while the building list is capitalized.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use crate::net::types::Tenant;

/// Rooms per floor in the numbering scheme.
pub const ROOMS_PER_FLOOR: usize = 10;

/// A named property with a fixed total room count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Building {
    pub name: &'static str,
    pub total_rooms: usize,
}

/// Buildings managed by the dashboard.
pub const BUILDINGS: &[Building] = &[
    Building { name: "Lalaine", total_rooms: 28 },
    Building { name: "Jade", total_rooms: 30 },
];

/// A synthesized room with its occupancy.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub property: String,
    pub room_number: String,
    pub is_rented: bool,
    pub tenant: Option<Tenant>,
}

/// Per-building counts shown on the building cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildingSummary {
    pub total: usize,
    pub available: usize,
}

/// Room number for the 0-indexed room `index`: floor digit(s) followed by
/// the two-digit position on that floor (`0 -> "101"`, `10 -> "201"`).
pub fn room_number(index: usize) -> String {
    let floor = index / ROOMS_PER_FLOOR + 1;
    let position = index % ROOMS_PER_FLOOR + 1;
    format!("{floor}{position:02}")
}

/// All room numbers for a building with `total` rooms, in index order.
pub fn room_numbers(total: usize) -> Vec<String> {
    (0..total).map(room_number).collect()
}

/// Case-insensitive building lookup by name.
pub fn find_building<'a>(buildings: &'a [Building], name: &str) -> Option<&'a Building> {
    let name = name.trim();
    buildings.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Room numbers offered by the request form for `property`.
///
/// Unknown or empty property names yield no choices.
pub fn room_choices(buildings: &[Building], property: &str) -> Vec<String> {
    find_building(buildings, property).map_or_else(Vec::new, |b| room_numbers(b.total_rooms))
}

/// Build the flat room list for every building, marking occupancy from `tenants`.
///
/// Output order is building order, then room index order. When several
/// tenants claim the same room, the first one wins.
pub fn synthesize_rooms(buildings: &[Building], tenants: &[Tenant]) -> Vec<Room> {
    buildings
        .iter()
        .flat_map(|building| {
            (0..building.total_rooms).map(move |i| {
                let number = room_number(i);
                let tenant = tenants
                    .iter()
                    .find(|t| t.room_number == number && t.property.eq_ignore_ascii_case(building.name))
                    .cloned();
                Room {
                    property: building.name.to_owned(),
                    room_number: number,
                    is_rented: tenant.is_some(),
                    tenant,
                }
            })
        })
        .collect()
}

/// Total and available room counts for `building`.
pub fn summarize(rooms: &[Room], building: &str) -> BuildingSummary {
    rooms
        .iter()
        .filter(|r| r.property == building)
        .fold(BuildingSummary::default(), |mut acc, r| {
            acc.total += 1;
            if !r.is_rented {
                acc.available += 1;
            }
            acc
        })
}

/// Distinct floor prefixes (first character of the room number), sorted.
pub fn floor_options(rooms: &[Room]) -> Vec<String> {
    let mut floors: Vec<String> = rooms
        .iter()
        .filter_map(|r| r.room_number.chars().next())
        .map(String::from)
        .collect();
    floors.sort();
    floors.dedup();
    floors
}
