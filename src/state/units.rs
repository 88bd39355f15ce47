//! Room-inventory state for the units view.
//!
//! DESIGN
//! ======
//! The derived room list is computed once per page load; the selected
//! building and filters are the only things that change afterwards, and the
//! visible grid is recomputed from them on every render.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use crate::net::error::ApiError;
use crate::net::types::Tenant;
use crate::util::room_filter::{self, RoomFilters};
use crate::util::rooms::{self, BUILDINGS, BuildingSummary, Room};

#[derive(Clone, Debug, Default)]
pub struct UnitsState {
    pub rooms: Vec<Room>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_building: Option<String>,
    pub filters: RoomFilters,
}

impl UnitsState {
    /// Derive the room list from a tenant fetch. On failure the list stays
    /// empty and the error is kept for display.
    pub fn finish_load(&mut self, result: Result<Vec<Tenant>, ApiError>) {
        self.loading = false;
        match result {
            Ok(tenants) => {
                self.rooms = rooms::synthesize_rooms(BUILDINGS, &tenants);
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Select `building`, or clear the selection if it is already selected.
    /// Filters reset on every switch.
    pub fn toggle_building(&mut self, building: &str) {
        if self.selected_building.as_deref() == Some(building) {
            self.selected_building = None;
        } else {
            self.selected_building = Some(building.to_owned());
        }
        self.filters = RoomFilters::default();
    }

    pub fn clear_filters(&mut self) {
        self.filters = RoomFilters::default();
    }

    pub fn summary(&self, building: &str) -> BuildingSummary {
        rooms::summarize(&self.rooms, building)
    }

    /// Floor choices for the selected building.
    pub fn floor_options(&self) -> Vec<String> {
        let Some(building) = &self.selected_building else {
            return Vec::new();
        };
        let scoped: Vec<Room> = self.rooms.iter().filter(|r| &r.property == building).cloned().collect();
        rooms::floor_options(&scoped)
    }

    /// Rooms of the selected building that pass the active filters.
    pub fn visible_rooms(&self) -> Vec<Room> {
        self.selected_building
            .as_deref()
            .map_or_else(Vec::new, |b| room_filter::apply(&self.rooms, b, &self.filters))
    }
}
