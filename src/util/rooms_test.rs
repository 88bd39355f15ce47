use super::*;

fn tenant(property: &str, room: &str, email: &str) -> Tenant {
    Tenant {
        id: format!("t-{room}"),
        email: email.to_owned(),
        name: None,
        property: property.to_owned(),
        room_number: room.to_owned(),
    }
}

// =============================================================
// Room numbering
// =============================================================

#[test]
fn room_number_first_room_is_101() {
    assert_eq!(room_number(0), "101");
}

#[test]
fn room_number_tenth_room_stays_on_first_floor() {
    assert_eq!(room_number(9), "110");
}

#[test]
fn room_number_eleventh_room_starts_second_floor() {
    assert_eq!(room_number(10), "201");
    assert_eq!(room_number(27), "308");
}

#[test]
fn room_numbers_are_unique_per_building() {
    let numbers = room_numbers(30);
    let mut deduped = numbers.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(numbers.len(), 30);
    assert_eq!(deduped.len(), 30);
}

#[test]
fn room_numbers_are_deterministic() {
    assert_eq!(room_numbers(28), room_numbers(28));
    assert_eq!(room_numbers(0), Vec::<String>::new());
}

// =============================================================
// Building lookup / room choices
// =============================================================

#[test]
fn find_building_ignores_case_and_whitespace() {
    assert_eq!(find_building(BUILDINGS, " lalaine ").map(|b| b.name), Some("Lalaine"));
    assert_eq!(find_building(BUILDINGS, "JADE").map(|b| b.total_rooms), Some(30));
    assert!(find_building(BUILDINGS, "unknown").is_none());
}

#[test]
fn room_choices_follow_building_size() {
    assert_eq!(room_choices(BUILDINGS, "lalaine").len(), 28);
    assert_eq!(room_choices(BUILDINGS, "jade").len(), 30);
    assert_eq!(room_choices(BUILDINGS, "jade").last().map(String::as_str), Some("310"));
}

#[test]
fn room_choices_empty_for_unknown_property() {
    assert!(room_choices(BUILDINGS, "").is_empty());
    assert!(room_choices(BUILDINGS, "Annex").is_empty());
}

// =============================================================
// Synthesis / occupancy
// =============================================================

#[test]
fn synthesize_rooms_covers_every_building_in_order() {
    let rooms = synthesize_rooms(BUILDINGS, &[]);
    assert_eq!(rooms.len(), 58);
    assert_eq!(rooms[0].property, "Lalaine");
    assert_eq!(rooms[0].room_number, "101");
    assert_eq!(rooms[28].property, "Jade");
    assert_eq!(rooms[28].room_number, "101");
    assert!(rooms.iter().all(|r| !r.is_rented && r.tenant.is_none()));
}

#[test]
fn synthesize_rooms_marks_matching_tenant_case_insensitively() {
    let tenants = vec![tenant("lalaine", "203", "ana@example.com")];
    let rooms = synthesize_rooms(BUILDINGS, &tenants);

    let rented: Vec<_> = rooms.iter().filter(|r| r.is_rented).collect();
    assert_eq!(rented.len(), 1);
    assert_eq!(rented[0].property, "Lalaine");
    assert_eq!(rented[0].room_number, "203");
    assert_eq!(rented[0].tenant.as_ref().map(|t| t.email.as_str()), Some("ana@example.com"));
}

#[test]
fn synthesize_rooms_does_not_cross_buildings() {
    let tenants = vec![tenant("Jade", "101", "ben@example.com")];
    let rooms = synthesize_rooms(BUILDINGS, &tenants);
    let lalaine_101 = rooms.iter().find(|r| r.property == "Lalaine" && r.room_number == "101").unwrap();
    let jade_101 = rooms.iter().find(|r| r.property == "Jade" && r.room_number == "101").unwrap();
    assert!(!lalaine_101.is_rented);
    assert!(jade_101.is_rented);
}

#[test]
fn synthesize_rooms_requires_exact_room_number() {
    let tenants = vec![tenant("Jade", "0101", "x@example.com"), tenant("Jade", "311", "y@example.com")];
    let rooms = synthesize_rooms(BUILDINGS, &tenants);
    assert!(rooms.iter().all(|r| !r.is_rented));
}

#[test]
fn synthesize_rooms_first_tenant_wins() {
    let tenants = vec![tenant("Jade", "102", "first@example.com"), tenant("jade", "102", "second@example.com")];
    let rooms = synthesize_rooms(BUILDINGS, &tenants);
    let room = rooms.iter().find(|r| r.property == "Jade" && r.room_number == "102").unwrap();
    assert_eq!(room.tenant.as_ref().map(|t| t.email.as_str()), Some("first@example.com"));
}

// =============================================================
// Summaries / floors
// =============================================================

#[test]
fn summarize_counts_total_and_available() {
    let tenants = vec![tenant("Lalaine", "101", "a@example.com"), tenant("Lalaine", "102", "b@example.com")];
    let rooms = synthesize_rooms(BUILDINGS, &tenants);
    assert_eq!(summarize(&rooms, "Lalaine"), BuildingSummary { total: 28, available: 26 });
    assert_eq!(summarize(&rooms, "Jade"), BuildingSummary { total: 30, available: 30 });
    assert_eq!(summarize(&rooms, "Nowhere"), BuildingSummary::default());
}

#[test]
fn floor_options_are_distinct_and_sorted() {
    let rooms = synthesize_rooms(&[Building { name: "Jade", total_rooms: 30 }], &[]);
    assert_eq!(floor_options(&rooms), vec!["1", "2", "3"]);
    assert!(floor_options(&[]).is_empty());
}
