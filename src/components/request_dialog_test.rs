use super::*;
use crate::state::maintenance::Placement;

#[test]
fn dialog_title_follows_mode() {
    assert_eq!(dialog_title(&DialogMode::Create), "New Maintenance Request");
    assert_eq!(dialog_title(&DialogMode::Edit { id: "r1".to_owned() }), "Edit Maintenance Request");
}

#[test]
fn submit_label_covers_all_states() {
    assert_eq!(submit_label(false, false), "Submit Request");
    assert_eq!(submit_label(false, true), "Submitting…");
    assert_eq!(submit_label(true, false), "Update Request");
    assert_eq!(submit_label(true, true), "Updating…");
}

#[test]
fn placement_locks_pickers_only_for_new_requests() {
    let mut state = MaintenanceState::default();
    state.open_create("ana@example.com");
    assert!(!placement_locked(&state));

    state.apply_placement(Placement { property: "jade".to_owned(), room_number: "101".to_owned() });
    assert!(placement_locked(&state));

    state.dialog = DialogMode::Edit { id: "r1".to_owned() };
    assert!(!placement_locked(&state));
}
