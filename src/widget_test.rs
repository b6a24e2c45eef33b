use super::*;

// =============================================================
// Helpers
// =============================================================

const T0: f64 = 1_700_000_000_000.0;

fn core() -> WidgetCore {
    WidgetCore::new(QueueSession::new().expect("session"))
}

fn msg(user: &str, text: &str) -> ChatMessage {
    ChatMessage::new(Some(user), Some(text))
}

fn panel() -> PanelRect {
    PanelRect { left: 100.0, top: 20.0, width: 250.0, height: 300.0 }
}

// =============================================================
// Chat mutations
// =============================================================

#[test]
fn accepted_message_renders_scrolls_and_pushes() {
    let mut c = core();
    let actions = c.on_chat_mutation(Some(&msg("Alice", "!id 12345 please")), T0);
    assert_eq!(
        actions,
        vec![Action::Render, Action::ScrollToBottom, Action::Push("Alice: 12345".to_owned())]
    );
}

#[test]
fn skipped_message_produces_no_actions() {
    let mut c = core();
    assert!(c.on_chat_mutation(Some(&msg("Alice", "hello 123")), T0).is_empty());
    assert!(c.session().queue().is_empty());
}

#[test]
fn mutation_without_messages_is_ignored() {
    let mut c = core();
    assert!(c.on_chat_mutation(None, T0).is_empty());
}

#[test]
fn each_push_carries_the_full_snapshot() {
    let mut c = core();
    c.on_chat_mutation(Some(&msg("Alice", "!id 1")), T0);
    let actions = c.on_chat_mutation(Some(&msg("Bob", "!id 2")), T0);
    assert!(actions.contains(&Action::Push("Alice: 1\nBob: 2".to_owned())));
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn loaded_snapshot_renders_scrolls_and_pushes() {
    let mut c = core();
    let actions = c.on_snapshot_loaded("Dana: 42\nEve: 43");
    assert_eq!(
        actions,
        vec![Action::Render, Action::ScrollToBottom, Action::Push("Dana: 42\nEve: 43".to_owned())]
    );
    assert!(c.session().is_seen("42"));
    assert!(c.session().is_seen("43"));
}

#[test]
fn empty_or_garbage_snapshot_changes_nothing() {
    let mut c = core();
    assert!(c.on_snapshot_loaded("").is_empty());
    assert!(c.on_snapshot_loaded("\n\nnonsense\n").is_empty());
}

#[test]
fn snapshot_loaded_after_live_entries_appends() {
    let mut c = core();
    c.on_chat_mutation(Some(&msg("Alice", "!id 1")), T0);
    c.on_snapshot_loaded("Dana: 42");
    assert_eq!(c.session().snapshot(), "Alice: 1\nDana: 42");
}

// =============================================================
// Row controls
// =============================================================

#[test]
fn delete_renders_and_pushes_without_scrolling() {
    let mut c = core();
    c.on_snapshot_loaded("Dana: 42\nEve: 43");
    let first = c.session().queue().rows().next().map(|r| r.key).expect("row");
    let actions = c.on_row_action(RowAction::Delete, first);
    assert_eq!(actions, vec![Action::Render, Action::Push("Eve: 43".to_owned())]);
}

#[test]
fn deleted_id_is_accepted_again() {
    let mut c = core();
    c.on_chat_mutation(Some(&msg("Alice", "!id 999")), T0);
    let key = c.session().queue().rows().next().map(|r| r.key).expect("row");
    c.on_row_action(RowAction::Delete, key);
    assert!(!c.on_chat_mutation(Some(&msg("Bob", "!id 999")), T0 + 10.0).is_empty());
}

#[test]
fn copy_requests_clipboard_write_only() {
    let mut c = core();
    c.on_snapshot_loaded("Dana: 42");
    let key = c.session().queue().rows().next().map(|r| r.key).expect("row");
    assert_eq!(c.on_row_action(RowAction::Copy, key), vec![Action::Copy("42".to_owned())]);
}

#[test]
fn move_pushes_new_order() {
    let mut c = core();
    c.on_snapshot_loaded("Dana: 42\nEve: 43");
    let second = c.session().queue().rows().nth(1).map(|r| r.key).expect("row");
    let actions = c.on_row_action(RowAction::MoveUp, second);
    assert_eq!(actions, vec![Action::Render, Action::Push("Eve: 43\nDana: 42".to_owned())]);
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn drag_moves_panel_until_release() {
    let mut c = core();
    assert!(c.on_title_pointer_down(Point::new(110.0, 30.0), panel()));
    assert_eq!(
        c.on_pointer_move(Point::new(120.0, 40.0)),
        vec![Action::MovePanel(PanelUpdate::Move { left: 110.0, top: 30.0 })]
    );
    c.on_pointer_up();
    assert!(c.on_pointer_move(Point::new(200.0, 200.0)).is_empty());
}

#[test]
fn resize_blocks_drag_until_release() {
    let mut c = core();
    assert!(c.on_resize_pointer_down(Point::new(340.0, 310.0), panel()));
    assert!(!c.on_title_pointer_down(Point::new(110.0, 30.0), panel()));
    assert_eq!(
        c.on_pointer_move(Point::new(0.0, 0.0)),
        vec![Action::MovePanel(PanelUpdate::Resize { width: 150.0, height: 150.0 })]
    );
    c.on_pointer_up();
    assert!(c.on_title_pointer_down(Point::new(110.0, 30.0), panel()));
}

#[test]
fn pointer_move_without_gesture_is_ignored() {
    assert!(core().on_pointer_move(Point::new(1.0, 1.0)).is_empty());
}

// =============================================================
// Destroy
// =============================================================

#[test]
fn destroy_reports_first_call_only() {
    let mut c = core();
    assert!(c.destroy());
    assert!(!c.destroy());
    assert!(c.is_destroyed());
}

#[test]
fn destroyed_core_ignores_every_event() {
    let mut c = core();
    c.on_snapshot_loaded("Dana: 42");
    let key = c.session().queue().rows().next().map(|r| r.key).expect("row");
    c.destroy();

    assert!(c.on_chat_mutation(Some(&msg("Alice", "!id 1")), T0).is_empty());
    assert!(c.on_snapshot_loaded("Eve: 43").is_empty());
    assert!(c.on_row_action(RowAction::Delete, key).is_empty());
    assert!(!c.on_title_pointer_down(Point::new(110.0, 30.0), panel()));
    assert!(!c.on_resize_pointer_down(Point::new(340.0, 310.0), panel()));
    assert!(c.on_pointer_move(Point::new(1.0, 1.0)).is_empty());
    assert_eq!(c.session().snapshot(), "Dana: 42");
}

#[test]
fn destroy_ends_active_gesture() {
    let mut c = core();
    c.on_title_pointer_down(Point::new(110.0, 30.0), panel());
    c.destroy();
    assert!(!c.session().gesture.is_active());
}
