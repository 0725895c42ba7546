#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn core() -> SurfaceCore {
    SurfaceCore::default()
}

fn core_with_cursor(x: f64, y: f64) -> SurfaceCore {
    let mut core = core();
    core.on_pointer_move(Point::new(x, y), false);
    core
}

fn broadcasts(actions: &[Action]) -> Vec<ReactionEvent> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Broadcast(event) => Some(event.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================
// Key transitions
// =============================================================

#[test]
fn slash_opens_chat_and_escape_closes_it() {
    let mut core = core();
    assert!(core.on_key_up("/").is_empty());
    assert_eq!(core.cursor_state(), &CursorState::chat());

    let actions = core.on_key_up("Escape");
    assert_eq!(core.cursor_state(), &CursorState::Hidden);
    assert_eq!(actions, vec![Action::UpdatePresence(PresencePatch::clear_message())]);
}

#[test]
fn escape_while_hidden_is_silent() {
    let mut core = core();
    assert!(core.on_key_up("Escape").is_empty());
    assert_eq!(core.cursor_state(), &CursorState::Hidden);
}

#[test]
fn e_opens_reaction_selector_from_hidden_and_reaction() {
    let mut core = core();
    core.on_key_up("e");
    assert_eq!(core.cursor_state(), &CursorState::ReactionSelector);

    core.select_reaction("🔥");
    core.on_key_up("e");
    assert_eq!(core.cursor_state(), &CursorState::ReactionSelector);
}

#[test]
fn escape_leaves_reaction_modes() {
    let mut core = core();
    core.on_key_up("e");
    core.on_key_up("Escape");
    assert!(core.cursor_state().is_hidden());

    core.select_reaction("👍");
    core.on_key_up("Escape");
    assert!(core.cursor_state().is_hidden());
}

#[test]
fn reaction_key_opens_selector_from_chat() {
    let mut core = core();
    core.on_key_up("/");
    core.chat_input("hello");
    assert!(core.on_key_up("e").is_empty());
    assert!(core.cursor_state().is_reaction_selector());
}

#[test]
fn chat_key_reopens_chat_with_empty_message() {
    let mut core = core();
    core.on_key_up("/");
    core.chat_input("hello");
    core.chat_key("Enter");
    assert!(core.on_key_up("/").is_empty());
    assert_eq!(core.cursor_state(), &CursorState::Chat { previous_message: None, message: String::new() });
}

#[test]
fn unbound_keys_do_nothing() {
    let mut core = core();
    for key in ["a", "E", "Enter", "Shift", " "] {
        assert!(core.on_key_up(key).is_empty());
        assert!(core.cursor_state().is_hidden());
    }
}

#[test]
fn custom_bindings_replace_defaults() {
    let config = SurfaceConfig { chat_key: "c".into(), reaction_key: "r".into(), ..SurfaceConfig::default() };
    let mut core = SurfaceCore::new(config);
    core.on_key_up("/");
    assert!(core.cursor_state().is_hidden());
    core.on_key_up("c");
    assert!(core.cursor_state().is_chat());
    core.on_key_up("Escape");
    core.on_key_up("r");
    assert!(core.cursor_state().is_reaction_selector());
}

#[test]
fn key_down_suppresses_chat_key_in_every_mode() {
    let mut core = core();
    assert!(core.on_key_down("/"));
    assert!(!core.on_key_down("e"));
    core.on_key_up("/");
    assert!(core.on_key_down("/"));
    assert!(!core.on_key_down("e"));
    core.on_key_up("e");
    assert!(core.on_key_down("/"));
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn pointer_move_publishes_every_event() {
    let mut core = core();
    for i in 0..5 {
        let p = Point::new(f64::from(i), 1.0);
        assert_eq!(core.on_pointer_move(p, false), vec![Action::UpdatePresence(PresencePatch::cursor(p))]);
    }
    assert_eq!(core.local_cursor(), Some(Point::new(4.0, 1.0)));
}

#[test]
fn pointer_move_is_suppressed_over_open_picker() {
    let mut core = core_with_cursor(10.0, 10.0);
    core.on_key_up("e");
    assert!(core.on_pointer_move(Point::new(20.0, 20.0), false).is_empty());
    assert_eq!(core.local_cursor(), Some(Point::new(10.0, 10.0)));
}

#[test]
fn pointer_move_with_picker_open_but_no_cursor_still_publishes() {
    let mut core = core();
    core.on_key_up("e");
    let actions = core.on_pointer_move(Point::new(5.0, 5.0), false);
    assert_eq!(actions.len(), 1);
    assert_eq!(core.local_cursor(), Some(Point::new(5.0, 5.0)));
}

#[test]
fn pointer_leave_hides_and_clears_presence() {
    let mut core = core_with_cursor(1.0, 1.0);
    core.on_key_up("/");
    core.chat_input("bye");
    let actions = core.on_pointer_leave();
    assert!(core.cursor_state().is_hidden());
    assert_eq!(actions, vec![Action::UpdatePresence(PresencePatch::clear_all())]);
    assert_eq!(core.presence(), &Presence::default());
}

#[test]
fn pointer_down_presses_reaction() {
    let mut core = core();
    core.select_reaction("😍");
    let actions = core.on_pointer_down(Point::new(3.0, 4.0));
    assert_eq!(actions, vec![Action::UpdatePresence(PresencePatch::cursor(Point::new(3.0, 4.0)))]);
    assert_eq!(core.cursor_state().pressed_reaction(), Some("😍"));
}

#[test]
fn drag_move_presses_reaction() {
    let mut core = core_with_cursor(0.0, 0.0);
    core.select_reaction("👀");
    core.on_pointer_move(Point::new(1.0, 1.0), false);
    assert_eq!(core.cursor_state().pressed_reaction(), None);
    core.on_pointer_move(Point::new(2.0, 2.0), true);
    assert_eq!(core.cursor_state().pressed_reaction(), Some("👀"));
}

#[test]
fn reselecting_resets_press() {
    let mut core = core_with_cursor(0.0, 0.0);
    core.select_reaction("👍");
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.select_reaction("🔥");
    assert_eq!(core.cursor_state(), &CursorState::reaction("🔥"));
}

#[test]
fn pointer_down_outside_reaction_keeps_mode() {
    let mut core = core();
    core.on_key_up("/");
    core.on_pointer_down(Point::new(1.0, 1.0));
    assert!(core.cursor_state().is_chat());
}

// =============================================================
// Context menu
// =============================================================

#[test]
fn context_menu_opens_modes_and_forwards_history() {
    let mut core = core();
    assert!(core.on_context_menu_item("Chat").is_empty());
    assert!(core.cursor_state().is_chat());
    assert!(core.on_context_menu_item("Reactions").is_empty());
    assert!(core.cursor_state().is_reaction_selector());
    assert_eq!(core.on_context_menu_item("Undo"), vec![Action::Undo]);
    assert_eq!(core.on_context_menu_item("Redo"), vec![Action::Redo]);
}

#[test]
fn unknown_context_menu_item_is_noop() {
    let mut core = core();
    core.on_key_up("e");
    assert!(core.on_context_menu_item("Share").is_empty());
    assert!(core.cursor_state().is_reaction_selector());
}

// =============================================================
// Chat box
// =============================================================

#[test]
fn chat_input_publishes_message() {
    let mut core = core();
    core.open_chat();
    let actions = core.chat_input("hi there");
    assert_eq!(actions, vec![Action::UpdatePresence(PresencePatch::message("hi there"))]);
    assert_eq!(core.presence().message.as_deref(), Some("hi there"));
}

#[test]
fn chat_input_is_capped() {
    let mut core = core();
    core.open_chat();
    let long = "x".repeat(100);
    core.chat_input(&long);
    let CursorState::Chat { message, .. } = core.cursor_state() else {
        panic!("expected chat");
    };
    assert_eq!(message.chars().count(), 60);
}

#[test]
fn chat_input_outside_chat_is_ignored() {
    let mut core = core();
    assert!(core.chat_input("stray").is_empty());
    assert_eq!(core.presence().message, None);
}

#[test]
fn enter_moves_message_to_previous() {
    let mut core = core();
    core.open_chat();
    core.chat_input("first");
    assert!(core.chat_key("Enter").is_empty());
    assert_eq!(
        core.cursor_state(),
        &CursorState::Chat { previous_message: Some("first".into()), message: String::new() }
    );
}

#[test]
fn enter_on_empty_message_keeps_previous() {
    let mut core = core();
    core.open_chat();
    core.chat_input("first");
    core.chat_key("Enter");
    core.chat_key("Enter");
    assert_eq!(
        core.cursor_state(),
        &CursorState::Chat { previous_message: Some("first".into()), message: String::new() }
    );
}

#[test]
fn typing_after_enter_clears_previous() {
    let mut core = core();
    core.open_chat();
    core.chat_input("first");
    core.chat_key("Enter");
    core.chat_input("s");
    assert_eq!(
        core.cursor_state(),
        &CursorState::Chat { previous_message: None, message: "s".into() }
    );
}

#[test]
fn chat_escape_then_window_escape_clears_once() {
    let mut core = core();
    core.open_chat();
    core.chat_input("x");
    assert_eq!(core.chat_key("Escape"), vec![Action::UpdatePresence(PresencePatch::clear_message())]);
    assert!(core.on_key_up("Escape").is_empty());
}

// =============================================================
// Timers
// =============================================================

#[test]
fn broadcast_tick_emits_one_record_and_event_when_pressed() {
    let mut core = core_with_cursor(10.0, 20.0);
    core.select_reaction("👍");
    core.on_pointer_down(Point::new(10.0, 20.0));
    for tick in 1..=5 {
        let actions = core.broadcast_tick(f64::from(tick) * 100.0);
        assert_eq!(broadcasts(&actions).len(), 1);
        assert_eq!(actions.len(), 1);
        assert_eq!(core.reactions().len(), tick as usize);
    }
}

#[test]
fn broadcast_tick_is_idle_when_unpressed() {
    let mut core = core_with_cursor(10.0, 20.0);
    core.select_reaction("👍");
    assert!(core.broadcast_tick(100.0).is_empty());
    assert!(core.reactions().is_empty());
}

#[test]
fn broadcast_tick_is_idle_without_cursor() {
    let mut core = core();
    core.select_reaction("👍");
    core.cursor.press();
    assert!(core.broadcast_tick(100.0).is_empty());
    assert!(core.reactions().is_empty());
}

#[test]
fn pointer_leave_stops_broadcasting() {
    let mut core = core_with_cursor(0.0, 0.0);
    core.select_reaction("🔥");
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_leave();
    assert!(core.broadcast_tick(100.0).is_empty());
}

#[test]
fn decay_tick_drops_expired_records() {
    let mut core = core();
    core.receive_broadcast(&ReactionEvent::new(Point::new(0.0, 0.0), "a"), 0.0);
    core.receive_broadcast(&ReactionEvent::new(Point::new(0.0, 0.0), "b"), 3_500.0);
    assert_eq!(core.decay_tick(4_000.0), 1);
    assert_eq!(core.reactions().len(), 1);
    assert_eq!(core.decay_tick(8_000.0), 1);
    assert!(core.reactions().is_empty());
}

#[test]
fn sweep_leaves_exactly_the_visible_records() {
    let mut core = core();
    core.receive_broadcast(&ReactionEvent::new(Point::new(1.0, 1.0), "👍"), 0.0);
    core.receive_broadcast(&ReactionEvent::new(Point::new(2.0, 2.0), "🔥"), 3_500.0);

    // Expired but not yet swept: hidden from the render, still stored.
    assert_eq!(core.visible_reactions(4_200.0).len(), 1);
    assert_eq!(core.reactions().len(), 2);

    assert_eq!(core.decay_tick(4_200.0), 1);
    assert_eq!(core.visible_reactions(4_200.0), core.reactions().records().to_vec());
}

#[test]
fn visible_reactions_respect_ttl_boundary() {
    let mut core = core();
    core.receive_broadcast(&ReactionEvent::new(Point::new(0.0, 0.0), "a"), 1_000.0);
    assert_eq!(core.visible_reactions(4_999.0).len(), 1);
    assert_eq!(core.visible_reactions(5_001.0).len(), 0);
}

#[test]
fn received_reaction_uses_receiver_clock() {
    let mut core = core();
    core.receive_broadcast(&ReactionEvent { x: 5.0, y: 6.0, value: "😱".into() }, 42.0);
    let record = &core.reactions().records()[0];
    assert_eq!(record.timestamp_ms, 42.0);
    assert_eq!(record.point, Point::new(5.0, 6.0));
}

// =============================================================
// Reconnect
// =============================================================

#[test]
fn presence_snapshot_replaces_every_field() {
    let mut core = core_with_cursor(7.0, 8.0);
    core.open_chat();
    core.chat_input("hey");
    let Action::UpdatePresence(patch) = core.presence_snapshot() else {
        panic!("expected presence update");
    };
    assert_eq!(patch.cursor, Some(Some(Point::new(7.0, 8.0))));
    assert_eq!(patch.message, Some(Some("hey".into())));
}

// =============================================================
// End-to-end scenario
// =============================================================

#[test]
fn fire_reaction_scenario() {
    let mut core = core_with_cursor(100.0, 50.0);

    core.on_key_up("e");
    assert_eq!(core.cursor_state(), &CursorState::ReactionSelector);

    core.select_reaction("🔥");
    assert_eq!(core.cursor_state(), &CursorState::Reaction { reaction: "🔥".into(), is_pressed: false });

    core.on_pointer_down(Point::new(100.0, 50.0));
    assert_eq!(core.cursor_state(), &CursorState::Reaction { reaction: "🔥".into(), is_pressed: true });

    let mut sent = broadcasts(&core.broadcast_tick(1_100.0));
    sent.extend(broadcasts(&core.broadcast_tick(1_200.0)));

    let expected = ReactionEvent { x: 100.0, y: 50.0, value: "🔥".into() };
    assert_eq!(sent, vec![expected.clone(), expected]);
    assert_eq!(core.reactions().len(), 2);
    for record in core.reactions().records() {
        assert_eq!(record.point, Point::new(100.0, 50.0));
        assert_eq!(record.value, "🔥");
    }
}
