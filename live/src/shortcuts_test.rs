use super::*;

#[test]
fn known_names_map_to_actions() {
    assert_eq!(ContextAction::from_name("Chat"), Some(ContextAction::Chat));
    assert_eq!(ContextAction::from_name("Reactions"), Some(ContextAction::Reactions));
    assert_eq!(ContextAction::from_name("Undo"), Some(ContextAction::Undo));
    assert_eq!(ContextAction::from_name("Redo"), Some(ContextAction::Redo));
}

#[test]
fn unknown_or_miscased_names_map_to_none() {
    assert_eq!(ContextAction::from_name("chat"), None);
    assert_eq!(ContextAction::from_name(""), None);
    assert_eq!(ContextAction::from_name("Delete"), None);
}

#[test]
fn default_menu_lists_every_action_once() {
    let shortcuts = default_shortcuts();
    let actions: Vec<_> = shortcuts.iter().filter_map(Shortcut::action).collect();
    assert_eq!(
        actions,
        vec![ContextAction::Chat, ContextAction::Undo, ContextAction::Redo, ContextAction::Reactions]
    );
}

#[test]
fn default_menu_hints_match_bound_keys() {
    let shortcuts = default_shortcuts();
    assert_eq!(shortcuts[0].shortcut, "/");
    assert_eq!(shortcuts[3].shortcut, "E");
}
