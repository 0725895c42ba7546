//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the presence overlay (cursors, reactions, chat, menus)
//! while reading and writing shared state from Leptos context providers.
//! `live::Live` is the composition root.

pub mod avatar;
pub mod context_menu;
pub mod cursor;
pub mod cursor_chat;
pub mod flying_reaction;
pub mod live;
pub mod live_cursors;
pub mod reaction_selector;
