//! Live surface: the composition root of the presence overlay.
//!
//! ARCHITECTURE
//! ============
//! `live::engine::SurfaceCore` (provided as `RwSignal<SurfaceCore>`) owns the
//! interaction rules. This component only translates DOM input into core
//! calls and hands the resulting actions to the room sender and the host's
//! undo/redo callbacks. Window key listeners and both timers are scoped to
//! the component and released on unmount.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use live::engine::{Action, SurfaceCore};
use live::presence::Point;
use live::room::{History, dispatch};

use crate::components::context_menu::ContextMenu;
use crate::components::cursor::translate;
use crate::components::cursor_chat::CursorChat;
use crate::components::flying_reaction::FlyingReaction;
use crate::components::live_cursors::LiveCursors;
use crate::components::reaction_selector::ReactionSelector;
use crate::net::room_client::RoomSender;
use crate::util::pointer::{button_held, relative_point};
use crate::util::time::now_ms;

/// Undo/redo on the host drawing surface.
#[derive(Clone, Copy)]
struct HostHistory {
    undo: Callback<()>,
    redo: Callback<()>,
}

impl History for HostHistory {
    fn undo(&self) {
        self.undo.run(());
    }

    fn redo(&self) {
        self.redo.run(());
    }
}

#[cfg(feature = "csr")]
fn surface_point(surface: NodeRef<Div>, ev: &leptos::ev::MouseEvent) -> Point {
    match surface.get_untracked() {
        Some(el) => crate::util::pointer::event_point(ev, &el),
        None => relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), 0.0, 0.0),
    }
}

#[cfg(not(feature = "csr"))]
fn surface_point(_surface: NodeRef<Div>, ev: &leptos::ev::MouseEvent) -> Point {
    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), 0.0, 0.0)
}

/// Style for the reaction picker: at the local cursor, or the corner.
fn selector_style(cursor: Option<Point>) -> String {
    cursor.map_or_else(|| translate(0.0, 0.0), |at| translate(at.x, at.y))
}

#[component]
pub fn Live(
    on_undo: Callback<()>,
    on_redo: Callback<()>,
    #[prop(optional)] canvas_ref: NodeRef<Canvas>,
) -> impl IntoView {
    let core = expect_context::<RwSignal<SurfaceCore>>();
    let sender = expect_context::<RwSignal<RoomSender>>();
    let surface_ref = NodeRef::<Div>::new();
    let menu_at = RwSignal::new(None::<Point>);
    let history = HostHistory { undo: on_undo, redo: on_redo };

    let perform = Callback::new(move |actions: Vec<Action>| {
        if actions.is_empty() {
            return;
        }
        sender.with_untracked(|room| dispatch(actions, room, &history));
    });

    // --- Pointer ---

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let point = surface_point(surface_ref, &ev);
        let held = button_held(ev.buttons());
        let actions = core.try_update(|c| c.on_pointer_move(point, held)).unwrap_or_default();
        perform.run(actions);
    };
    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        menu_at.set(None);
        let point = surface_point(surface_ref, &ev);
        let actions = core.try_update(|c| c.on_pointer_down(point)).unwrap_or_default();
        perform.run(actions);
    };
    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        let actions = core.try_update(SurfaceCore::on_pointer_leave).unwrap_or_default();
        perform.run(actions);
    };
    let on_context_menu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_at.set(Some(surface_point(surface_ref, &ev)));
    };

    // --- Menu / picker ---

    let on_menu_item = Callback::new(move |name: String| {
        let actions = core.try_update(|c| c.on_context_menu_item(&name)).unwrap_or_default();
        perform.run(actions);
    });
    let on_select_reaction = Callback::new(move |glyph: String| {
        core.update(|c| c.select_reaction(&glyph));
    });

    // --- Keyboard and timers ---

    #[cfg(feature = "csr")]
    {
        use std::time::Duration;

        let key_up = window_event_listener(leptos::ev::keyup, move |ev| {
            let key = ev.key();
            let actions = core.try_update(|c| c.on_key_up(&key)).unwrap_or_default();
            perform.run(actions);
        });
        let key_down = window_event_listener(leptos::ev::keydown, move |ev| {
            if core.with_untracked(|c| c.on_key_down(&ev.key())) {
                ev.prevent_default();
            }
        });

        let (decay_ms, broadcast_ms) =
            core.with_untracked(|c| (c.config().decay_interval_ms, c.config().broadcast_interval_ms));

        let decay = set_interval_with_handle(
            move || {
                core.maybe_update(|c| c.decay_tick(now_ms()) > 0);
            },
            Duration::from_millis(u64::from(decay_ms)),
        );
        let broadcast = set_interval_with_handle(
            move || {
                let mut actions = Vec::new();
                core.maybe_update(|c| {
                    actions = c.broadcast_tick(now_ms());
                    !actions.is_empty()
                });
                perform.run(actions);
            },
            Duration::from_millis(u64::from(broadcast_ms)),
        );
        let decay = match decay {
            Ok(handle) => Some(handle),
            Err(e) => {
                leptos::logging::warn!("decay timer failed: {e:?}");
                None
            }
        };
        let broadcast = match broadcast {
            Ok(handle) => Some(handle),
            Err(e) => {
                leptos::logging::warn!("broadcast timer failed: {e:?}");
                None
            }
        };

        on_cleanup(move || {
            key_up.remove();
            key_down.remove();
            if let Some(handle) = decay {
                handle.clear();
            }
            if let Some(handle) = broadcast {
                handle.clear();
            }
        });
    }

    // --- Derived view state ---

    // Recomputed on core changes; the decay sweep notifies when it prunes.
    let reactions = move || core.with(|c| c.visible_reactions(now_ms()));
    let selector_open = Memo::new(move |_| core.with(|c| c.cursor_state().is_reaction_selector()));
    let selector_position = move || core.with(|c| selector_style(c.local_cursor()));
    let palette = core.with_untracked(|c| c.config().reactions.clone());
    let shortcuts = core.with_untracked(|c| c.config().shortcuts.clone());

    view! {
        <div
            class="live"
            node_ref=surface_ref
            on:pointermove=on_pointer_move
            on:pointerdown=on_pointer_down
            on:pointerleave=on_pointer_leave
            on:contextmenu=on_context_menu
        >
            <canvas class="live__canvas" node_ref=canvas_ref></canvas>

            <For
                each=reactions
                key=|record| record.id
                children=|record| view! { <FlyingReaction record=record /> }
            />

            <CursorChat on_actions=perform />

            {move || {
                selector_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="live__selector" style=selector_position>
                                <ReactionSelector reactions=palette.clone() on_select=on_select_reaction />
                            </div>
                        }
                    })
            }}

            <LiveCursors />
            <ContextMenu open=menu_at shortcuts=shortcuts on_item=on_menu_item />
        </div>
    }
}
