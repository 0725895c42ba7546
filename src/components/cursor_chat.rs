//! Chat box anchored at the local cursor.
//!
//! Typing publishes the text as this participant's presence message, so
//! peers see it in the cursor bubble as it is typed. `Enter` lifts the text
//! above the input as the previous message; `Escape` closes the box.

#[cfg(test)]
#[path = "cursor_chat_test.rs"]
mod cursor_chat_test;

use leptos::prelude::*;
use live::cursor::CursorState;
use live::engine::{Action, SurfaceCore};

use crate::components::cursor::translate;

pub const PLACEHOLDER: &str = "Say something…";

/// Placeholder text, shown only until a message has been committed.
#[must_use]
pub fn placeholder(previous_message: Option<&str>) -> &'static str {
    if previous_message.is_some() { "" } else { PLACEHOLDER }
}

fn chat_fields(state: &CursorState) -> Option<(Option<String>, String)> {
    match state {
        CursorState::Chat { previous_message, message } => Some((previous_message.clone(), message.clone())),
        _ => None,
    }
}

#[component]
pub fn CursorChat(on_actions: Callback<Vec<Action>>) -> impl IntoView {
    let core = expect_context::<RwSignal<SurfaceCore>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Position and text are tracked separately so typing never rebuilds the
    // input element and drops focus.
    let is_open = Memo::new(move |_| core.with(|c| c.cursor_state().is_chat() && c.local_cursor().is_some()));
    let previous = Memo::new(move |_| core.with(|c| chat_fields(c.cursor_state()).and_then(|(prev, _)| prev)));
    let message = move || core.with(|c| chat_fields(c.cursor_state()).map(|(_, msg)| msg).unwrap_or_default());
    let position = move || core.with(|c| c.local_cursor().map(|at| translate(at.x, at.y)).unwrap_or_default());
    let max_len = move || core.with(|c| c.config().chat_max_len);

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let actions = core.try_update(|c| c.chat_input(&text)).unwrap_or_default();
        on_actions.run(actions);
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let actions = core.try_update(|c| c.chat_key(&ev.key())).unwrap_or_default();
        on_actions.run(actions);
    };

    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                leptos::logging::warn!("chat input focus failed: {e:?}");
            }
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="cursor-chat" style=position>
                <div class="cursor-chat__bubble">
                    {move || previous.get().map(|prev| view! { <div class="cursor-chat__previous">{prev}</div> })}
                    <input
                        class="cursor-chat__input"
                        node_ref=input_ref
                        maxlength=move || max_len().to_string()
                        placeholder=move || placeholder(previous.get().as_deref())
                        prop:value=message
                        on:input=on_input
                        on:keydown=on_keydown
                    />
                </div>
            </div>
        </Show>
    }
}
