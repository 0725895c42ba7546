//! Floating picker of reaction glyphs.

use leptos::prelude::*;

/// Row of glyph buttons. Choosing one arms it as the active reaction.
///
/// Pointer moves over the picker are stopped here so they do not publish
/// cursor positions from under it.
#[component]
pub fn ReactionSelector(reactions: Vec<String>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="reaction-selector" on:pointermove=move |ev| ev.stop_propagation()>
            {reactions
                .into_iter()
                .map(|glyph| {
                    let value = glyph.clone();
                    view! {
                        <button class="reaction-selector__button" on:click=move |_| on_select.run(value.clone())>
                            {glyph}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
