//! Flying emoji sprite for one reaction record.

#[cfg(test)]
#[path = "flying_reaction_test.rs"]
mod flying_reaction_test;

use leptos::prelude::*;
use live::reaction::ReactionRecord;

use crate::components::cursor::translate;

/// CSS class of the rise animation for a variant in `0..3`.
#[must_use]
pub fn animation_class(variant: u64) -> String {
    format!("flying-reaction flying-reaction--up{variant}")
}

/// Glyph at the record's point, rising and fading via CSS.
#[component]
pub fn FlyingReaction(record: ReactionRecord) -> impl IntoView {
    let class = animation_class(record.animation_variant());
    let style = translate(record.point.x, record.point.y);

    view! {
        <div class=class style=style>
            <div class="flying-reaction__glyph">{record.value}</div>
        </div>
    }
}
