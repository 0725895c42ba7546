//! One remote participant's cursor glyph and chat bubble.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use leptos::prelude::*;

/// SVG path of the arrow glyph, drawn in a 24x36 box.
const CURSOR_PATH: &str = "M5.65376 12.3673H5.46026L5.31717 12.4976L0.500002 16.8829L0.500002 1.19841L11.7841 12.3673H5.65376Z";

#[must_use]
pub fn translate(x: f64, y: f64) -> String {
    format!("transform: translateX({x}px) translateY({y}px);")
}

/// Absolutely positioned cursor at (`x`, `y`) in `color`.
///
/// The bubble renders only for a non-empty message.
#[component]
pub fn Cursor(color: String, x: f64, y: f64, message: Option<String>) -> impl IntoView {
    let bubble = message.filter(|m| !m.is_empty()).map(|m| {
        let style = format!("background-color: {color};");
        view! {
            <div class="cursor__bubble" style=style>
                <p class="cursor__message">{m}</p>
            </div>
        }
    });

    view! {
        <div class="cursor" style=translate(x, y)>
            <svg class="cursor__glyph" width="24" height="36" viewBox="0 0 24 36" fill="none">
                <path d=CURSOR_PATH fill=color.clone() stroke="white"></path>
            </svg>
            {bubble}
        </div>
    }
}
