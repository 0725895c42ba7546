//! Right-click menu listing the configured shortcuts.

use leptos::prelude::*;
use live::presence::Point;
use live::shortcuts::Shortcut;

use crate::components::cursor::translate;

/// Menu anchored at `open`'s point while it is `Some`.
///
/// Selecting an item closes the menu and reports the item name.
#[component]
pub fn ContextMenu(open: RwSignal<Option<Point>>, shortcuts: Vec<Shortcut>, on_item: Callback<String>) -> impl IntoView {
    let shortcuts = StoredValue::new(shortcuts);

    move || {
        open.get().map(|at| {
            view! {
                <div
                    class="context-menu"
                    style=translate(at.x, at.y)
                    on:pointerdown=move |ev| ev.stop_propagation()
                    on:pointermove=move |ev| ev.stop_propagation()
                >
                    {shortcuts
                        .get_value()
                        .into_iter()
                        .map(|item| {
                            let name = item.name.clone();
                            view! {
                                <button
                                    class="context-menu__item"
                                    on:click=move |_| {
                                        open.set(None);
                                        on_item.run(name.clone());
                                    }
                                >
                                    <p>{item.name}</p>
                                    <p class="context-menu__shortcut">{item.shortcut}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}
