//! Layer of remote cursors projected from the room roster.

use leptos::prelude::*;
use live::engine::SurfaceCore;

use crate::components::cursor::Cursor;
use crate::state::room::RoomState;

/// Draws every other participant that has a cursor on the surface.
#[component]
pub fn LiveCursors() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let core = expect_context::<RwSignal<SurfaceCore>>();

    let views = move || {
        let palette = core.with(|c| c.config().palette.clone());
        room.with(|state| state.cursor_views(&palette))
    };

    view! {
        <div class="live-cursors">
            {move || {
                views()
                    .into_iter()
                    .map(|v| {
                        view! {
                            <Cursor color=v.color x=v.point.x y=v.point.y message=v.message />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
