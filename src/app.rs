//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use live::config::SurfaceConfig;
use live::engine::SurfaceCore;

use crate::components::avatar::AvatarStack;
use crate::components::live::Live;
use crate::net::room_client::RoomSender;
use crate::state::room::{ConnectionStatus, RoomState};

#[cfg(feature = "csr")]
fn initial_config() -> SurfaceConfig {
    crate::util::config::load_config()
}

#[cfg(not(feature = "csr"))]
fn initial_config() -> SurfaceConfig {
    SurfaceConfig::default()
}

/// Root application component.
///
/// Provides the room, surface core, and room sender contexts, starts the
/// room client in the browser, and lays out the header over the surface.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let room = RwSignal::new(RoomState::default());
    let core = RwSignal::new(SurfaceCore::new(initial_config()));
    let sender = RwSignal::new(RoomSender::default());

    provide_context(room);
    provide_context(core);
    provide_context(sender);

    #[cfg(feature = "csr")]
    {
        let url = crate::util::config::load_room_url();
        leptos::logging::log!("joining room at {url}");
        sender.set(crate::net::room_client::spawn_room_client(url, room, core));
    }

    // The drawing surface itself lives in the host page; its history is
    // reached through these callbacks.
    let on_undo = Callback::new(|()| leptos::logging::log!("undo requested"));
    let on_redo = Callback::new(|()| leptos::logging::log!("redo requested"));

    let status_class = move || connection_status_class(room.get().connection_status);

    view! {
        <Title text="Live Board" />
        <header class="live-board__header">
            <span class=status_class></span>
            <AvatarStack />
        </header>
        <main class="live-board__main">
            <Live on_undo=on_undo on_redo=on_redo />
        </main>
    }
}

fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "status-dot status-dot--connected",
        ConnectionStatus::Connecting => "status-dot status-dot--connecting",
        ConnectionStatus::Disconnected => "status-dot status-dot--disconnected",
    }
}
