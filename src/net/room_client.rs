//! WebSocket client for the realtime room service.
//!
//! `spawn_room_client` owns the socket lifecycle: connect, forward outbound
//! [`ClientMessage`]s, fold inbound [`ServerMessage`]s into the room and
//! surface signals, and reconnect with exponential backoff. Components only
//! see a [`RoomSender`], which implements the `live::room::Room` contract.
//!
//! All socket logic is gated behind `#[cfg(feature = "csr")]` since it needs
//! a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures end the current connection and feed the reconnect
//! loop. Frames that do not decode are logged and skipped.

#[cfg(test)]
#[path = "room_client_test.rs"]
mod room_client_test;

use live::presence::PresencePatch;
use live::protocol::ClientMessage;
use live::reaction::ReactionEvent;
use live::room::Room;

use leptos::prelude::{RwSignal, WithUntracked};
#[cfg(feature = "csr")]
use leptos::prelude::Update;
#[cfg(feature = "csr")]
use live::engine::{Action, SurfaceCore};
#[cfg(feature = "csr")]
use live::protocol::ServerMessage;

use crate::state::room::{ConnectionStatus, RoomState};

/// First reconnect delay.
pub const INITIAL_BACKOFF_MS: u32 = 1000;
/// Reconnect delay ceiling.
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Next reconnect delay after `current_ms`.
#[must_use]
pub fn next_backoff_ms(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Whether `message` may be queued while the connection is in `status`.
///
/// Presence waits in the queue and is flushed after a reconnect. Reactions
/// are dropped unless the socket is open, so peers never replay old ones.
#[must_use]
pub fn accepts(message: &ClientMessage, status: ConnectionStatus) -> bool {
    match message {
        ClientMessage::Presence { .. } => true,
        ClientMessage::Broadcast { .. } => status == ConnectionStatus::Connected,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoomClientError {
    /// The browser refused to open the socket.
    #[error("failed to open room socket: {0}")]
    Open(String),
    /// An outbound message could not be serialized.
    #[error("failed to encode client message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Handle for sending messages to the room.
///
/// Cheap to clone; every clone feeds the same outbound queue. A default
/// sender is disconnected and drops what it is given.
#[derive(Clone, Debug, Default)]
pub struct RoomSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
    room: Option<RwSignal<RoomState>>,
}

impl RoomSender {
    /// Current connection status as seen by the client loop.
    pub fn status(&self) -> ConnectionStatus {
        self.room
            .and_then(|room| room.try_with_untracked(|state| state.connection_status))
            .unwrap_or_default()
    }

    /// Queue one message for the socket.
    ///
    /// Returns `false` when nothing accepted it: no client is running, the
    /// message is a reaction and the socket is not open, or the message
    /// failed to encode.
    pub fn send(&self, message: &ClientMessage) -> bool {
        if !accepts(message, self.status()) {
            return false;
        }
        let text = match encode(message) {
            Ok(text) => text,
            Err(e) => {
                leptos::logging::warn!("{e}");
                return false;
            }
        };
        self.send_text(text)
    }

    #[cfg(feature = "csr")]
    fn send_text(&self, text: String) -> bool {
        self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(text).is_ok())
    }

    #[cfg(not(feature = "csr"))]
    fn send_text(&self, text: String) -> bool {
        leptos::logging::log!("room client offline, dropping {} bytes", text.len());
        false
    }
}

impl Room for RoomSender {
    fn update_presence(&self, patch: PresencePatch) {
        self.send(&ClientMessage::Presence { patch });
    }

    fn broadcast(&self, event: ReactionEvent) {
        self.send(&ClientMessage::Broadcast { event });
    }
}

/// Serialize an outbound message to a text frame.
///
/// # Errors
///
/// Returns [`RoomClientError::Encode`] if serialization fails.
pub fn encode(message: &ClientMessage) -> Result<String, RoomClientError> {
    Ok(message.encode()?)
}

/// Spawn the room client lifecycle as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_room_client(url: String, room: RwSignal<RoomState>, core: RwSignal<SurfaceCore>) -> RoomSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(room_client_loop(url, room, core, tx.clone(), rx));
    RoomSender { tx: Some(tx), room: Some(room) }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "csr")]
async fn room_client_loop(
    url: String,
    room: RwSignal<RoomState>,
    core: RwSignal<SurfaceCore>,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        room.update(RoomState::mark_connecting);

        match connect_and_run(&url, room, core, &tx, &mut rx).await {
            Ok(()) => {
                leptos::logging::log!("room socket closed");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Err(e) => {
                leptos::logging::warn!("room socket error: {e}");
            }
        }

        room.update(RoomState::mark_disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
}

/// Connect and pump messages until either direction ends.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    room: RwSignal<RoomState>,
    core: RwSignal<SurfaceCore>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    rx: &mut futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), RoomClientError> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| RoomClientError::Open(e.to_string()))?;
    let (mut ws_write, mut ws_read) = ws.split();

    room.update(RoomState::mark_connected);
    republish_presence(core, tx)?;

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => handle_text(&text, room, core),
                Ok(Message::Bytes(_)) => leptos::logging::warn!("ignoring binary room frame"),
                Err(e) => {
                    leptos::logging::warn!("room recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}

/// Queue the full local presence so peers see it again after a reconnect.
#[cfg(feature = "csr")]
fn republish_presence(
    core: RwSignal<SurfaceCore>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
) -> Result<(), RoomClientError> {
    let Action::UpdatePresence(patch) = core.with_untracked(SurfaceCore::presence_snapshot) else {
        return Ok(());
    };
    let text = encode(&ClientMessage::Presence { patch })?;
    if tx.unbounded_send(text).is_err() {
        leptos::logging::warn!("room outbound queue closed");
    }
    Ok(())
}

#[cfg(feature = "csr")]
fn handle_text(text: &str, room: RwSignal<RoomState>, core: RwSignal<SurfaceCore>) {
    let message = match ServerMessage::decode(text) {
        Ok(message) => message,
        Err(e) => {
            leptos::logging::warn!("{e}");
            return;
        }
    };
    let event = room.try_update(|state| state.apply(message)).flatten();
    if let Some(event) = event {
        let now = crate::util::time::now_ms();
        core.update(|core| core.receive_broadcast(&event, now));
    }
}
