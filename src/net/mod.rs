//! Network layer: the websocket client for the realtime room service.

pub mod room_client;
