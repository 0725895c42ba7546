//! Reactive application state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data held in `RwSignal`s and provided through
//! Leptos context. The interaction core itself (`live::engine::SurfaceCore`)
//! is provided the same way by the app root.

pub mod room;
