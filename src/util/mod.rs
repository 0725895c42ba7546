//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic so the arithmetic and parsing can be unit tested natively.

pub mod config;
pub mod pointer;
pub mod time;
