//! pc-protocol: Shared types for pitchcheck.
//!
//! This crate defines the chat message types exchanged with generative
//! backends and the progress stages reported while an evaluation runs.

pub mod message;
pub mod progress;

pub use message::{ChatMessage, Role};
pub use progress::Stage;
