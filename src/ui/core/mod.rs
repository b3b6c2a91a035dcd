//! Core UI functionality for the iTask application.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard/mouse input handling
//!
//! Components translate input into [`Action`]s, which flow through the
//! component hierarchy before the app component applies them to the task store.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, PendingAction};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
