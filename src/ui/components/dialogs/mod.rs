//! Rendering helpers for the modal dialogs hosted by
//! [`DialogComponent`](crate::ui::components::DialogComponent).

pub mod common;
pub mod confirm_dialog;
pub mod deadline_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;
