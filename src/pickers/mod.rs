//! Deadline picking: a month calendar, an analog clock dial, and the modal
//! state combining both into one date-time value.
//!
//! These types hold no rendering state; the dialog components in
//! [`crate::ui::components::dialogs`] draw them.

pub mod calendar;
pub mod deadline;
pub mod time;

pub use calendar::{CalendarCell, CalendarPicker, ViewMonth};
pub use deadline::{DeadlinePicker, PickerPane};
pub use time::{DialMode, Period, TimePicker};
