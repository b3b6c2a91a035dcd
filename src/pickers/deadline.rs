use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::calendar::CalendarPicker;
use super::time::{DialMode, Period, TimePicker};
use crate::utils::datetime::{local_from_naive, now_to_minute, truncate_to_minute};

/// Which half of the deadline modal receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPane {
    Calendar,
    Clock,
}

/// Working state of the deadline modal.
///
/// The date and the time of day are edited separately and merged into one
/// value; nothing reaches the caller until [`confirm`](Self::confirm).
#[derive(Debug, Clone)]
pub struct DeadlinePicker {
    working: NaiveDateTime,
    calendar: CalendarPicker,
    clock: TimePicker,
    focus: PickerPane,
}

impl DeadlinePicker {
    /// Open on `initial`, or on the current minute
    pub fn open(initial: Option<DateTime<Local>>) -> Self {
        let working = initial
            .map(|d| truncate_to_minute(d.naive_local()))
            .unwrap_or_else(now_to_minute);
        Self::from_naive(working)
    }

    pub fn from_naive(working: NaiveDateTime) -> Self {
        Self {
            working,
            calendar: CalendarPicker::new(working.date()),
            clock: TimePicker::with_time(working.time()),
            focus: PickerPane::Calendar,
        }
    }

    pub fn value(&self) -> NaiveDateTime {
        self.working
    }

    pub fn calendar(&self) -> &CalendarPicker {
        &self.calendar
    }

    pub fn clock(&self) -> &TimePicker {
        &self.clock
    }

    pub fn focus(&self) -> PickerPane {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerPane::Calendar => PickerPane::Clock,
            PickerPane::Clock => PickerPane::Calendar,
        };
    }

    /// Replace the date, keeping the time of day
    pub fn set_date(&mut self, date: NaiveDate) {
        self.working = date.and_time(self.working.time());
    }

    /// Replace the time of day, keeping the date
    pub fn set_time(&mut self, time: NaiveTime) {
        self.working = self.working.date().and_time(time);
    }

    pub fn change_month(&mut self, delta: i32) {
        self.calendar.change_month(delta);
    }

    pub fn move_calendar_cursor(&mut self, delta_days: i64) {
        self.calendar.move_cursor(delta_days);
    }

    /// Select a day of the calendar's view month. Returns `false` for days
    /// the month does not have.
    pub fn select_day(&mut self, day: u32) -> bool {
        match self.calendar.select_day(day, self.working) {
            Some(selected) => {
                self.working = selected;
                true
            }
            None => false,
        }
    }

    pub fn select_calendar_cursor(&mut self) -> bool {
        self.select_day(self.calendar.cursor_day())
    }

    pub fn select_hour(&mut self, display_hour: u32) {
        let time = self.clock.select_hour(display_hour, self.working.time());
        self.set_time(time);
    }

    pub fn select_minute_tick(&mut self, value: u32) {
        let time = self.clock.select_minute_tick(value, self.working.time());
        self.set_time(time);
    }

    pub fn set_period(&mut self, period: Period) {
        let time = self.clock.set_period(period, self.working.time());
        self.set_time(time);
    }

    pub fn switch_mode(&mut self, mode: DialMode) {
        self.clock.switch_mode(mode, self.working.time());
    }

    pub fn move_clock_cursor(&mut self, delta: i32) {
        self.clock.move_cursor(delta);
    }

    pub fn select_clock_cursor(&mut self) {
        let time = self.clock.select_cursor(self.working.time());
        self.set_time(time);
    }

    /// Pick the dial number at `index`, as a click on the clock face does
    pub fn select_dial_index(&mut self, index: usize) {
        let time = self.clock.select_index(index, self.working.time());
        self.set_time(time);
    }

    /// Commit the working value as a local instant
    pub fn confirm(self) -> DateTime<Local> {
        local_from_naive(self.working)
    }

    /// Drop the working value
    pub fn cancel(self) {}
}
