use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::utils::datetime::{days_in_month, month_name};

/// A calendar month independent of any selected day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    pub year: i32,
    pub month: u32,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Month `delta` months away, crossing year boundaries
    pub fn offset(self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the 1st, counted from Sunday = 0
    pub fn first_weekday_offset(self) -> u32 {
        self.date(1).map(|d| d.weekday().num_days_from_sunday()).unwrap_or(0)
    }

    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// `"February 2024"`
    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, is_today: bool, is_selected: bool },
}

/// Month-grid date picker.
///
/// The view month moves freely; the selected date belongs to the caller and
/// is only replaced through [`select_day`](Self::select_day).
#[derive(Debug, Clone)]
pub struct CalendarPicker {
    view: ViewMonth,
    cursor_day: u32,
}

impl CalendarPicker {
    pub fn new(selected: NaiveDate) -> Self {
        Self {
            view: ViewMonth::of(selected),
            cursor_day: selected.day(),
        }
    }

    pub fn view_month(&self) -> ViewMonth {
        self.view
    }

    /// Day highlighted for keyboard selection
    pub fn cursor_day(&self) -> u32 {
        self.cursor_day
    }

    pub fn change_month(&mut self, delta: i32) {
        self.view = self.view.offset(delta);
        self.cursor_day = self.cursor_day.clamp(1, self.view.days());
    }

    /// Move the cursor by whole days, rolling the view month at its edges
    pub fn move_cursor(&mut self, delta_days: i64) {
        let Some(current) = self.view.date(self.cursor_day) else {
            return;
        };
        if let Some(target) = current.checked_add_signed(Duration::days(delta_days)) {
            self.view = ViewMonth::of(target);
            self.cursor_day = target.day();
        }
    }

    /// Date in the view month with `selection`'s time of day. The cursor
    /// follows the picked day.
    pub fn select_day(&mut self, day: u32, selection: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = self.view.date(day)?;
        self.cursor_day = day;
        Some(date.and_time(selection.time()))
    }

    pub fn select_cursor(&mut self, selection: NaiveDateTime) -> Option<NaiveDateTime> {
        self.select_day(self.cursor_day, selection)
    }

    /// Day shown in a grid cell (row-major, blanks included)
    pub fn day_at_cell(&self, cell_index: usize) -> Option<u32> {
        let day = (cell_index as u32 + 1).checked_sub(self.view.first_weekday_offset())?;
        (1..=self.view.days()).contains(&day).then_some(day)
    }

    /// Leading blanks for the weekday of the 1st, then one cell per day
    pub fn grid(&self, selected: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
        let offset = self.view.first_weekday_offset();
        let mut cells: Vec<CalendarCell> = (0..offset).map(|_| CalendarCell::Blank).collect();

        for day in 1..=self.view.days() {
            let date = self.view.date(day);
            cells.push(CalendarCell::Day {
                day,
                is_today: date == Some(today),
                is_selected: date == Some(selected),
            });
        }

        cells
    }
}
