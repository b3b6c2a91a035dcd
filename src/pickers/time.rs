use chrono::{NaiveTime, Timelike};

/// Dial values in hour mode, clockwise from 12 o'clock
pub const HOUR_VALUES: [u32; 12] = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Dial values in minute mode, clockwise from 12 o'clock
pub const MINUTE_VALUES: [u32; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

/// Distance of the dial numbers from the center, as a fraction of the half-width
pub const DIAL_RADIUS: f64 = 0.42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialMode {
    Hour,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

/// 12-hour clock value (1-12) of a time
pub fn display_hour(time: NaiveTime) -> u32 {
    match time.hour() % 12 {
        0 => 12,
        h => h,
    }
}

pub fn period_of(time: NaiveTime) -> Period {
    if time.hour() >= 12 {
        Period::Pm
    } else {
        Period::Am
    }
}

/// Zero-padded hour and minute readout (`("03", "05")`)
pub fn digital_readout(time: NaiveTime) -> (String, String) {
    (format!("{:02}", display_hour(time)), format!("{:02}", time.minute()))
}

/// Point on a dial: `center + radius * (sin θ, -cos θ)`, θ in degrees
/// clockwise from 12 o'clock, y growing downwards.
pub fn dial_position(angle_deg: f64, center: (f64, f64), radius: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (center.0 + radius * theta.sin(), center.1 - radius * theta.cos())
}

/// Dial position nearest to an offset from the dial center (y growing
/// downwards); `None` at the center itself.
pub fn dial_index_at(dx: f64, dy: f64) -> Option<usize> {
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return None;
    }
    let angle = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
    Some(((angle / 30.0).round() as usize) % 12)
}

/// Hour/minute dial picker.
///
/// Picking an hour moves on to minutes, as on a phone clock.
#[derive(Debug, Clone)]
pub struct TimePicker {
    mode: DialMode,
    cursor: usize,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePicker {
    pub fn new() -> Self {
        Self {
            mode: DialMode::Hour,
            cursor: 0,
        }
    }

    /// Picker in hour mode with the cursor on `time`'s hour
    pub fn with_time(time: NaiveTime) -> Self {
        let mut picker = Self::new();
        picker.sync_cursor(time);
        picker
    }

    pub fn mode(&self) -> DialMode {
        self.mode
    }

    pub fn switch_mode(&mut self, mode: DialMode, time: NaiveTime) {
        self.mode = mode;
        self.sync_cursor(time);
    }

    /// Set the hour from a 1-12 dial value, keeping the current AM/PM.
    pub fn select_hour(&mut self, display_hour: u32, time: NaiveTime) -> NaiveTime {
        if !(1..=12).contains(&display_hour) {
            return time;
        }

        let hour = match (period_of(time), display_hour) {
            (Period::Am, 12) => 0,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
            (Period::Am, h) => h,
        };

        let updated = time.with_hour(hour).unwrap_or(time);
        self.switch_mode(DialMode::Minute, updated);
        updated
    }

    /// Set the minutes from a dial tick (0, 5, ... 55)
    pub fn select_minute_tick(&mut self, value: u32, time: NaiveTime) -> NaiveTime {
        if !MINUTE_VALUES.contains(&value) {
            return time;
        }

        let updated = time.with_minute(value).unwrap_or(time);
        self.mode = DialMode::Minute;
        self.sync_cursor(updated);
        updated
    }

    /// Shift by twelve hours when `period` differs from the current one
    pub fn set_period(&self, period: Period, time: NaiveTime) -> NaiveTime {
        let hour = time.hour();
        let shifted = match period {
            Period::Am if hour >= 12 => hour - 12,
            Period::Pm if hour < 12 => hour + 12,
            _ => hour,
        };
        time.with_hour(shifted).unwrap_or(time)
    }

    pub fn dial_values(&self) -> [u32; 12] {
        match self.mode {
            DialMode::Hour => HOUR_VALUES,
            DialMode::Minute => MINUTE_VALUES,
        }
    }

    /// Value of `time` shown as selected on the current dial
    pub fn selected_value(&self, time: NaiveTime) -> u32 {
        match self.mode {
            DialMode::Hour => display_hour(time),
            DialMode::Minute => time.minute(),
        }
    }

    /// Indicator hand angle in degrees
    pub fn hand_angle(&self, time: NaiveTime) -> f64 {
        match self.mode {
            DialMode::Hour => f64::from(display_hour(time) % 12) * 30.0,
            DialMode::Minute => f64::from(time.minute() % 60) * 6.0,
        }
    }

    /// Angle at which a dial number sits (both dials have twelve positions)
    pub fn value_angle(index: usize) -> f64 {
        index as f64 * 30.0
    }

    /// Index of the highlighted dial number
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_value(&self) -> u32 {
        self.dial_values()[self.cursor]
    }

    /// Step the highlight clockwise (positive) or counter-clockwise
    pub fn move_cursor(&mut self, delta: i32) {
        self.cursor = (self.cursor as i32 + delta).rem_euclid(12) as usize;
    }

    /// Apply the highlighted dial number
    pub fn select_cursor(&mut self, time: NaiveTime) -> NaiveTime {
        self.select_index(self.cursor, time)
    }

    /// Apply the dial number at `index` (clicked or highlighted)
    pub fn select_index(&mut self, index: usize, time: NaiveTime) -> NaiveTime {
        let Some(&value) = self.dial_values().get(index) else {
            return time;
        };
        match self.mode {
            DialMode::Hour => self.select_hour(value, time),
            DialMode::Minute => self.select_minute_tick(value, time),
        }
    }

    fn sync_cursor(&mut self, time: NaiveTime) {
        self.cursor = match self.mode {
            DialMode::Hour => (display_hour(time) % 12) as usize,
            DialMode::Minute => ((time.minute() + 2) / 5 % 12) as usize,
        };
    }
}
