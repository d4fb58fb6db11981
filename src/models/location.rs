//! Location, time-of-day, and daily time window types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minutes in one day.
pub(crate) const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Errors raised while constructing model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Hour or minute component outside the valid range.
    #[error("time of day out of range: {hour:02}:{minute:02}")]
    TimeOfDayOutOfRange {
        /// Offending hour component.
        hour: u8,
        /// Offending minute component.
        minute: u8,
    },
    /// A same-day window whose open time is not strictly before its close time.
    #[error("window open time {open} must be strictly before close time {close}")]
    WindowNotOrdered {
        /// Requested open time.
        open: TimeOfDay,
        /// Requested close time.
        close: TimeOfDay,
    },
    /// A cross-midnight window whose close time is not earlier than its open time.
    #[error("spanning window requires close time {close} earlier than open time {open}")]
    WindowNotSpanning {
        /// Requested open time.
        open: TimeOfDay,
        /// Requested close time.
        close: TimeOfDay,
    },
}

/// A wall-clock time of day with minute resolution.
///
/// # Examples
///
/// ```
/// use tourseq::models::TimeOfDay;
///
/// let t = TimeOfDay::new(9, 30).unwrap();
/// assert_eq!(t.minutes_since_midnight(), 570.0);
/// assert!(TimeOfDay::new(24, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day.
    ///
    /// Returns an error if `hour >= 24` or `minute >= 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour >= 24 || minute >= 60 {
            return Err(ModelError::TimeOfDayOutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> f64 {
        f64::from(self.hour) * 60.0 + f64::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Outcome of checking a clock instant against a [`TimeWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Admission {
    /// Whether the instant falls inside the window.
    pub satisfied: bool,
    /// Forward wait in minutes until the window opens. Zero when satisfied.
    pub wait: f64,
}

/// A daily availability window.
///
/// A window either lies within a single day (`open < close`) or spans
/// midnight (`close < open`, e.g. 22:00–06:00). The two shapes are built
/// through separate constructors so that an out-of-order same-day window is
/// rejected rather than silently reinterpreted.
///
/// # Examples
///
/// ```
/// use tourseq::models::{TimeOfDay, TimeWindow};
///
/// let open = TimeOfDay::new(9, 0).unwrap();
/// let close = TimeOfDay::new(17, 0).unwrap();
/// let tw = TimeWindow::new(open, close).unwrap();
/// assert!(tw.admit(600.0).satisfied); // 10:00
/// assert!(TimeWindow::new(close, open).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl TimeWindow {
    /// Creates a same-day window.
    ///
    /// Returns an error unless `open` is strictly before `close`.
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self, ModelError> {
        if open >= close {
            return Err(ModelError::WindowNotOrdered { open, close });
        }
        Ok(Self { open, close })
    }

    /// Creates a cross-midnight window (e.g. 22:00–06:00).
    ///
    /// Returns an error unless `close` is strictly earlier than `open`.
    pub fn spanning(open: TimeOfDay, close: TimeOfDay) -> Result<Self, ModelError> {
        if close >= open {
            return Err(ModelError::WindowNotSpanning { open, close });
        }
        Ok(Self { open, close })
    }

    /// Opening time.
    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    /// Closing time.
    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    /// Returns `true` if this window spans midnight.
    pub fn spans_midnight(&self) -> bool {
        self.close < self.open
    }

    /// Checks a clock instant (minutes since midnight, any number of days)
    /// against this window.
    ///
    /// The instant is normalized into a single day. When it falls outside
    /// the window the returned wait is the minimal forward time until the
    /// window opens, wrapping to the next day when the instant is already
    /// past close.
    pub fn admit(&self, clock_minutes: f64) -> Admission {
        let t = clock_minutes.rem_euclid(MINUTES_PER_DAY);
        let open = self.open.minutes_since_midnight();
        let close = self.close.minutes_since_midnight();

        if self.spans_midnight() {
            if t >= open || t <= close {
                return Admission {
                    satisfied: true,
                    wait: 0.0,
                };
            }
            // Gap between close and open lies within a single day.
            return Admission {
                satisfied: false,
                wait: open - t,
            };
        }

        if t >= open && t <= close {
            Admission {
                satisfied: true,
                wait: 0.0,
            }
        } else if t < open {
            Admission {
                satisfied: false,
                wait: open - t,
            }
        } else {
            // Past close: wait for tomorrow's opening.
            Admission {
                satisfied: false,
                wait: (MINUTES_PER_DAY - t) + open,
            }
        }
    }
}

/// One stop in the sequencing problem.
///
/// Immutable after construction. Locations carry an optional daily
/// availability window, a dwell duration in minutes, and a descriptive
/// priority weight.
///
/// # Examples
///
/// ```
/// use tourseq::models::{Location, TimeOfDay, TimeWindow};
///
/// let open = TimeOfDay::new(9, 0).unwrap();
/// let close = TimeOfDay::new(17, 0).unwrap();
/// let museum = Location::new(3, "Museum", 31.2304, 121.4737)
///     .with_window(TimeWindow::new(open, close).unwrap())
///     .with_stay_duration(45);
/// assert_eq!(museum.id(), 3);
/// assert_eq!(museum.stay_duration(), 45);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: u32,
    name: String,
    latitude: f64,
    longitude: f64,
    window: Option<TimeWindow>,
    stay_duration: u32,
    priority: f64,
}

impl Location {
    /// Creates a location with no window, zero dwell time, and priority 1.0.
    pub fn new(id: u32, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            window: None,
            stay_duration: 0,
            priority: 1.0,
        }
    }

    /// Sets the daily availability window.
    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Sets the dwell duration in minutes.
    pub fn with_stay_duration(mut self, minutes: u32) -> Self {
        self.stay_duration = minutes;
        self
    }

    /// Sets the priority weight (1.0 = normal).
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinate pair `(latitude, longitude)`.
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Availability window, if any.
    pub fn window(&self) -> Option<&TimeWindow> {
        self.window.as_ref()
    }

    /// Dwell duration in minutes.
    pub fn stay_duration(&self) -> u32 {
        self.stay_duration
    }

    /// Priority weight.
    pub fn priority(&self) -> f64 {
        self.priority
    }
}
