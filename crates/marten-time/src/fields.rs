//! Field table, draft record, and checked record.
//!
//! Two record shapes flow through the kernel: [`TimeFields`], the unchecked
//! draft produced by extraction, and [`WallTime`], the checked record every
//! downstream consumer relies on. Everything between the two is regulation
//! (see [`crate::normalize`]).

use std::fmt;

use crate::error::{TimeError, TimeResult};

// ============================================================================
// Field table
// ============================================================================

/// The six recognized time fields, in canonical lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// Hour of day, `0..=23`
    Hour,
    /// Minute of hour, `0..=59`
    Minute,
    /// Second of minute, `0..=59`
    Second,
    /// Millisecond of second, `0..=999`
    Millisecond,
    /// Microsecond of millisecond, `0..=999`
    Microsecond,
    /// Nanosecond of microsecond, `0..=999`
    Nanosecond,
}

impl TimeField {
    /// Canonical lookup order: hour, minute, second, millisecond,
    /// microsecond, nanosecond.
    pub const ALL: [TimeField; 6] = [
        TimeField::Hour,
        TimeField::Minute,
        TimeField::Second,
        TimeField::Millisecond,
        TimeField::Microsecond,
        TimeField::Nanosecond,
    ];

    /// Property name used for host lookups.
    pub const fn name(self) -> &'static str {
        match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
            TimeField::Millisecond => "millisecond",
            TimeField::Microsecond => "microsecond",
            TimeField::Nanosecond => "nanosecond",
        }
    }

    /// Inclusive upper bound for the field; the lower bound is always zero.
    pub const fn max(self) -> u16 {
        match self {
            TimeField::Hour => 23,
            TimeField::Minute | TimeField::Second => 59,
            TimeField::Millisecond | TimeField::Microsecond | TimeField::Nanosecond => 999,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Draft record
// ============================================================================

/// Unchecked six-field record, as read off a host value.
///
/// Each value is an integer or an infinity by the time the host coercion has
/// run; no range invariant holds here. Regulation decides what the values
/// become (see [`crate::normalize::regulate_time`]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeFields {
    /// Hour of day
    pub hour: f64,
    /// Minute of hour
    pub minute: f64,
    /// Second of minute
    pub second: f64,
    /// Millisecond of second
    pub millisecond: f64,
    /// Microsecond of millisecond
    pub microsecond: f64,
    /// Nanosecond of microsecond
    pub nanosecond: f64,
}

impl TimeFields {
    /// Read one field by table entry.
    pub fn get(&self, field: TimeField) -> f64 {
        match field {
            TimeField::Hour => self.hour,
            TimeField::Minute => self.minute,
            TimeField::Second => self.second,
            TimeField::Millisecond => self.millisecond,
            TimeField::Microsecond => self.microsecond,
            TimeField::Nanosecond => self.nanosecond,
        }
    }

    /// Write one field by table entry.
    pub fn set(&mut self, field: TimeField, value: f64) {
        match field {
            TimeField::Hour => self.hour = value,
            TimeField::Minute => self.minute = value,
            TimeField::Second => self.second = value,
            TimeField::Millisecond => self.millisecond = value,
            TimeField::Microsecond => self.microsecond = value,
            TimeField::Nanosecond => self.nanosecond = value,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Clamp a value into an inclusive range, truncating any fraction.
///
/// Infinities land on the nearest bound. Callers guarantee the value is not
/// a NaN; the host coercion has already mapped NaN to zero.
pub(crate) fn constrain_to_range(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max).trunc()
}

/// Whether six already-integral field values form a valid wall-clock time.
///
/// Checks both bounds of every field. The checked record stores unsigned
/// fields, so a negative input must report invalid here rather than wrap
/// during narrowing. Infinities and NaN fail every range test.
pub fn is_valid_time(
    hour: f64,
    minute: f64,
    second: f64,
    millisecond: f64,
    microsecond: f64,
    nanosecond: f64,
) -> bool {
    if !(0.0..=23.0).contains(&hour) {
        return false;
    }
    if !(0.0..=59.0).contains(&minute) {
        return false;
    }
    if !(0.0..=59.0).contains(&second) {
        return false;
    }
    if !(0.0..=999.0).contains(&millisecond) {
        return false;
    }
    if !(0.0..=999.0).contains(&microsecond) {
        return false;
    }
    if !(0.0..=999.0).contains(&nanosecond) {
        return false;
    }
    true
}

// ============================================================================
// Checked record
// ============================================================================

/// Checked wall-clock time record.
///
/// Field bounds are structural: hour `0..=23`, minute and second `0..=59`,
/// the sub-second fields `0..=999`. Only kernel operations that establish
/// the bounds construct one, and the unsigned widths leave no room below
/// zero. `Default` is midnight.
///
/// Ordering derives field by field in declaration order, which is exactly
/// chronological order within a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    microsecond: u16,
    nanosecond: u16,
}

impl WallTime {
    /// Build a checked record, failing with [`TimeError::OutOfRange`] when
    /// any field is out of bounds.
    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> TimeResult<Self> {
        if !is_valid_time(
            hour as f64,
            minute as f64,
            second as f64,
            millisecond as f64,
            microsecond as f64,
            nanosecond as f64,
        ) {
            return Err(TimeError::OutOfRange);
        }
        Ok(Self::new_unchecked(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        ))
    }

    /// Build a record from fields the caller has already bounds-checked.
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Hour of day, `0..=23`.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour, `0..=59`.
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of minute, `0..=59`.
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Millisecond of second, `0..=999`.
    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Microsecond of millisecond, `0..=999`.
    pub const fn microsecond(&self) -> u16 {
        self.microsecond
    }

    /// Nanosecond of microsecond, `0..=999`.
    pub const fn nanosecond(&self) -> u16 {
        self.nanosecond
    }

    /// The record collapsed to nanoseconds since midnight.
    pub const fn nanosecond_of_day(&self) -> u64 {
        let seconds =
            self.hour as u64 * 3600 + self.minute as u64 * 60 + self.second as u64;
        seconds * 1_000_000_000
            + self.millisecond as u64 * 1_000_000
            + self.microsecond as u64 * 1_000
            + self.nanosecond as u64
    }
}
