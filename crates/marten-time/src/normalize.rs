//! Overflow regulation and carry normalization.
//!
//! Regulation turns a draft record into a checked one under a caller-chosen
//! overflow policy. Balancing redistributes out-of-range integer fields into
//! a whole-day carry with floor semantics, so negative values borrow from
//! the next larger unit instead of truncating toward zero.

use std::str::FromStr;

use crate::error::{TimeError, TimeResult};
use crate::fields::{TimeFields, WallTime, constrain_to_range, is_valid_time};

// ============================================================================
// Overflow policy
// ============================================================================

/// Policy applied when a draft record leaves canonical bounds.
///
/// Hosts validate their option value and convert it to this enum before
/// entering the kernel; an unrecognized option never crosses the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clamp each field into its bounds independently. Never fails.
    #[default]
    Constrain,
    /// Require every field already in bounds; fail otherwise.
    Reject,
}

impl Overflow {
    /// Canonical option string for this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Overflow::Constrain => "constrain",
            Overflow::Reject => "reject",
        }
    }
}

impl FromStr for Overflow {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Overflow::Constrain),
            "reject" => Ok(Overflow::Reject),
            _ => Err(TimeError::host(format!("unknown overflow option `{s}`"))),
        }
    }
}

// ============================================================================
// Regulation
// ============================================================================

/// Apply an overflow policy to a draft record.
///
/// Constrain clamps every field into bounds and always succeeds. Reject
/// validates and fails with [`TimeError::OutOfRange`] without altering
/// anything. Field values must already be integers or infinities; the host
/// coercion guarantees that.
pub fn regulate_time(fields: TimeFields, overflow: Overflow) -> TimeResult<WallTime> {
    match overflow {
        Overflow::Constrain => Ok(constrain_time(fields)),
        Overflow::Reject => {
            if !is_valid_time(
                fields.hour,
                fields.minute,
                fields.second,
                fields.millisecond,
                fields.microsecond,
                fields.nanosecond,
            ) {
                return Err(TimeError::OutOfRange);
            }
            Ok(WallTime::new_unchecked(
                fields.hour as u8,
                fields.minute as u8,
                fields.second as u8,
                fields.millisecond as u16,
                fields.microsecond as u16,
                fields.nanosecond as u16,
            ))
        }
    }
}

/// Clamp every field of a draft record into its canonical bounds.
fn constrain_time(fields: TimeFields) -> WallTime {
    WallTime::new_unchecked(
        constrain_to_range(fields.hour, 0.0, 23.0) as u8,
        constrain_to_range(fields.minute, 0.0, 59.0) as u8,
        constrain_to_range(fields.second, 0.0, 59.0) as u8,
        constrain_to_range(fields.millisecond, 0.0, 999.0) as u16,
        constrain_to_range(fields.microsecond, 0.0, 999.0) as u16,
        constrain_to_range(fields.nanosecond, 0.0, 999.0) as u16,
    )
}

// ============================================================================
// Balancing
// ============================================================================

/// Result of carry normalization: a whole-day carry plus an in-range time.
///
/// Unlike [`WallTime`] alone, this keeps the carry-out information a caller
/// needs to adjust the date side of a computation. `days` is signed and not
/// itself range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedTime {
    /// Signed whole-day carry
    pub days: i64,
    /// The remaining time of day, within canonical bounds
    pub time: WallTime,
}

/// Normalize integer fields by cascading carries from nanoseconds upward.
///
/// Every step uses Euclidean division, so the remainder is non-negative and
/// negative inputs borrow downward: `-1` hours is one day back at `23:00`,
/// never `-1:00`. Never fails; any integer input has exactly one balanced
/// form.
pub fn balance_time(
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
    microsecond: i64,
    nanosecond: i64,
) -> BalancedTime {
    let microsecond = microsecond + nanosecond.div_euclid(1000);
    let nanosecond = nanosecond.rem_euclid(1000);
    let millisecond = millisecond + microsecond.div_euclid(1000);
    let microsecond = microsecond.rem_euclid(1000);
    let second = second + millisecond.div_euclid(1000);
    let millisecond = millisecond.rem_euclid(1000);
    let minute = minute + second.div_euclid(60);
    let second = second.rem_euclid(60);
    let hour = hour + minute.div_euclid(60);
    let minute = minute.rem_euclid(60);
    let days = hour.div_euclid(24);
    let hour = hour.rem_euclid(24);

    BalancedTime {
        days,
        time: WallTime::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
            microsecond as u16,
            nanosecond as u16,
        ),
    }
}
