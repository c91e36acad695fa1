//! Instance construction through the host.

use marten_gc::{GcRef, Trace, Tracer};
use tracing::trace;

use crate::calendar::Calendar;
use crate::error::{TimeError, TimeResult};
use crate::fields::{WallTime, is_valid_time};

/// A built wall-clock time value: checked record plus calendar reference.
///
/// Immutable after construction. Built only by [`create_plain_time`], which
/// establishes the range invariant before anything is allocated, so every
/// `PlainTime` a host ever sees holds an in-range record.
#[derive(Debug, Clone)]
pub struct PlainTime {
    time: WallTime,
    calendar: GcRef<Calendar>,
}

impl PlainTime {
    /// The checked time record.
    pub fn time(&self) -> WallTime {
        self.time
    }

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Minute of hour, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Second of minute, `0..=59`.
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    /// Millisecond of second, `0..=999`.
    pub fn millisecond(&self) -> u16 {
        self.time.millisecond()
    }

    /// Microsecond of millisecond, `0..=999`.
    pub fn microsecond(&self) -> u16 {
        self.time.microsecond()
    }

    /// Nanosecond of microsecond, `0..=999`.
    pub fn nanosecond(&self) -> u16 {
        self.time.nanosecond()
    }

    /// The shared calendar this value is interpreted in.
    pub fn calendar(&self) -> &GcRef<Calendar> {
        &self.calendar
    }
}

// The calendar is the value's only outgoing edge; a reachability scan that
// misses it could let the host reclaim a calendar still in use.
impl Trace for PlainTime {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.calendar.trace(tracer);
    }
}

/// Host collaborator that allocates engine-visible time instances.
///
/// `NewTarget` is the host's constructor-identity handle and stays opaque to
/// the kernel; `Instance` is whatever the host's allocation produces.
/// Prototype resolution from the new-target, including the fallback to the
/// canonical prototype when none is given, happens entirely on the host side
/// of [`construct`](HostConstructor::construct).
pub trait HostConstructor {
    /// Constructor identity steering prototype resolution.
    type NewTarget;

    /// Host object produced by a successful construction.
    type Instance;

    /// The host's shared default ISO 8601 calendar.
    fn iso8601_calendar(&mut self) -> TimeResult<GcRef<Calendar>>;

    /// Allocate the host object around a built value.
    fn construct(
        &mut self,
        value: PlainTime,
        new_target: Option<&Self::NewTarget>,
    ) -> TimeResult<Self::Instance>;
}

/// Build a time instance through the host.
///
/// Validates the six fields, resolves the calendar (the supplied one, or the
/// host's default ISO 8601 calendar), then delegates allocation to the host
/// with the new-target passed through untouched. Fails with
/// [`TimeError::OutOfRange`] before consulting any collaborator when the
/// fields do not form a valid time.
#[allow(clippy::too_many_arguments)]
pub fn create_plain_time<H: HostConstructor>(
    host: &mut H,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    microsecond: u16,
    nanosecond: u16,
    calendar: Option<GcRef<Calendar>>,
    new_target: Option<&H::NewTarget>,
) -> TimeResult<H::Instance> {
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

    let calendar = match calendar {
        Some(calendar) => calendar,
        None => host.iso8601_calendar()?,
    };

    trace!(
        "building plain time instance {:02}:{:02}:{:02} ({})",
        hour,
        minute,
        second,
        calendar.identifier()
    );

    let value = PlainTime {
        time: WallTime::new_unchecked(hour, minute, second, millisecond, microsecond, nanosecond),
        calendar,
    };
    host.construct(value, new_target)
}
