//! Calendar collaborator record.

use marten_gc::{Trace, Tracer};

/// Identifier of the default calendar system.
pub const ISO8601: &str = "iso8601";

/// A calendar system, identified by name.
///
/// Time values never own their calendar; they share it through a
/// [`GcRef`](marten_gc::GcRef), so one calendar record can back any number
/// of values and outlives all of them. The kernel attaches calendars and
/// surfaces their identifier but performs no calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    identifier: String,
}

impl Calendar {
    /// Create a calendar with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The default ISO 8601 calendar.
    pub fn iso8601() -> Self {
        Self::new(ISO8601)
    }

    /// Calendar identifier, e.g. `"iso8601"`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

// Calendar records hold no outgoing edges.
impl Trace for Calendar {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}
