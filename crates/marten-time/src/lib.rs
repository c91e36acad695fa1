//! # Marten Time
//!
//! Wall-clock time-of-day kernel for Marten hosts.
//!
//! ## Design
//!
//! - **Two record shapes**: unchecked drafts in, checked records out;
//!   nothing downstream ever revalidates
//! - **Floor-carry balancing**: negative fields borrow from the next larger
//!   unit instead of truncating toward zero
//! - **Host seams as traits**: property lookup, numeric coercion, the
//!   default calendar, and allocation stay on the host side
//!
//! The kernel neither parses text nor performs calendar or timezone
//! arithmetic; hosts bring those.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod calendar;
pub mod error;
pub mod fields;
pub mod instance;
pub mod normalize;
pub mod record;

pub use calendar::{Calendar, ISO8601};
pub use error::{TimeError, TimeResult};
pub use fields::{TimeField, TimeFields, WallTime, is_valid_time};
pub use instance::{HostConstructor, PlainTime, create_plain_time};
pub use normalize::{BalancedTime, Overflow, balance_time, regulate_time};
pub use record::{TimeLike, to_time_record};
