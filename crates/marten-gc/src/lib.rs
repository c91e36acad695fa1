//! # Marten GC Protocol
//!
//! Reachability protocol for host-managed Marten values.
//!
//! ## Design
//!
//! - **Shared handles**: [`GcRef`] is reference counted, so a collaborator
//!   handed out through a handle outlives every holder
//! - **Explicit edges**: values report outgoing references through [`Trace`];
//!   hosts drive the scan through [`Tracer`]
//! - **Mark only**: [`Marker`] computes the reachable set; reclamation stays
//!   with the host

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod handle;
pub mod trace;

pub use handle::{GcId, GcRef};
pub use trace::{Marker, Trace, Tracer};
