//! Edge reporting and the mark phase.

use std::collections::HashSet;

use crate::handle::{GcId, GcRef};

/// Trait for values that participate in host reachability scans.
pub trait Trace {
    /// Report every shared edge held by this value.
    fn trace(&self, tracer: &mut dyn Tracer);
}

/// Tracer interface for the marking phase.
pub trait Tracer {
    /// Mark an allocation as reachable.
    ///
    /// Returns `true` when the allocation was newly marked. Callers use the
    /// answer to bound descent over shared or cyclic structure.
    fn mark(&mut self, id: GcId) -> bool;
}

/// Mark-phase scanner over a set of roots.
///
/// Computes the set of allocations reachable from the roots. Reclamation is
/// the host's concern; the scanner only answers what is reachable.
#[derive(Debug, Default)]
pub struct Marker {
    marked: HashSet<GcId>,
}

impl Marker {
    /// Create an empty marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the mark phase over the given roots.
    pub fn scan(roots: &[&dyn Trace]) -> Self {
        let mut marker = Self::new();
        for root in roots {
            root.trace(&mut marker);
        }
        marker
    }

    /// Whether an allocation was marked reachable.
    pub fn is_marked(&self, id: GcId) -> bool {
        self.marked.contains(&id)
    }

    /// Number of marked allocations.
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }
}

impl Tracer for Marker {
    fn mark(&mut self, id: GcId) -> bool {
        self.marked.insert(id)
    }
}

// A handle is an edge: mark it, then descend into the target once.
impl<T: Trace> Trace for GcRef<T> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        if tracer.mark(self.id()) {
            (**self).trace(tracer);
        }
    }
}

impl<T: Trace> Trace for Option<T> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        if let Some(value) = self {
            value.trace(tracer);
        }
    }
}

impl<T: Trace> Trace for [T] {
    fn trace(&self, tracer: &mut dyn Tracer) {
        for value in self {
            value.trace(tracer);
        }
    }
}

impl<T: Trace> Trace for Vec<T> {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.as_slice().trace(tracer);
    }
}

// Leaf values hold no edges.
impl Trace for () {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for bool {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for u8 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for u16 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for u32 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for u64 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for i32 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for i64 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for f64 {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}

impl Trace for String {
    fn trace(&self, _tracer: &mut dyn Tracer) {}
}
