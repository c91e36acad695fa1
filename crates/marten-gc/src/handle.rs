//! Shared handles and allocation identity.

use std::fmt;
use std::sync::Arc;

/// Identity of one shared allocation.
///
/// Derived from the allocation address, so it is stable for as long as any
/// handle to the allocation is alive and usable as a set or map key during
/// a scan.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GcId(usize);

impl fmt::Debug for GcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GcId({:#x})", self.0)
    }
}

/// Shared handle to a host-managed value.
///
/// Reference counted: the value lives until the last handle drops, so a
/// collaborator handed out through a `GcRef` outlives every holder. Cloning
/// shares the allocation rather than the value.
pub struct GcRef<T> {
    value: Arc<T>,
}

impl<T> GcRef<T> {
    /// Allocate a new shared value.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    /// Identity of the underlying allocation.
    pub fn id(&self) -> GcId {
        GcId(Arc::as_ptr(&self.value) as usize)
    }

    /// Number of live handles to the allocation.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.value)
    }

    /// Whether two handles share one allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.value, &b.value)
    }
}

impl<T> Clone for GcRef<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T> std::ops::Deref for GcRef<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for GcRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
