//! Identifiers and simple allocators for core entities.
//!
//! Elements are addressed by host-supplied string keys in the outputs; toasts
//! additionally get an opaque id because they can be spawned and dismissed
//! mid-session, and a key alone cannot distinguish two toasts reusing it.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u32);

/// Monotonic allocator for ToastId. IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_toast: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_toast(&mut self) -> ToastId {
        let id = ToastId(self.next_toast);
        self.next_toast = self.next_toast.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
