//! Shared entity handles.
//!
//! The registry and a patient's record list can both hold the same
//! observation. Both keep a clone of one `Arc`, so a write through either
//! handle is seen through the other.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Reference-counted, lockable handle to an entity.
pub type Shared<T> = Arc<RwLock<T>>;

/// Wraps an entity in a fresh shared handle.
pub fn share<T>(entity: T) -> Shared<T> {
    Arc::new(RwLock::new(entity))
}

/// Read-locks a shared entity.
///
/// A poisoned lock only means an earlier writer panicked; the entity itself
/// is still structurally valid, so the guard is recovered.
pub fn read<T>(handle: &Shared<T>) -> RwLockReadGuard<'_, T> {
    handle.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write-locks a shared entity, recovering from poisoning like [`read`].
pub fn write<T>(handle: &Shared<T>) -> RwLockWriteGuard<'_, T> {
    handle.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns true if both handles point at the same entity.
pub fn same_entity<T>(a: &Shared<T>, b: &Shared<T>) -> bool {
    Arc::ptr_eq(a, b)
}
