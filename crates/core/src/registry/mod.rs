//! Registry module - the in-memory store of every entity in a session.
//!
//! # Ownership
//!
//! ```text
//! Registry ── EntityStore<T> ── id → Shared<T> ──┐
//!                                                ├── same Arc<RwLock<T>>
//! Patient.health_records ── Shared<Observation> ─┘
//! ```
//!
//! The registry is the owner of record. A patient's record list is a
//! secondary index holding clones of the same handles, so registering an
//! observation in one place does not register it in the other.

mod entity_store;
mod session_registry;
mod session_registry_tests;
mod shared;

pub use entity_store::{Entity, EntityStore};
pub use session_registry::{Registry, RegistryStats};
pub use shared::{read, same_entity, share, write, Shared};
