//! HealthHub Core - health-tracking entities and their in-memory registry.
//!
//! Users (doctors, patients, fitness enthusiasts), health observations,
//! reports, reminders and advice are built here and kept in a
//! [`registry::Registry`] for the lifetime of a session. Nothing is
//! persisted.
//!
//! - **Users** (`users`) - the base `User` contract, the three role variants,
//!   the closed `UserAccount` union and the tag-based `UserFactory`
//! - **Observations** (`observations`) - dated vital signs
//! - **Reports** (`reports`) - `Report` and the reusable `ReportBuilder`
//! - **Reminders** / **Advice** - small self-contained entities
//! - **Registry** (`registry`) - id-keyed, shared-handle storage per kind

pub mod advice;
pub mod constants;
pub mod errors;
pub mod observations;
pub mod registry;
pub mod reminders;
pub mod reports;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
