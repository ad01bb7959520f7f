//! The session registry.

use std::sync::OnceLock;

use log::info;

use super::entity_store::EntityStore;
use super::shared::Shared;
use crate::advice::Advice;
use crate::observations::HealthObservation;
use crate::reminders::Reminder;
use crate::reports::Report;
use crate::users::UserAccount;
use crate::{Error, Result};

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Authoritative in-memory owner of every entity, one map per kind.
///
/// The registry is passive: it stores and hands back shared handles and
/// never calls into the entities. `add_*` silently replaces an entity that
/// has the same id; `get_*` returns `None` for unknown ids.
///
/// `add_*` reads the entity's id through its lock. Re-adding a handle that
/// is already registered is fine while its write guard is held; release the
/// guard before adding a handle for the first time.
///
/// Construct one with [`Registry::new`] and pass it by reference, or use the
/// lazily created process-wide instance from [`Registry::global`].
#[derive(Debug, Default)]
pub struct Registry {
    users: EntityStore<UserAccount>,
    health_observations: EntityStore<HealthObservation>,
    reports: EntityStore<Report>,
    reminders: EntityStore<Reminder>,
    advice: EntityStore<Advice>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry, creating it on first access.
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(|| {
            info!("Initializing process-wide registry");
            Registry::new()
        })
    }

    /// Makes `registry` the process-wide instance.
    ///
    /// Fails with [`Error::InvariantViolation`] once a process-wide instance
    /// exists, whether it was installed or created by [`Registry::global`].
    pub fn install_global(registry: Registry) -> Result<&'static Registry> {
        GLOBAL_REGISTRY.set(registry).map_err(|_| {
            Error::InvariantViolation(
                "a process-wide registry already exists; use Registry::global()".to_string(),
            )
        })?;
        info!("Installed process-wide registry");
        Ok(Self::global())
    }

    // ==================== Users ====================

    pub fn add_user(&self, user: Shared<UserAccount>) {
        self.users.insert(user);
    }

    pub fn get_user(&self, user_id: &str) -> Option<Shared<UserAccount>> {
        self.users.get(user_id)
    }

    pub fn users(&self) -> Vec<Shared<UserAccount>> {
        self.users.list()
    }

    // ==================== Health observations ====================

    pub fn add_health_observation(&self, observation: Shared<HealthObservation>) {
        self.health_observations.insert(observation);
    }

    pub fn get_health_observation(&self, data_id: &str) -> Option<Shared<HealthObservation>> {
        self.health_observations.get(data_id)
    }

    pub fn health_observations(&self) -> Vec<Shared<HealthObservation>> {
        self.health_observations.list()
    }

    // ==================== Reports ====================

    pub fn add_report(&self, report: Shared<Report>) {
        self.reports.insert(report);
    }

    pub fn get_report(&self, report_id: &str) -> Option<Shared<Report>> {
        self.reports.get(report_id)
    }

    pub fn reports(&self) -> Vec<Shared<Report>> {
        self.reports.list()
    }

    // ==================== Reminders ====================

    pub fn add_reminder(&self, reminder: Shared<Reminder>) {
        self.reminders.insert(reminder);
    }

    pub fn get_reminder(&self, reminder_id: &str) -> Option<Shared<Reminder>> {
        self.reminders.get(reminder_id)
    }

    pub fn reminders(&self) -> Vec<Shared<Reminder>> {
        self.reminders.list()
    }

    // ==================== Advice ====================

    pub fn add_advice(&self, advice: Shared<Advice>) {
        self.advice.insert(advice);
    }

    pub fn get_advice(&self, advice_id: &str) -> Option<Shared<Advice>> {
        self.advice.get(advice_id)
    }

    pub fn advice(&self) -> Vec<Shared<Advice>> {
        self.advice.list()
    }

    /// Per-kind entity counts.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            users: self.users.len(),
            health_observations: self.health_observations.len(),
            reports: self.reports.len(),
            reminders: self.reminders.len(),
            advice: self.advice.len(),
        }
    }
}

/// Entity counts returned by [`Registry::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub users: usize,
    pub health_observations: usize,
    pub reports: usize,
    pub reminders: usize,
    pub advice: usize,
}
