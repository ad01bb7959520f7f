//! Per-kind entity map.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, TryLockError};

use log::debug;

use super::shared::{read, Shared};
use crate::advice::Advice;
use crate::observations::HealthObservation;
use crate::reminders::Reminder;
use crate::reports::Report;
use crate::users::{User, UserAccount};

/// An entity the registry can key by id.
pub trait Entity {
    /// Kind name used in log output.
    const KIND: &'static str;

    fn entity_id(&self) -> &str;
}

impl Entity for UserAccount {
    const KIND: &'static str = "user";

    fn entity_id(&self) -> &str {
        self.user_id()
    }
}

impl Entity for HealthObservation {
    const KIND: &'static str = "health observation";

    fn entity_id(&self) -> &str {
        self.data_id()
    }
}

impl Entity for Report {
    const KIND: &'static str = "report";

    fn entity_id(&self) -> &str {
        self.report_id()
    }
}

impl Entity for Reminder {
    const KIND: &'static str = "reminder";

    fn entity_id(&self) -> &str {
        self.reminder_id()
    }
}

impl Entity for Advice {
    const KIND: &'static str = "advice";

    fn entity_id(&self) -> &str {
        self.advice_id()
    }
}

/// Id-keyed map of shared handles for one entity kind.
///
/// Inserting an id that is already present replaces the old handle.
#[derive(Debug)]
pub struct EntityStore<T> {
    entries: RwLock<HashMap<String, Shared<T>>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entity` under its current id and returns the handle it
    /// replaced, if any.
    ///
    /// The id is read through the entity's lock. When that lock is already
    /// write-held (e.g. the caller is editing the entity and re-adds it),
    /// a handle that is already stored is kept as-is without waiting. Adding
    /// a handle that is not stored yet while holding its write guard on the
    /// same thread still blocks.
    pub fn insert(&self, entity: Shared<T>) -> Option<Shared<T>> {
        let id = match entity.try_read() {
            Ok(guard) => guard.entity_id().to_string(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().entity_id().to_string(),
            Err(TryLockError::WouldBlock) => {
                if let Some((stored_id, stored)) = self.find_stored(&entity) {
                    debug!("{} {} is already registered", T::KIND, stored_id);
                    return Some(stored);
                }
                read(&entity).entity_id().to_string()
            }
        };
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = entries.insert(id.clone(), entity);
        if replaced.is_some() {
            debug!("Replaced {} {} in registry", T::KIND, id);
        } else {
            debug!("Added {} {} to registry", T::KIND, id);
        }
        replaced
    }

    /// Looks up the id a handle is stored under without locking the entity.
    fn find_stored(&self, entity: &Shared<T>) -> Option<(String, Shared<T>)> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(_, stored)| Arc::ptr_eq(stored, entity))
            .map(|(id, stored)| (id.clone(), stored.clone()))
    }

    pub fn get(&self, id: &str) -> Option<Shared<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// All stored handles, in no particular order.
    pub fn list(&self) -> Vec<Shared<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// All stored ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
