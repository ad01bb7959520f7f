//! Patient role variant.

use log::info;
use serde_json::{Map, Value};

use super::users_model::{ContactInfo, UserBase, UserRole};
use super::users_traits::User;
use crate::observations::HealthObservation;
use crate::registry::Shared;

/// Structured medical history, keyed by topic ("pastIllnesses", "surgeries", ...).
///
/// Key order follows first insertion.
pub type MedicalHistory = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct Patient {
    base: UserBase,
    medical_history: MedicalHistory,
    conditions: Vec<String>,
    medications: Vec<String>,
    health_records: Vec<Shared<HealthObservation>>,
}

impl Patient {
    pub fn new(
        base: UserBase,
        medical_history: MedicalHistory,
        conditions: Vec<String>,
        medications: Vec<String>,
    ) -> Self {
        Self {
            base,
            medical_history,
            conditions,
            medications,
            health_records: Vec::new(),
        }
    }

    pub fn medical_history(&self) -> &MedicalHistory {
        &self.medical_history
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// The observations attached with [`Patient::add_health_record`], oldest first.
    pub fn health_records(&self) -> &[Shared<HealthObservation>] {
        &self.health_records
    }

    /// Shallow-merges `history` into the existing medical history.
    ///
    /// Top-level keys in `history` overwrite existing ones, other keys are
    /// kept. Nested values are replaced whole, not merged.
    pub fn record_medical_history(&mut self, history: MedicalHistory) {
        for (key, value) in history {
            self.medical_history.insert(key, value);
        }
        info!("Patient {} medical history updated", self.user_id());
    }

    pub fn update_conditions(&mut self, conditions: Vec<String>) {
        self.conditions = conditions;
        info!("Patient {} conditions updated", self.user_id());
    }

    pub fn update_medications(&mut self, medications: Vec<String>) {
        self.medications = medications;
        info!("Patient {} medications updated", self.user_id());
    }

    /// Returns the merged medical history.
    ///
    /// Note the name: this is *not* the observation list, see
    /// [`Patient::health_records`] for that.
    pub fn view_health_records(&self) -> &MedicalHistory {
        &self.medical_history
    }

    /// Appends an observation to this patient's own list.
    ///
    /// The registry is not touched; register the same handle there if it
    /// must be found by id.
    pub fn add_health_record(&mut self, observation: Shared<HealthObservation>) {
        self.health_records.push(observation);
        info!("New health record added for patient {}", self.user_id());
    }
}

impl User for Patient {
    fn base(&self) -> &UserBase {
        &self.base
    }

    fn contact_info_mut(&mut self) -> &mut ContactInfo {
        self.base.contact_info_mut()
    }

    fn role(&self) -> UserRole {
        UserRole::Patient
    }
}
