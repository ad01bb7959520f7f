//! Doctor role variant.

use log::info;

use super::users_model::{ContactInfo, UserBase, UserRole};
use super::users_traits::{default_login, User};
use crate::constants::{
    PLACEHOLDER_REPORT_DATE_RANGE, PLACEHOLDER_REPORT_ID, PLACEHOLDER_REPORT_SUMMARY,
};
use crate::observations::HealthObservation;
use crate::registry::Shared;
use crate::reports::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    base: UserBase,
    specialization: String,
    license_number: String,
    department: String,
}

impl Doctor {
    pub fn new(
        base: UserBase,
        specialization: impl Into<String>,
        license_number: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            base,
            specialization: specialization.into(),
            license_number: license_number.into(),
            department: department.into(),
        }
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Lists a patient's observations.
    ///
    /// Stub: no lookup is performed and the list is always empty.
    pub fn view_patient_records(&self, patient_id: &str) -> Vec<Shared<HealthObservation>> {
        info!(
            "Doctor {} is viewing records for patient {}",
            self.user_id(),
            patient_id
        );
        Vec::new()
    }

    /// Produces a fresh placeholder report.
    ///
    /// Every call returns a new `Report` with the same fixed field values;
    /// the patient's observations are not aggregated.
    pub fn generate_report(&self, patient_id: &str) -> Report {
        info!(
            "Doctor {} generating report for patient {}",
            self.user_id(),
            patient_id
        );
        Report::new(
            PLACEHOLDER_REPORT_ID,
            PLACEHOLDER_REPORT_DATE_RANGE,
            PLACEHOLDER_REPORT_SUMMARY,
            false,
        )
    }

    /// Notifies that a patient's record was touched. Neither the registry
    /// nor the patient is modified.
    pub fn update_patient_record(&self, patient_id: &str, data: &HealthObservation) {
        info!(
            "Doctor {} updating record for patient {} with data {}",
            self.user_id(),
            patient_id,
            data.data_id()
        );
    }
}

impl User for Doctor {
    fn base(&self) -> &UserBase {
        &self.base
    }

    fn contact_info_mut(&mut self) -> &mut ContactInfo {
        self.base.contact_info_mut()
    }

    fn role(&self) -> UserRole {
        UserRole::Doctor
    }

    fn login(&self) -> bool {
        info!(
            "Doctor {} (specialization: {}) logged in",
            self.user_id(),
            self.specialization
        );
        default_login(&self.base)
    }
}
