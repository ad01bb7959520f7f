//! Role-based user construction.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::doctor::Doctor;
use super::fitness_enthusiast::FitnessEnthusiast;
use super::patient::{MedicalHistory, Patient};
use super::user_account::UserAccount;
use super::users_model::{ContactInfo, UserBase, UserRole};
use crate::Result;

/// Field bag for [`UserFactory::create_user`].
///
/// Holds the union of every variant's fields; each variant reads the ones it
/// needs and ignores the rest. Missing fields decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFields {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact_info: ContactInfo,

    // Doctor
    pub specialization: String,
    pub license_number: String,
    pub department: String,

    // Patient
    pub medical_history: MedicalHistory,
    pub conditions: Vec<String>,
    pub medications: Vec<String>,

    // Fitness enthusiast
    pub workout_preferences: Value,
    pub fitness_goals: Value,
}

/// Builds role variants from a type tag.
pub struct UserFactory;

impl UserFactory {
    /// Creates the variant named by `user_type` ("doctor", "patient" or
    /// "fitness", any case).
    ///
    /// Fails with [`crate::Error::UnknownVariant`] for any other tag.
    pub fn create_user(user_type: &str, fields: UserFields) -> Result<UserAccount> {
        let role: UserRole = user_type.parse()?;
        debug!("Creating {} user {}", role, fields.user_id);
        Ok(Self::build(role, fields))
    }

    /// Like [`UserFactory::create_user`], taking the field bag as a JSON
    /// object with camelCase keys (`userID`, `contactInfo`, ...).
    ///
    /// The tag is checked before the fields are decoded.
    pub fn create_user_from_json(user_type: &str, fields: Value) -> Result<UserAccount> {
        let role: UserRole = user_type.parse()?;
        let fields: UserFields = serde_json::from_value(fields)?;
        debug!("Creating {} user {} from JSON", role, fields.user_id);
        Ok(Self::build(role, fields))
    }

    fn build(role: UserRole, fields: UserFields) -> UserAccount {
        let base = UserBase::new(
            fields.user_id,
            fields.name,
            fields.age,
            fields.gender,
            fields.contact_info,
        );
        match role {
            UserRole::Doctor => Doctor::new(
                base,
                fields.specialization,
                fields.license_number,
                fields.department,
            )
            .into(),
            UserRole::Patient => Patient::new(
                base,
                fields.medical_history,
                fields.conditions,
                fields.medications,
            )
            .into(),
            UserRole::FitnessEnthusiast => {
                FitnessEnthusiast::new(base, fields.workout_preferences, fields.fitness_goals)
                    .into()
            }
        }
    }
}
