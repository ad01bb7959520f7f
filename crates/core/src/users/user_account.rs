//! Closed union over the role variants.

use super::doctor::Doctor;
use super::fitness_enthusiast::FitnessEnthusiast;
use super::patient::Patient;
use super::users_model::{ContactInfo, ProfileView, UserBase, UserRole};
use super::users_traits::User;

/// Any user the registry can hold.
///
/// The base contract dispatches to the wrapped variant, so overrides such as
/// [`Doctor`]'s login still run. Variant-only capabilities are reached via
/// the `as_*` accessors.
#[derive(Debug, Clone)]
pub enum UserAccount {
    Doctor(Doctor),
    Patient(Patient),
    FitnessEnthusiast(FitnessEnthusiast),
}

macro_rules! dispatch {
    ($account:expr, $user:ident => $body:expr) => {
        match $account {
            UserAccount::Doctor($user) => $body,
            UserAccount::Patient($user) => $body,
            UserAccount::FitnessEnthusiast($user) => $body,
        }
    };
}

impl UserAccount {
    pub fn as_doctor(&self) -> Option<&Doctor> {
        match self {
            UserAccount::Doctor(doctor) => Some(doctor),
            _ => None,
        }
    }

    pub fn as_doctor_mut(&mut self) -> Option<&mut Doctor> {
        match self {
            UserAccount::Doctor(doctor) => Some(doctor),
            _ => None,
        }
    }

    pub fn as_patient(&self) -> Option<&Patient> {
        match self {
            UserAccount::Patient(patient) => Some(patient),
            _ => None,
        }
    }

    pub fn as_patient_mut(&mut self) -> Option<&mut Patient> {
        match self {
            UserAccount::Patient(patient) => Some(patient),
            _ => None,
        }
    }

    pub fn as_fitness_enthusiast(&self) -> Option<&FitnessEnthusiast> {
        match self {
            UserAccount::FitnessEnthusiast(fitness) => Some(fitness),
            _ => None,
        }
    }

    pub fn as_fitness_enthusiast_mut(&mut self) -> Option<&mut FitnessEnthusiast> {
        match self {
            UserAccount::FitnessEnthusiast(fitness) => Some(fitness),
            _ => None,
        }
    }
}

impl User for UserAccount {
    fn base(&self) -> &UserBase {
        dispatch!(self, user => user.base())
    }

    fn contact_info_mut(&mut self) -> &mut ContactInfo {
        dispatch!(self, user => user.contact_info_mut())
    }

    fn role(&self) -> UserRole {
        dispatch!(self, user => user.role())
    }

    fn login(&self) -> bool {
        dispatch!(self, user => user.login())
    }

    fn logout(&self) {
        dispatch!(self, user => user.logout())
    }

    fn update_profile(&mut self, contact_info: ContactInfo) {
        dispatch!(self, user => user.update_profile(contact_info))
    }

    fn view_profile(&self) -> ProfileView {
        dispatch!(self, user => user.view_profile())
    }
}

impl From<Doctor> for UserAccount {
    fn from(doctor: Doctor) -> Self {
        UserAccount::Doctor(doctor)
    }
}

impl From<Patient> for UserAccount {
    fn from(patient: Patient) -> Self {
        UserAccount::Patient(patient)
    }
}

impl From<FitnessEnthusiast> for UserAccount {
    fn from(fitness: FitnessEnthusiast) -> Self {
        UserAccount::FitnessEnthusiast(fitness)
    }
}
