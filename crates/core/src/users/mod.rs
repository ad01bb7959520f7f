//! Users module - the base user contract, its role variants and the factory.

mod doctor;
mod fitness_enthusiast;
mod patient;
mod user_account;
mod user_factory;
mod users_model;
mod users_traits;

pub use doctor::Doctor;
pub use fitness_enthusiast::FitnessEnthusiast;
pub use patient::{MedicalHistory, Patient};
pub use user_account::UserAccount;
pub use user_factory::{UserFactory, UserFields};
pub use users_model::{ContactInfo, ProfileView, UserBase, UserRole};
pub use users_traits::{default_login, User};
