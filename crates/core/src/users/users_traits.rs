//! The capability contract shared by every role variant.

use log::info;

use super::users_model::{ContactInfo, ProfileView, UserBase, UserRole};

/// Base user contract: identity accessors plus login, logout and profile
/// operations.
///
/// Variants supply the data through [`User::base`] and
/// [`User::contact_info_mut`] and get the default behaviour for free. The
/// base is never handed out mutably, so `user_id` cannot be reassigned.
///
/// A variant that overrides a method should do its own work first and then
/// call the matching free function ([`default_login`]) so the shared
/// behaviour always runs.
pub trait User {
    fn base(&self) -> &UserBase;

    /// The contact info is the only base field that changes after creation.
    fn contact_info_mut(&mut self) -> &mut ContactInfo;

    fn role(&self) -> UserRole;

    fn user_id(&self) -> &str {
        self.base().user_id()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn age(&self) -> u32 {
        self.base().age()
    }

    fn gender(&self) -> &str {
        self.base().gender()
    }

    fn contact_info(&self) -> &ContactInfo {
        self.base().contact_info()
    }

    fn login(&self) -> bool {
        default_login(self.base())
    }

    fn logout(&self) {
        info!("User {} logged out", self.user_id());
    }

    /// Replaces the contact info.
    fn update_profile(&mut self, contact_info: ContactInfo) {
        *self.contact_info_mut() = contact_info;
        info!("User {} profile updated", self.user_id());
    }

    fn view_profile(&self) -> ProfileView {
        self.base().to_profile()
    }
}

/// Shared login behaviour. Always succeeds.
pub fn default_login(base: &UserBase) -> bool {
    info!("User {} logged in", base.user_id());
    true
}
