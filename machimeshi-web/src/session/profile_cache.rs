//! Display-only profile cache in local storage.
//!
//! The cache lets the profile page paint immediately while the fresh copy is
//! fetched. It is never consulted for access decisions and is not tied to
//! session validity.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::models::User;
use uuid::Uuid;

const PROFILE_KEY: &str = "machimeshi.profile";

/// The subset of the profile kept around for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedProfile {
    /// The account id.
    pub id: Uuid,
    /// Display username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Postal address, if provided.
    pub address: Option<String>,
}

impl From<&User> for CachedProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
        }
    }
}

/// Read the cached profile, if one was stored and still deserializes.
#[must_use]
pub fn load() -> Option<CachedProfile> {
    LocalStorage::get(PROFILE_KEY).ok()
}

/// Replace the cached profile.
pub fn store(profile: &CachedProfile) {
    let _ = LocalStorage::set(PROFILE_KEY, profile);
}

/// Drop the cached profile. Called on logout so the next account does not
/// see the previous one's details.
pub fn clear() {
    LocalStorage::delete(PROFILE_KEY);
}
