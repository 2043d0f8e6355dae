use thiserror::Error;

use crate::account::Role;

/// Domain errors surfaced by [`crate::platform::Platform`] operations.
///
/// None of these are fatal to the process; the session layer renders each one
/// as a user-visible message and decides whether the round continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("username '{username}' is already taken for role {role}")]
    UsernameTaken { role: Role, username: String },

    #[error("invalid {0} credentials")]
    InvalidCredentials(Role),

    #[error("no available drivers for '{destination}'")]
    NoMatchingDrivers { destination: String },

    #[error("index {index} is out of range for {len} entries")]
    InvalidIndex { index: String, len: usize },

    #[error("no pending ride request from rider '{rider}' to driver '{driver}'")]
    NoSuchPendingRequest { rider: String, driver: String },

    #[error("driver '{driver}' is not offering a ride to '{destination}'")]
    NoMatchingOffer { driver: String, destination: String },

    #[error("no {role} account named '{username}'")]
    UnknownAccount { role: Role, username: String },
}

impl PlatformError {
    pub fn unknown(role: Role, username: impl Into<String>) -> Self {
        Self::UnknownAccount {
            role,
            username: username.into(),
        }
    }

    pub fn no_pending(rider: impl Into<String>, driver: impl Into<String>) -> Self {
        Self::NoSuchPendingRequest {
            rider: rider.into(),
            driver: driver.into(),
        }
    }
}
