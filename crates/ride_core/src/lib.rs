//! In-memory ride-matching marketplace core.
//!
//! Riders request rides to a destination, drivers offer rides to destinations,
//! and the [`platform::Platform`] matches requests against open offers and
//! drives each request through its pending/accepted/rejected lifecycle.

pub mod account;
pub mod config;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod matching;
pub mod offers;
pub mod platform;
pub mod session;
pub mod snapshot;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use account::Role;
pub use config::PlatformConfig;
pub use error::PlatformError;
pub use platform::Platform;
