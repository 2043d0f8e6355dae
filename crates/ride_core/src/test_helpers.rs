//! Test helpers for common platform setup.
//!
//! Seeded platforms keep password salts reproducible across runs.

use std::io::Cursor;

use crate::account::Role;
use crate::config::PlatformConfig;
use crate::platform::Platform;
use crate::session::LineIo;

/// Seed shared by helper-built platforms.
pub const TEST_SEED: u64 = 42;

/// Password used for every helper-registered account.
pub const TEST_PASSWORD: &str = "pw";

/// Create an empty platform with a fixed salt seed.
pub fn test_platform() -> Platform {
    Platform::new(PlatformConfig::default().with_seed(TEST_SEED))
}

/// Register a driver and add one offer per destination, in order.
///
/// # Panics
///
/// Panics if the driver name is already taken.
pub fn add_driver(platform: &mut Platform, username: &str, destinations: &[&str]) {
    platform
        .register(Role::Driver, username, TEST_PASSWORD)
        .expect("driver username should be free");
    for destination in destinations {
        platform
            .offer_ride(username, destination)
            .expect("driver was just registered");
    }
}

/// Register a rider.
///
/// # Panics
///
/// Panics if the rider name is already taken.
pub fn add_rider(platform: &mut Platform, username: &str) {
    platform
        .register(Role::Rider, username, TEST_PASSWORD)
        .expect("rider username should be free");
}

/// Session I/O fed from `lines` that captures everything written.
pub fn scripted_io(lines: &[&str]) -> LineIo<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    LineIo::new(Cursor::new(input.into_bytes()), Vec::new())
}
