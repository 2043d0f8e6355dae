mod support;

use std::collections::HashSet;

use proptest::prelude::*;
use ride_core::test_helpers::test_platform;
use ride_core::{PlatformError, Role};

#[test]
fn same_username_twice_as_driver_fails_but_rider_namespace_is_free() {
    let mut platform = test_platform();

    platform
        .register(Role::Driver, "carol", "pw")
        .expect("first driver registration");
    let err = platform
        .register(Role::Driver, "carol", "other")
        .expect_err("second driver registration");
    assert_eq!(
        err,
        PlatformError::UsernameTaken {
            role: Role::Driver,
            username: "carol".to_string(),
        }
    );

    platform
        .register(Role::Rider, "carol", "pw")
        .expect("rider namespace is independent");
    assert!(platform.exists(Role::Driver, "carol"));
    assert!(platform.exists(Role::Rider, "carol"));
}

#[test]
fn authentication_is_scoped_to_role() {
    let mut platform = test_platform();
    platform.register(Role::Driver, "alice", "drive").expect("driver");

    assert!(platform.authenticate(Role::Driver, "alice", "drive"));
    assert!(!platform.authenticate(Role::Rider, "alice", "drive"));
    assert!(!platform.authenticate(Role::Driver, "alice", "Drive"));
    assert_eq!(platform.telemetry().counts.failed_logins, 0);
}

#[test]
fn failed_logins_are_counted() {
    let mut platform = test_platform();
    platform.register(Role::Driver, "alice", "drive").expect("driver");

    assert!(platform.login(Role::Driver, "alice", "drive").is_ok());
    assert!(platform.login(Role::Rider, "alice", "drive").is_err());
    assert!(platform.login(Role::Driver, "alice", "Drive").is_err());
    assert_eq!(platform.telemetry().counts.failed_logins, 2);
}

#[test]
fn snapshot_never_exposes_passwords() {
    let mut platform = test_platform();
    platform
        .register(Role::Rider, "bob", "hunter2")
        .expect("rider");
    let json = serde_json::to_string(&platform.snapshot()).expect("serialize");
    assert!(!json.contains("hunter2"));
    assert!(!json.contains("password"));
}

proptest! {
    #[test]
    fn successful_registrations_never_share_a_username(
        attempts in prop::collection::vec(
            (prop::bool::ANY, "[a-c]{1,2}"),
            0..40,
        )
    ) {
        let mut platform = test_platform();
        let mut accepted: HashSet<(Role, String)> = HashSet::new();

        for (is_driver, username) in attempts {
            let role = if is_driver { Role::Driver } else { Role::Rider };
            match platform.register(role, &username, "pw") {
                Ok(()) => {
                    prop_assert!(accepted.insert((role, username)));
                }
                Err(PlatformError::UsernameTaken { .. }) => {
                    prop_assert!(accepted.contains(&(role, username)));
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error {}", other);
                }
            }
        }

        let snapshot = platform.snapshot();
        let drivers: HashSet<_> = snapshot.drivers.iter().map(|d| &d.username).collect();
        let riders: HashSet<_> = snapshot.riders.iter().map(|r| &r.username).collect();
        prop_assert_eq!(drivers.len(), snapshot.drivers.len());
        prop_assert_eq!(riders.len(), snapshot.riders.len());
    }
}
