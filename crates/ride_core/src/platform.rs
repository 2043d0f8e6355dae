//! The platform context: every core operation goes through an explicit
//! [`Platform`] value, so each test or session owns its own state.

use tracing::debug;

use crate::account::Role;
use crate::config::PlatformConfig;
use crate::error::PlatformError;
use crate::identity::IdentityStore;
use crate::lifecycle::{ConfirmedRide, RequestLifecycle, RideRequest};
use crate::matching::{MatchingAlgorithm, MatchingEngine};
use crate::offers::{Offer, OfferRegistry};
use crate::snapshot::{DriverSnapshot, PlatformSnapshot, RiderSnapshot};
use crate::telemetry::PlatformTelemetry;

#[derive(Debug)]
pub struct Platform {
    identity: IdentityStore,
    offers: OfferRegistry,
    matching: MatchingEngine,
    lifecycle: RequestLifecycle,
    telemetry: PlatformTelemetry,
}

impl Default for Platform {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl Platform {
    pub fn new(config: PlatformConfig) -> Self {
        Self {
            identity: IdentityStore::new(config),
            offers: OfferRegistry::default(),
            matching: MatchingEngine::default(),
            lifecycle: RequestLifecycle::default(),
            telemetry: PlatformTelemetry::new(config.max_confirmed_rides),
        }
    }

    /// Replace the default exact-destination matcher.
    pub fn with_matching(mut self, algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        self.matching = MatchingEngine::new(algorithm);
        self
    }

    // ── identity ───────────────────────────────────────────────────

    pub fn register(
        &mut self,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<(), PlatformError> {
        self.identity.register(role, username, password)?;
        self.telemetry.counts.registrations += 1;
        Ok(())
    }

    /// Pure credential check; no state changes.
    pub fn authenticate(&self, role: Role, username: &str, password: &str) -> bool {
        self.identity.authenticate(role, username, password)
    }

    /// [`Self::authenticate`] as a `Result`, counting failures in telemetry.
    pub fn login(&mut self, role: Role, username: &str, password: &str) -> Result<(), PlatformError> {
        if self.authenticate(role, username, password) {
            Ok(())
        } else {
            self.telemetry.counts.failed_logins += 1;
            Err(PlatformError::InvalidCredentials(role))
        }
    }

    pub fn exists(&self, role: Role, username: &str) -> bool {
        self.identity.exists(role, username)
    }

    fn require(&self, role: Role, username: &str) -> Result<(), PlatformError> {
        if self.identity.exists(role, username) {
            Ok(())
        } else {
            Err(PlatformError::unknown(role, username))
        }
    }

    // ── offers & matching ──────────────────────────────────────────

    pub fn offer_ride(&mut self, driver: &str, destination: &str) -> Result<(), PlatformError> {
        self.require(Role::Driver, driver)?;
        self.offers.offer_ride(driver, destination);
        self.telemetry.counts.offers += 1;
        debug!(driver, destination, "ride offered");
        Ok(())
    }

    pub fn offers_for(&self, driver: &str) -> &[Offer] {
        self.offers.offers_for(driver)
    }

    /// Drivers with at least one offer to exactly `destination`, in registration order.
    pub fn find_drivers(&self, destination: &str) -> Vec<String> {
        let drivers: Vec<&str> = self
            .identity
            .accounts(Role::Driver)
            .map(|account| account.username.as_str())
            .collect();
        let found = self.matching.find_drivers(&drivers, &self.offers, destination);
        debug!(destination, candidates = drivers.len(), matched = found.len(), "drivers matched");
        found
    }

    // ── request lifecycle ──────────────────────────────────────────

    /// Send `rider`'s request for `destination` to `driver`.
    ///
    /// Fails unless both accounts exist and the driver currently offers that
    /// destination. Overwrites any pending request for the same pair.
    pub fn propose(
        &mut self,
        rider: &str,
        driver: &str,
        destination: &str,
    ) -> Result<&RideRequest, PlatformError> {
        self.require(Role::Rider, rider)?;
        self.require(Role::Driver, driver)?;
        if !self.offers.has_offer(driver, destination) {
            return Err(PlatformError::NoMatchingOffer {
                driver: driver.to_string(),
                destination: destination.to_string(),
            });
        }
        self.telemetry.counts.proposals += 1;
        Ok(self.lifecycle.propose(rider, driver, destination))
    }

    pub fn accept(&mut self, driver: &str, rider: &str) -> Result<RideRequest, PlatformError> {
        let request = self.lifecycle.accept(driver, rider)?;
        self.telemetry.record_confirmed(
            rider,
            ConfirmedRide {
                driver_username: request.driver_username.clone(),
                destination: request.destination.clone(),
            },
        );
        Ok(request)
    }

    pub fn reject(&mut self, driver: &str, rider: &str) -> Result<RideRequest, PlatformError> {
        let request = self.lifecycle.reject(driver, rider)?;
        self.telemetry.counts.rejected += 1;
        Ok(request)
    }

    pub fn pending_for(&self, driver: &str) -> &[RideRequest] {
        self.lifecycle.pending_for(driver)
    }

    pub fn pending(&self, rider: &str, driver: &str) -> Option<&RideRequest> {
        self.lifecycle.pending(rider, driver)
    }

    pub fn confirmed_ride(&self, rider: &str) -> Option<&ConfirmedRide> {
        self.lifecycle.confirmed_ride(rider)
    }

    // ── reporting ──────────────────────────────────────────────────

    pub fn telemetry(&self) -> &PlatformTelemetry {
        &self.telemetry
    }

    /// Serializable view of the whole platform. Contains no password material.
    pub fn snapshot(&self) -> PlatformSnapshot {
        let drivers = self
            .identity
            .accounts(Role::Driver)
            .map(|account| {
                let name = account.username.as_str();
                DriverSnapshot {
                    username: name.to_string(),
                    offers: self
                        .offers
                        .offers_for(name)
                        .iter()
                        .map(|offer| offer.destination.clone())
                        .collect(),
                    pending_riders: self
                        .lifecycle
                        .pending_for(name)
                        .iter()
                        .map(|request| request.rider_username.clone())
                        .collect(),
                }
            })
            .collect();
        let riders = self
            .identity
            .accounts(Role::Rider)
            .map(|account| RiderSnapshot {
                username: account.username.clone(),
                confirmed_ride: self.lifecycle.confirmed_ride(&account.username).cloned(),
            })
            .collect();

        PlatformSnapshot {
            drivers,
            riders,
            counts: self.telemetry.counts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::RequestState;

    fn platform() -> Platform {
        Platform::new(PlatformConfig::default().with_seed(3))
    }

    #[test]
    fn offer_requires_registered_driver() {
        let mut platform = platform();
        let err = platform.offer_ride("ghost", "Downtown").expect_err("unknown");
        assert_eq!(err, PlatformError::unknown(Role::Driver, "ghost"));
        assert!(platform.offers_for("ghost").is_empty());
    }

    #[test]
    fn rider_name_does_not_count_as_driver() {
        let mut platform = platform();
        platform.register(Role::Rider, "sam", "pw").expect("rider");
        assert!(platform.offer_ride("sam", "Downtown").is_err());
    }

    #[test]
    fn propose_checks_offer_before_creating_request() {
        let mut platform = platform();
        platform.register(Role::Driver, "alice", "pw").expect("driver");
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        platform.offer_ride("alice", "Downtown").expect("offer");

        let err = platform
            .propose("bob", "alice", "Uptown")
            .expect_err("no such offer");
        assert!(matches!(err, PlatformError::NoMatchingOffer { .. }));
        assert!(platform.pending_for("alice").is_empty());

        let request = platform.propose("bob", "alice", "Downtown").expect("propose");
        assert_eq!(request.state, RequestState::Pending);
        assert_eq!(platform.telemetry().counts.proposals, 1);
    }

    #[test]
    fn login_maps_failure_to_invalid_credentials() {
        let mut platform = platform();
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        assert!(platform.login(Role::Rider, "bob", "pw").is_ok());
        assert_eq!(
            platform.login(Role::Driver, "bob", "pw"),
            Err(PlatformError::InvalidCredentials(Role::Driver))
        );
        assert_eq!(platform.telemetry().counts.failed_logins, 1);
    }

    #[test]
    fn authenticate_leaves_telemetry_untouched() {
        let mut platform = platform();
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        assert!(!platform.authenticate(Role::Rider, "bob", "nope"));
        assert!(!platform.authenticate(Role::Rider, "ghost", "pw"));
        assert_eq!(platform.telemetry().counts.failed_logins, 0);
    }

    #[test]
    fn default_platform_uses_default_config() {
        let mut platform = Platform::default();
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        assert!(platform.authenticate(Role::Rider, "bob", "pw"));
        assert!(platform.telemetry().confirmed_rides.is_empty());
    }

    #[test]
    fn confirmed_ride_log_respects_configured_cap() {
        let mut platform = Platform::new(
            PlatformConfig::default()
                .with_seed(3)
                .with_max_confirmed_rides(5),
        );
        platform.register(Role::Driver, "alice", "pw").expect("driver");
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        platform.offer_ride("alice", "Downtown").expect("offer");

        for _ in 0..50 {
            platform.propose("bob", "alice", "Downtown").expect("propose");
            platform.accept("alice", "bob").expect("accept");
        }

        assert_eq!(platform.telemetry().confirmed_rides.len(), 5);
        assert_eq!(platform.telemetry().counts.accepted, 50);
    }

    #[test]
    fn snapshot_reflects_offers_pending_and_confirmed() {
        let mut platform = platform();
        platform.register(Role::Driver, "alice", "pw").expect("driver");
        platform.register(Role::Rider, "bob", "pw").expect("rider");
        platform.register(Role::Rider, "dan", "pw").expect("rider");
        platform.offer_ride("alice", "Downtown").expect("offer");
        platform.propose("bob", "alice", "Downtown").expect("propose");
        platform.accept("alice", "bob").expect("accept");
        platform.propose("dan", "alice", "Downtown").expect("propose");

        let snapshot = platform.snapshot();
        assert_eq!(snapshot.drivers[0].offers, ["Downtown"]);
        assert_eq!(snapshot.drivers[0].pending_riders, ["dan"]);
        assert_eq!(
            snapshot.riders[0].confirmed_ride.as_ref().map(|r| r.driver_username.as_str()),
            Some("alice")
        );
        assert!(snapshot.riders[1].confirmed_ride.is_none());
        assert_eq!(snapshot.counts.accepted, 1);
    }
}
