//! Request lifecycle: pending ride requests per driver and their accept/reject
//! transitions.
//!
//! Per (rider, driver) pair the states are `NoRequest -> Pending -> Accepted |
//! Rejected`. Only `Pending` records are stored; reaching either terminal state
//! removes the record, which is the same as returning to `NoRequest`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::PlatformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Pending,
    Accepted,
    Rejected,
}

/// One outstanding ask from a rider to a specific driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideRequest {
    pub rider_username: String,
    pub driver_username: String,
    pub destination: String,
    pub state: RequestState,
}

/// The rider's single confirmed-ride slot, written by a successful accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmedRide {
    pub driver_username: String,
    pub destination: String,
}

/// Authoritative pending-request table plus each rider's confirmed ride.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    /// Driver username -> pending requests in proposal order, at most one per rider.
    pending: HashMap<String, Vec<RideRequest>>,
    confirmed: HashMap<String, ConfirmedRide>,
}

impl RequestLifecycle {
    /// Create or overwrite the pending request for (`rider`, `driver`).
    ///
    /// A repeat proposal from the same rider keeps its slot in the driver's list
    /// and takes the new destination.
    pub fn propose(&mut self, rider: &str, driver: &str, destination: &str) -> &RideRequest {
        let requests = self.pending.entry(driver.to_string()).or_default();
        let request = RideRequest {
            rider_username: rider.to_string(),
            driver_username: driver.to_string(),
            destination: destination.to_string(),
            state: RequestState::Pending,
        };

        let index = match requests.iter().position(|r| r.rider_username == rider) {
            Some(index) => {
                debug!(rider, driver, destination, "pending ride request replaced");
                requests[index] = request;
                index
            }
            None => {
                debug!(rider, driver, destination, "ride request proposed");
                requests.push(request);
                requests.len() - 1
            }
        };
        &requests[index]
    }

    /// Resolve the pending request as accepted and write the rider's confirmed ride.
    pub fn accept(&mut self, driver: &str, rider: &str) -> Result<RideRequest, PlatformError> {
        let mut request = self.take_pending(driver, rider)?;
        request.state = RequestState::Accepted;
        self.confirmed.insert(
            rider.to_string(),
            ConfirmedRide {
                driver_username: request.driver_username.clone(),
                destination: request.destination.clone(),
            },
        );
        info!(rider, driver, destination = %request.destination, "ride request accepted");
        Ok(request)
    }

    /// Resolve the pending request as rejected. Any earlier confirmed ride stays.
    pub fn reject(&mut self, driver: &str, rider: &str) -> Result<RideRequest, PlatformError> {
        let mut request = self.take_pending(driver, rider)?;
        request.state = RequestState::Rejected;
        info!(rider, driver, destination = %request.destination, "ride request rejected");
        Ok(request)
    }

    fn take_pending(&mut self, driver: &str, rider: &str) -> Result<RideRequest, PlatformError> {
        let requests = self
            .pending
            .get_mut(driver)
            .ok_or_else(|| PlatformError::no_pending(rider, driver))?;
        let index = requests
            .iter()
            .position(|r| r.rider_username == rider)
            .ok_or_else(|| PlatformError::no_pending(rider, driver))?;
        let request = requests.remove(index);
        if requests.is_empty() {
            self.pending.remove(driver);
        }
        Ok(request)
    }

    /// Pending requests addressed to `driver`, in proposal order.
    pub fn pending_for(&self, driver: &str) -> &[RideRequest] {
        self.pending.get(driver).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pending(&self, rider: &str, driver: &str) -> Option<&RideRequest> {
        self.pending_for(driver)
            .iter()
            .find(|r| r.rider_username == rider)
    }

    pub fn confirmed_ride(&self, rider: &str) -> Option<&ConfirmedRide> {
        self.confirmed.get(rider)
    }
}
