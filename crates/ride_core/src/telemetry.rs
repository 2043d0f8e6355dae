//! Telemetry / KPIs: counters and a rolling log of confirmed rides.

use std::collections::VecDeque;

use serde::Serialize;

use crate::lifecycle::ConfirmedRide;

/// One accepted ride, recorded at acceptance time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmedRideRecord {
    pub rider_username: String,
    pub ride: ConfirmedRide,
}

/// Running counts for the lifetime of a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TelemetryCounts {
    pub registrations: u64,
    pub failed_logins: u64,
    pub offers: u64,
    pub proposals: u64,
    pub accepted: u64,
    pub rejected: u64,
}

#[derive(Debug)]
pub struct PlatformTelemetry {
    pub counts: TelemetryCounts,
    /// Most recent confirmed rides, oldest first, at most `max_confirmed_rides`.
    pub confirmed_rides: VecDeque<ConfirmedRideRecord>,
    max_confirmed_rides: usize,
}

impl PlatformTelemetry {
    pub fn new(max_confirmed_rides: usize) -> Self {
        Self {
            counts: TelemetryCounts::default(),
            confirmed_rides: VecDeque::new(),
            max_confirmed_rides,
        }
    }

    pub fn record_confirmed(&mut self, rider_username: &str, ride: ConfirmedRide) {
        self.counts.accepted = self.counts.accepted.saturating_add(1);
        if self.max_confirmed_rides == 0 {
            return;
        }
        while self.confirmed_rides.len() >= self.max_confirmed_rides {
            self.confirmed_rides.pop_front();
        }
        self.confirmed_rides.push_back(ConfirmedRideRecord {
            rider_username: rider_username.to_string(),
            ride,
        });
    }

    /// Accepted share of resolved requests, or `None` before any resolution.
    pub fn acceptance_rate(&self) -> Option<f64> {
        let resolved = self.counts.accepted + self.counts.rejected;
        (resolved > 0).then(|| self.counts.accepted as f64 / resolved as f64)
    }
}
