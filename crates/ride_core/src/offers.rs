use std::collections::HashMap;

use serde::Serialize;

/// A driver's standing offer to serve one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub driver_username: String,
    pub destination: String,
}

/// Per-driver offer sequences. Offers are append-only; there is no removal path.
#[derive(Debug, Default)]
pub struct OfferRegistry {
    by_driver: HashMap<String, Vec<Offer>>,
}

impl OfferRegistry {
    /// Append an offer. Repeated destinations are kept as separate entries.
    pub fn offer_ride(&mut self, driver_username: &str, destination: &str) {
        self.by_driver
            .entry(driver_username.to_string())
            .or_default()
            .push(Offer {
                driver_username: driver_username.to_string(),
                destination: destination.to_string(),
            });
    }

    /// Offers made by `driver_username`, in insertion order.
    pub fn offers_for(&self, driver_username: &str) -> &[Offer] {
        self.by_driver
            .get(driver_username)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exact string match; no trimming or case folding.
    pub fn has_offer(&self, driver_username: &str, destination: &str) -> bool {
        self.offers_for(driver_username)
            .iter()
            .any(|offer| offer.destination == destination)
    }
}
