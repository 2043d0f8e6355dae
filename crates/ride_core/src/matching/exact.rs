use crate::offers::OfferRegistry;

use super::algorithm::MatchingAlgorithm;

/// Exact-destination matching.
///
/// A driver qualifies when at least one of their offers names `destination`
/// with byte-for-byte string equality. The number of matching offers does not
/// matter, and no trimming or case folding is applied to either side.
///
/// Time complexity: O(d * o) for d drivers with o offers each.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactDestinationMatching;

impl MatchingAlgorithm for ExactDestinationMatching {
    fn find_drivers(
        &self,
        drivers: &[&str],
        offers: &OfferRegistry,
        destination: &str,
    ) -> Vec<String> {
        drivers
            .iter()
            .filter(|driver| offers.has_offer(driver, destination))
            .map(|driver| driver.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> OfferRegistry {
        let mut offers = OfferRegistry::default();
        offers.offer_ride("alice", "Downtown");
        offers.offer_ride("dave", "Airport");
        offers.offer_ride("erin", "Airport");
        offers.offer_ride("erin", "Downtown");
        offers.offer_ride("erin", "Downtown");
        offers
    }

    #[test]
    fn returns_only_drivers_with_a_matching_offer() {
        let offers = registry();
        let drivers = ["alice", "dave", "erin", "idle"];
        let found = ExactDestinationMatching.find_drivers(&drivers, &offers, "Downtown");
        assert_eq!(found, ["alice", "erin"]);
    }

    #[test]
    fn duplicate_offers_do_not_duplicate_drivers() {
        let offers = registry();
        let found = ExactDestinationMatching.find_drivers(&["erin"], &offers, "Downtown");
        assert_eq!(found, ["erin"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let offers = registry();
        let drivers = ["alice", "dave", "erin"];
        assert!(ExactDestinationMatching
            .find_drivers(&drivers, &offers, "Uptown")
            .is_empty());
        assert!(ExactDestinationMatching
            .find_drivers(&drivers, &offers, "downtown")
            .is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let offers = registry();
        let found = ExactDestinationMatching.find_drivers(&["erin", "dave"], &offers, "Airport");
        assert_eq!(found, ["erin", "dave"]);
    }
}
