use crate::offers::OfferRegistry;

/// Trait for algorithms that pick which drivers can serve a requested destination.
pub trait MatchingAlgorithm: Send + Sync {
    /// Return the drivers able to serve `destination`.
    ///
    /// `drivers` is every registered driver username in a stable order; the result
    /// must preserve that relative order so listings are identical across calls
    /// with no intervening mutation. An empty result means no match and is not
    /// an error.
    fn find_drivers(
        &self,
        drivers: &[&str],
        offers: &OfferRegistry,
        destination: &str,
    ) -> Vec<String>;
}
