pub mod algorithm;
pub mod exact;

pub use algorithm::MatchingAlgorithm;
pub use exact::ExactDestinationMatching;

/// Owning wrapper for the matching algorithm trait object.
pub struct MatchingEngine(pub Box<dyn MatchingAlgorithm>);

impl MatchingEngine {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(Box::new(ExactDestinationMatching))
    }
}

impl std::fmt::Debug for MatchingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MatchingEngine").finish()
    }
}

impl std::ops::Deref for MatchingEngine {
    type Target = dyn MatchingAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
