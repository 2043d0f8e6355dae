/// Default number of salt bytes mixed into each password digest.
const DEFAULT_SALT_LEN: usize = 16;

/// Default cap on the confirmed-ride log kept in telemetry.
const DEFAULT_MAX_CONFIRMED_RIDES: usize = 10_000;

/// Tunables for a [`crate::platform::Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Salt length in bytes for password hashing.
    pub salt_len: usize,
    /// Seed for the salt RNG (for reproducibility). `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Oldest confirmed-ride records are dropped past this many.
    pub max_confirmed_rides: usize,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            salt_len: DEFAULT_SALT_LEN,
            seed: None,
            max_confirmed_rides: DEFAULT_MAX_CONFIRMED_RIDES,
        }
    }
}

impl PlatformConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Zero is bumped to one byte; an unsalted digest is never produced.
    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len.max(1);
        self
    }

    pub fn with_max_confirmed_rides(mut self, max_confirmed_rides: usize) -> Self {
        self.max_confirmed_rides = max_confirmed_rides;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let config = PlatformConfig::default()
            .with_seed(9)
            .with_salt_len(0)
            .with_max_confirmed_rides(3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.salt_len, 1);
        assert_eq!(config.max_confirmed_rides, 3);
        assert_eq!(PlatformConfig::default().salt_len, DEFAULT_SALT_LEN);
    }
}
