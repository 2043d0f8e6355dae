use clap::Parser;
use ride_core::PlatformConfig;

#[derive(Debug, Parser)]
#[command(
    name = "ride-cli",
    about = "Interactive ride-matching marketplace",
    long_about = "Register and log in as a rider or driver, offer and request rides,\n\
                  and accept or reject ride requests. All state lives in memory and\n\
                  is lost on exit."
)]
pub struct Cli {
    /// Seed for password salts, for reproducible runs
    #[arg(long, env = "RIDE_SEED")]
    pub seed: Option<u64>,
    /// Salt length in bytes for password hashing
    #[arg(long, env = "RIDE_SALT_LEN", default_value_t = PlatformConfig::default().salt_len)]
    pub salt_len: usize,
    /// Confirmed rides kept in the telemetry log (0 disables it)
    #[arg(
        long,
        env = "RIDE_MAX_CONFIRMED_RIDES",
        default_value_t = PlatformConfig::default().max_confirmed_rides
    )]
    pub max_confirmed_rides: usize,
    /// Log filter directive (stderr), e.g. `info` or `ride_core=debug`
    #[arg(long, env = "RIDE_LOG", default_value = "warn")]
    pub log_filter: String,
    /// Print a JSON snapshot of the platform when the session ends
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    pub fn platform_config(&self) -> PlatformConfig {
        let config = PlatformConfig::default()
            .with_salt_len(self.salt_len)
            .with_max_confirmed_rides(self.max_confirmed_rides);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
