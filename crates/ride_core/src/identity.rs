//! Identity store: registered drivers and riders, keyed by username per role.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::account::{Account, PasswordHash, Role};
use crate::config::PlatformConfig;
use crate::error::PlatformError;

/// Accounts of one role, kept in registration order with a username index.
#[derive(Debug, Default)]
struct Namespace {
    accounts: Vec<Account>,
    by_username: HashMap<String, usize>,
}

impl Namespace {
    fn get(&self, username: &str) -> Option<&Account> {
        self.by_username
            .get(username)
            .map(|&index| &self.accounts[index])
    }

    fn insert(&mut self, account: Account) {
        self.by_username
            .insert(account.username.clone(), self.accounts.len());
        self.accounts.push(account);
    }
}

#[derive(Debug)]
pub struct IdentityStore {
    drivers: Namespace,
    riders: Namespace,
    salt_len: usize,
    rng: StdRng,
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl IdentityStore {
    pub fn new(config: PlatformConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            drivers: Namespace::default(),
            riders: Namespace::default(),
            // The field is public, so builders are not the only way in.
            salt_len: config.salt_len.max(1),
            rng,
        }
    }

    fn namespace(&self, role: Role) -> &Namespace {
        match role {
            Role::Driver => &self.drivers,
            Role::Rider => &self.riders,
        }
    }

    fn namespace_mut(&mut self, role: Role) -> &mut Namespace {
        match role {
            Role::Driver => &mut self.drivers,
            Role::Rider => &mut self.riders,
        }
    }

    /// Create an account, failing if `username` is already present for `role`.
    pub fn register(
        &mut self,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<(), PlatformError> {
        if self.exists(role, username) {
            return Err(PlatformError::UsernameTaken {
                role,
                username: username.to_string(),
            });
        }

        let hash = PasswordHash::generate(password, self.salt_len, &mut self.rng);
        self.namespace_mut(role)
            .insert(Account::new(role, username, hash));
        info!(%role, username, "account registered");
        Ok(())
    }

    /// True iff an account exists for (`role`, `username`) and `password` matches.
    pub fn authenticate(&self, role: Role, username: &str, password: &str) -> bool {
        let ok = self
            .namespace(role)
            .get(username)
            .is_some_and(|account| account.password.verify(password));
        if !ok {
            warn!(%role, username, "authentication failed");
        }
        ok
    }

    pub fn exists(&self, role: Role, username: &str) -> bool {
        self.namespace(role).by_username.contains_key(username)
    }

    /// Accounts of `role` in registration order.
    pub fn accounts(&self, role: Role) -> impl Iterator<Item = &Account> + '_ {
        self.namespace(role).accounts.iter()
    }

    pub fn count(&self, role: Role) -> usize {
        self.namespace(role).accounts.len()
    }
}
