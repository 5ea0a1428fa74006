//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};

use crate::fixtures::FixtureConfig;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for fixture generation (default: 42).
    pub fixture_seed: u64,

    /// Number of seeded video games (default: 50).
    pub fixture_games: usize,

    /// Number of seeded users (default: 10).
    pub fixture_users: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fixture_seed = lookup("LUDEX_FIXTURE_SEED")
            .unwrap_or_else(|| "42".to_string())
            .parse()
            .context("LUDEX_FIXTURE_SEED must be a valid u64")?;

        let fixture_games = lookup("LUDEX_FIXTURE_GAMES")
            .unwrap_or_else(|| "50".to_string())
            .parse()
            .context("LUDEX_FIXTURE_GAMES must be a valid usize")?;

        let fixture_users = lookup("LUDEX_FIXTURE_USERS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("LUDEX_FIXTURE_USERS must be a valid usize")?;

        if fixture_users == 0 {
            bail!("LUDEX_FIXTURE_USERS must be at least 1");
        }

        Ok(Self {
            fixture_seed,
            fixture_games,
            fixture_users,
        })
    }

    /// Fixture settings derived from this configuration.
    pub fn fixtures(&self) -> FixtureConfig {
        FixtureConfig {
            seed: self.fixture_seed,
            games: self.fixture_games,
            users: self.fixture_users,
        }
    }
}
