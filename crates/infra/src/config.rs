//! Engine configuration.

use thiserror::Error;

use searchsync_catalog::{OrphanPolicy, ParseOrphanPolicyError};

pub const ORPHAN_POLICY_ENV: &str = "SEARCHSYNC_ORPHAN_POLICY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    OrphanPolicy {
        var: &'static str,
        #[source]
        source: ParseOrphanPolicyError,
    },
}

/// Settings that change how events are applied (not which operations are
/// emitted).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub orphan_policy: OrphanPolicy,
}

impl EngineConfig {
    pub fn with_orphan_policy(mut self, orphan_policy: OrphanPolicy) -> Self {
        self.orphan_policy = orphan_policy;
        self
    }

    /// Read `SEARCHSYNC_ORPHAN_POLICY` (`purge` | `retain`); unset means default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ORPHAN_POLICY_ENV) {
            config.orphan_policy = raw.parse().map_err(|source| ConfigError::OrphanPolicy {
                var: ORPHAN_POLICY_ENV,
                source,
            })?;
        }
        Ok(config)
    }
}
