use core::str::FromStr;

use thiserror::Error;

/// What happens to a product record once its last offer goes away through an
/// offer event (offer deleted, moved, or detached).
///
/// The emitted operations are the same under both policies; only the stored
/// record differs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Remove the product record, named or placeholder.
    #[default]
    Purge,
    /// Keep the record so a later offer or product upsert finds it.
    Retain,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid orphan policy `{0}` (expected `purge` or `retain`)")]
pub struct ParseOrphanPolicyError(pub String);

impl FromStr for OrphanPolicy {
    type Err = ParseOrphanPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "purge" => Ok(OrphanPolicy::Purge),
            "retain" => Ok(OrphanPolicy::Retain),
            _ => Err(ParseOrphanPolicyError(s.to_string())),
        }
    }
}
