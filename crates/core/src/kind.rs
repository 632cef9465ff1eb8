//! The closed set of mutation kinds the engine accepts.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of an incoming mutation event.
///
/// Serialized in the upstream wire format (`UPSERT_PRODUCT`, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    UpsertProduct,
    DeleteProduct,
    UpsertOffer,
    DeleteOffer,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::UpsertProduct,
        EventKind::DeleteProduct,
        EventKind::UpsertOffer,
        EventKind::DeleteOffer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::UpsertProduct => "UPSERT_PRODUCT",
            EventKind::DeleteProduct => "DELETE_PRODUCT",
            EventKind::UpsertOffer => "UPSERT_OFFER",
            EventKind::DeleteOffer => "DELETE_OFFER",
        }
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::unsupported(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "upsert_product".parse::<EventKind>().unwrap_err();
        assert_eq!(err, DomainError::unsupported("upsert_product"));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&EventKind::UpsertOffer).unwrap();
        assert_eq!(json, "\"UPSERT_OFFER\"");
    }
}
