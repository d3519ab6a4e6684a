//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a cart line item.
///
/// Unique within a cart; chosen by whoever produces the line item (product
/// number, voucher code, ...). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("LineItemId: must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LineItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LineItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LineItemId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineItemId> for String {
    fn from(value: LineItemId) -> Self {
        value.0
    }
}

impl FromStr for LineItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(matches!(
            LineItemId::new(""),
            Err(DomainError::InvalidId(_))
        ));
        assert!("".parse::<LineItemId>().is_err());
    }

    #[test]
    fn borrows_as_str_for_map_lookups() {
        let mut map = std::collections::HashMap::new();
        map.insert(LineItemId::new("SW-100").unwrap(), 1);
        assert_eq!(map.get("SW-100"), Some(&1));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = LineItemId::new("A").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A\"");

        let back: LineItemId = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<LineItemId>("\"\"").is_err());
    }
}
