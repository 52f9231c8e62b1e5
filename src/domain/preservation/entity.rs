//! Preservation entities and the item-name normalization newtype

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Normalized food-item name - trimmed and lower-cased
///
/// Every cache read and write is keyed by an `ItemName`, so "Apple",
/// " apple " and "APPLE" always resolve to the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Normalize a raw item name, rejecting names that are blank after trimming
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }

        Ok(Self(normalized))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage metadata for one food item, as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreservationInfo {
    /// How to store the item
    pub storage_method: String,

    /// Free-text duration, e.g. "5 days"
    pub shelf_life: String,

    #[serde(default)]
    pub tips: Vec<String>,
}

impl PreservationInfo {
    pub fn new(storage_method: impl Into<String>, shelf_life: impl Into<String>) -> Self {
        Self {
            storage_method: storage_method.into(),
            shelf_life: shelf_life.into(),
            tips: Vec::new(),
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

/// Cached knowledge about one item, tagged with its normalized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservationEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub info: PreservationInfo,
}

impl PreservationEntry {
    /// Build an entry whose id and name are both the normalized key
    pub fn new(key: &ItemName, info: PreservationInfo) -> Self {
        Self {
            id: key.as_str().to_string(),
            name: key.as_str().to_string(),
            info,
        }
    }
}

/// A preservation entry the user chose to keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub name: String,
    pub date_added: DateTime<Utc>,
    #[serde(flatten)]
    pub info: PreservationInfo,
}

impl SavedItem {
    /// Create a saved item with a fresh id stamped with the current time
    pub fn new(name: &ItemName, info: PreservationInfo) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.as_str().to_string(),
            date_added: Utc::now(),
            info,
        }
    }
}
