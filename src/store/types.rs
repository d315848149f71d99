//! Record and result types shared by the store and the command dispatcher.
//!
//! Defines [`DataType`] (what kind of content an item holds), [`ItemPackage`]
//! (a record submitted for filing), [`AddReason`] and [`AddItemResult`] (the
//! outcome of a submission), and [`StoredRecord`] (an item as read back).

use serde::{Deserialize, Serialize};

/// Kind of content an archived item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// An absolute URL.
    Url,
}

impl DataType {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            _ => Err(format!("unknown data type: {s}")),
        }
    }
}

/// A record submitted to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPackage {
    pub data_type: DataType,
    pub content: String,
    /// Tags in the order they were given. Not trimmed or deduplicated.
    pub tags: Vec<String>,
}

impl ItemPackage {
    pub fn url(content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            data_type: DataType::Url,
            content: content.into(),
            tags,
        }
    }
}

/// Why an [`ItemPackage`] was or was not filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddReason {
    Success,
    /// The content is already archived.
    ItemDuplicate,
    /// At least one submitted tag was the empty string.
    EmptyStringTag,
    Other,
}

impl AddReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ItemDuplicate => "item_duplicate",
            Self::EmptyStringTag => "empty_string_tag",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AddReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An archived item as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub content: String,
    pub tags: Vec<String>,
}

/// Result returned from [`add_item`](crate::store::KnowledgeStore::add_item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddItemResult {
    pub added: bool,
    pub reason: AddReason,
    /// Prior records holding the same content. Only set for [`AddReason::ItemDuplicate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_data: Option<Vec<StoredRecord>>,
    /// The tag data that was refused. Only set for [`AddReason::EmptyStringTag`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offending_tags: Option<Vec<String>>,
}

impl AddItemResult {
    pub fn added() -> Self {
        Self {
            added: true,
            reason: AddReason::Success,
            conflicting_data: None,
            offending_tags: None,
        }
    }

    pub fn duplicate(existing: Vec<StoredRecord>) -> Self {
        Self {
            added: false,
            reason: AddReason::ItemDuplicate,
            conflicting_data: Some(existing),
            offending_tags: None,
        }
    }

    pub fn empty_string_tag(tags: Vec<String>) -> Self {
        Self {
            added: false,
            reason: AddReason::EmptyStringTag,
            conflicting_data: None,
            offending_tags: Some(tags),
        }
    }

    pub fn rejected() -> Self {
        Self {
            added: false,
            reason: AddReason::Other,
            conflicting_data: None,
            offending_tags: None,
        }
    }
}
