//! Directory content of a cloud storage, as browsed by the user.

use serde::{Deserialize, Serialize};

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[serde(alias = "REG")]
    File,
    #[serde(alias = "DIR")]
    Directory,
}

/// One file or directory inside a storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ContentEntry {
    pub fn file(name: impl Into<String>, mime_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            mime_type: mime_type.map(str::to_owned),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            mime_type: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Result of listing one directory level of a storage.
///
/// Entries keep the order the remote side returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentListing {
    /// Directory that was listed, relative to the storage root ("" for root).
    #[serde(default)]
    pub prefix: String,
    pub entries: Vec<ContentEntry>,
}

impl ContentListing {
    pub fn new(prefix: impl Into<String>, entries: Vec<ContentEntry>) -> Self {
        Self {
            prefix: prefix.into(),
            entries,
        }
    }

    pub fn directories(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter().filter(|e| e.is_directory())
    }

    pub fn files(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter().filter(|e| !e.is_directory())
    }

    pub fn find(&self, name: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
