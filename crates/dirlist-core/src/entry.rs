//! Directory entry, listing, and breadcrumb types.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Icon id for directories.
pub const FOLDER_ICON: &str = "folder";

/// Icon id for the parent-link entry.
pub const PARENT_ICON: &str = "back";

/// Three-way grouping bucket used for folders-first ordering.
///
/// Derived solely from [`EntryKind`]; never stored or mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SortClass {
    /// The synthesized `..` entry. Always ordered first.
    ParentLink = 0,
    /// A sub-directory.
    Directory = 1,
    /// A regular file.
    File = 2,
}

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    ParentLink,
    Directory,
    File,
}

impl EntryKind {
    /// The grouping bucket for this kind.
    pub fn sort_class(&self) -> SortClass {
        match self {
            EntryKind::ParentLink => SortClass::ParentLink,
            EntryKind::Directory => SortClass::Directory,
            EntryKind::File => SortClass::File,
        }
    }

    /// Check if this is a directory entry.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a file entry.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// A single entry in a directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Entry name (not full path).
    pub name: CompactString,

    /// Path relative to the web root. For the parent link this is the
    /// navigation query suffix instead (e.g. `?dir=a/b`), empty when the
    /// parent is the web root itself.
    pub path: String,

    /// Size rounded to the nearest whole KiB. `None` for directories and
    /// the parent link.
    pub size_kib: Option<u64>,

    /// Filesystem modification time.
    pub modified: SystemTime,

    /// Entry kind.
    pub kind: EntryKind,

    /// Icon id: `"folder"` for directories, `"back"` for the parent link,
    /// the configured extension icon (or blank fallback) for files.
    pub icon: CompactString,
}

impl DirectoryEntry {
    /// The grouping bucket, derived from the kind.
    pub fn sort_class(&self) -> SortClass {
        self.kind.sort_class()
    }

    /// Size column text: `"12KB"` for files, `"-"` otherwise.
    pub fn size_display(&self) -> String {
        match self.size_kib {
            Some(kib) => format!("{kib}KB"),
            None => "-".to_string(),
        }
    }

    /// Modification time formatted as `YYYY-MM-DD HH:MM:SS` local time.
    pub fn modified_display(&self) -> String {
        DateTime::<Local>::from(self.modified)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Round a byte count to the nearest whole KiB, half away from zero.
pub fn round_to_kib(bytes: u64) -> u64 {
    (bytes + 512) / 1024
}

/// An insertion-ordered listing keyed by entry name.
///
/// Names are unique within one listing (filesystem uniqueness); on a key
/// collision the last write wins.
pub type Listing = IndexMap<CompactString, DirectoryEntry>;

/// One breadcrumb element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Absolute link for this crumb.
    pub link: String,
}

impl Crumb {
    /// Create a new breadcrumb element.
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}
