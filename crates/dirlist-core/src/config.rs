//! Listing configuration types.

use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Icon id used for files whose extension has no configured icon.
pub const BLANK_ICON: &str = "blank";

/// Sort order applied to a directory listing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    /// Lexicographic, ascending, case-sensitive.
    AlphaAscending,
    /// Lexicographic, descending, case-sensitive.
    AlphaDescending,
    /// Sort by entry key, ascending. Listings are keyed by name, so this is
    /// equivalent to [`SortOrder::AlphaAscending`]; kept as a distinct
    /// config value for compatibility.
    KeyAscending,
    /// Sort by entry key, descending.
    KeyDescending,
    /// Embedded digit runs compare numerically; letters compare case-folded.
    #[default]
    NaturalCaseInsensitive,
    /// Embedded digit runs compare numerically; letters compare as-is.
    NaturalCaseSensitive,
    /// Uniform shuffle. Not stable, not reproducible.
    Random,
}

/// Configuration for one listing request.
///
/// Immutable once built and shared read-only across all engine components.
/// The builder rejects icon maps that lack the `"blank"` fallback entry.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ListerConfig {
    /// Suppress entries (and reject paths) whose name starts with a dot.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub hide_dot_files: bool,

    /// Path fragments whose matching entries are never listed or resolvable.
    /// Matched as positional segment prefixes, not substrings.
    #[builder(default)]
    #[serde(default)]
    pub hidden_paths: Vec<String>,

    /// File extension (case as given) to icon id. Must contain a `"blank"`
    /// entry used as the fallback for unknown extensions.
    #[builder(default = "default_icons()")]
    #[serde(default = "default_icons")]
    pub file_type_icons: IndexMap<String, String>,

    /// Sort order for listings.
    #[builder(default)]
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Group directories before files when sorting.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub folders_first: bool,

    /// The host application's own entry-point file, suppressed when listing
    /// the web root.
    #[builder(default = "default_index_file()")]
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_true() -> bool {
    true
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_icons() -> IndexMap<String, String> {
    let mut icons = IndexMap::new();
    for (ext, icon) in [
        ("png", "image"),
        ("jpg", "image"),
        ("gif", "image"),
        ("svg", "image"),
        ("mp3", "audio"),
        ("mp4", "video"),
        ("pdf", "pdf"),
        ("txt", "text"),
        ("md", "text"),
        ("zip", "archive"),
        ("tar", "archive"),
        ("gz", "archive"),
        (BLANK_ICON, BLANK_ICON),
    ] {
        icons.insert(ext.to_string(), icon.to_string());
    }
    icons
}

impl ListerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref icons) = self.file_type_icons {
            if !icons.contains_key(BLANK_ICON) {
                return Err(format!(
                    "file_type_icons must contain a \"{BLANK_ICON}\" entry"
                ));
            }
        }
        Ok(())
    }
}

impl ListerConfig {
    /// Create a new config builder.
    pub fn builder() -> ListerConfigBuilder {
        ListerConfigBuilder::default()
    }

    /// Look up the icon for a file extension, falling back to the blank
    /// icon. The lookup is case-sensitive on the raw extension string.
    pub fn icon_for(&self, extension: &str) -> &str {
        self.file_type_icons
            .get(extension)
            .or_else(|| self.file_type_icons.get(BLANK_ICON))
            .map(String::as_str)
            .unwrap_or(BLANK_ICON)
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            hide_dot_files: true,
            hidden_paths: Vec::new(),
            file_type_icons: default_icons(),
            sort_order: SortOrder::default(),
            folders_first: true,
            index_file: default_index_file(),
        }
    }
}
