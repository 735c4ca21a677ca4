//! Directory enumeration and entry filtering.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use compact_str::CompactString;
use dirlist_core::{
    DirectoryEntry, EntryKind, FOLDER_ICON, ListError, ListerConfig, Listing, PARENT_ICON,
    WEB_ROOT, round_to_kib,
};

use crate::hidden::HiddenPathMatcher;

/// Enumerate one directory level, attach metadata, and filter out hidden or
/// disallowed entries.
///
/// `resolved` is the directory being read, `listed` the root of the current
/// listing; both are resolver output. The returned listing is unsorted
/// (filesystem enumeration order is meaningless and corrected by the
/// sorter). Entries that vanish between enumeration and stat are skipped.
pub fn read_directory(
    resolved: &str,
    listed: &str,
    web_root: &Path,
    config: &ListerConfig,
) -> Result<Listing, ListError> {
    let dir_on_disk = web_root.join(resolved);
    let entries = fs::read_dir(&dir_on_disk).map_err(|e| ListError::io(&dir_on_disk, e))?;

    let matcher = HiddenPathMatcher::new(&config.hidden_paths);
    let mut listing = Listing::new();

    if listed != WEB_ROOT {
        if let Some(parent) = parent_entry(resolved, web_root) {
            listing.insert(parent.name.clone(), parent);
        }
    }

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %resolved, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();

        let mut relative_path = format!("{resolved}/{name}");
        if let Some(stripped) = relative_path.strip_prefix("./") {
            relative_path = stripped.to_string();
        }

        if matcher.is_hidden(&relative_path) {
            continue;
        }

        if (listed == WEB_ROOT && name == config.index_file)
            || (config.hide_dot_files && name.starts_with('.'))
        {
            continue;
        }

        // Stat follows symlinks; an entry that vanished in between is
        // skipped rather than failing the listing.
        let metadata = match fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(path = %relative_path, error = %e, "skipping unstattable entry");
                continue;
            }
        };

        let (kind, size_kib, icon) = if metadata.is_dir() {
            (EntryKind::Directory, None, CompactString::new(FOLDER_ICON))
        } else {
            let extension = Path::new(&name)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            (
                EntryKind::File,
                Some(round_to_kib(metadata.len())),
                CompactString::from(config.icon_for(extension)),
            )
        };

        let name = CompactString::from(name);
        listing.insert(
            name.clone(),
            DirectoryEntry {
                name,
                path: relative_path,
                size_kib,
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
                kind,
                icon,
            },
        );
    }

    Ok(listing)
}

/// Synthesize the `..` entry for a nested listing.
///
/// The link drops the last segment of the resolved path; a non-empty
/// remainder is prefixed with the navigation query marker, a one-segment
/// path links to the bare application URL. Returns `None` when there is no
/// droppable segment.
fn parent_entry(resolved: &str, web_root: &Path) -> Option<DirectoryEntry> {
    if resolved == WEB_ROOT {
        return None;
    }

    let mut segments: Vec<&str> = resolved.split('/').collect();
    segments.pop()?;
    let parent = segments.join("/");

    let path = if parent.is_empty() {
        String::new()
    } else {
        format!("?dir={parent}")
    };

    let parent_on_disk = if parent.is_empty() {
        web_root.to_path_buf()
    } else {
        web_root.join(&parent)
    };
    let modified = fs::metadata(&parent_on_disk)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);

    Some(DirectoryEntry {
        name: CompactString::new(".."),
        path,
        size_kib: None,
        modified,
        kind: EntryKind::ParentLink,
        icon: CompactString::new(PARENT_ICON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirlist_core::SortClass;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs/api")).unwrap();
        fs::create_dir_all(temp.path().join("private")).unwrap();
        fs::write(temp.path().join("readme.txt"), "hello").unwrap();
        fs::write(temp.path().join("photo.png"), vec![0u8; 2048]).unwrap();
        fs::write(temp.path().join(".gitignore"), "target").unwrap();
        fs::write(temp.path().join("index.html"), "<html>").unwrap();
        fs::write(temp.path().join("docs/guide.md"), "guide").unwrap();
        temp
    }

    fn config() -> ListerConfig {
        ListerConfig::builder()
            .hidden_paths(vec!["private".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_listing_filters() {
        let temp = setup();
        let listing = read_directory(".", ".", temp.path(), &config()).unwrap();

        // private (hidden), .gitignore (dotfile), index.html (index file at
        // root) are all suppressed; no parent link at the root.
        let names: Vec<&str> = listing.keys().map(|k| k.as_str()).collect();
        assert!(names.contains(&"docs"));
        assert!(names.contains(&"readme.txt"));
        assert!(names.contains(&"photo.png"));
        assert!(!names.contains(&"private"));
        assert!(!names.contains(&".gitignore"));
        assert!(!names.contains(&"index.html"));
        assert!(!names.contains(&".."));
    }

    #[test]
    fn test_dotfiles_included_when_configured() {
        let temp = setup();
        let cfg = ListerConfig::builder().hide_dot_files(false).build().unwrap();

        let listing = read_directory(".", ".", temp.path(), &cfg).unwrap();
        assert!(listing.contains_key(".gitignore"));
    }

    #[test]
    fn test_index_file_listed_in_subdirectory() {
        let temp = setup();
        fs::write(temp.path().join("docs/index.html"), "x").unwrap();

        let listing = read_directory("docs", "docs", temp.path(), &config()).unwrap();
        assert!(listing.contains_key("index.html"));
    }

    #[test]
    fn test_metadata_and_icons() {
        let temp = setup();
        let listing = read_directory(".", ".", temp.path(), &config()).unwrap();

        let docs = &listing["docs"];
        assert_eq!(docs.kind, EntryKind::Directory);
        assert_eq!(docs.icon, FOLDER_ICON);
        assert_eq!(docs.size_kib, None);
        assert_eq!(docs.path, "docs");

        let photo = &listing["photo.png"];
        assert_eq!(photo.kind, EntryKind::File);
        assert_eq!(photo.icon, "image");
        assert_eq!(photo.size_kib, Some(2));

        let readme = &listing["readme.txt"];
        assert_eq!(readme.icon, "text");
        // 5 bytes rounds to zero whole KiB.
        assert_eq!(readme.size_kib, Some(0));
        assert!(readme.modified > SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_nested_listing_has_parent_link() {
        let temp = setup();
        let listing = read_directory("docs", "docs", temp.path(), &config()).unwrap();

        let parent = &listing[".."];
        assert_eq!(parent.kind, EntryKind::ParentLink);
        assert_eq!(parent.sort_class(), SortClass::ParentLink);
        assert_eq!(parent.icon, PARENT_ICON);
        assert_eq!(parent.size_kib, None);
        // One-segment path: the parent is the web root itself.
        assert_eq!(parent.path, "");

        assert!(listing.contains_key("guide.md"));
        assert_eq!(listing["guide.md"].path, "docs/guide.md");
    }

    #[test]
    fn test_two_segment_parent_link_keeps_query_marker() {
        let temp = setup();
        let listing = read_directory("docs/api", "docs/api", temp.path(), &config()).unwrap();

        assert_eq!(listing[".."].path, "?dir=docs");
    }

    #[test]
    fn test_hidden_entries_suppressed_in_subdirectory() {
        let temp = setup();
        fs::create_dir_all(temp.path().join("docs/internal")).unwrap();
        let cfg = ListerConfig::builder()
            .hidden_paths(vec!["docs/internal".to_string()])
            .build()
            .unwrap();

        let listing = read_directory("docs", "docs", temp.path(), &cfg).unwrap();
        assert!(!listing.contains_key("internal"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ok.txt"), "x").unwrap();
        symlink(temp.path().join("gone.txt"), temp.path().join("dangle")).unwrap();

        // Stat on the link target fails; the entry is dropped without
        // failing the listing.
        let listing = read_directory(".", ".", temp.path(), &config()).unwrap();
        assert!(!listing.contains_key("dangle"));
        assert!(listing.contains_key("ok.txt"));
    }

    #[test]
    fn test_unreadable_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = read_directory("missing", "missing", temp.path(), &config());
        assert!(matches!(result, Err(ListError::NotFound { .. })));
    }

    #[test]
    fn test_empty_root_listing() {
        let temp = TempDir::new().unwrap();
        let listing = read_directory(".", ".", temp.path(), &config()).unwrap();
        assert!(listing.is_empty());
    }
}
