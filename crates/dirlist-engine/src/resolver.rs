//! Path resolution and sanitization.

use std::path::Path;

use dirlist_core::{ListerConfig, MessageSink, WEB_ROOT};

use crate::hidden::HiddenPathMatcher;

/// Validate and normalize a user-supplied relative path against the web
/// root.
///
/// Returns the resolved path, or the root sentinel `"."` after recording an
/// error message. Resolution never aborts the listing operation; every
/// failure degrades to the web root.
///
/// The check order is part of the security contract and must not be
/// loosened: existence and hidden-ness run on the unsanitized string, and
/// the traversal/markup rejection runs last.
pub fn resolve_path(
    raw: &str,
    web_root: &Path,
    config: &ListerConfig,
    messages: &mut MessageSink,
) -> String {
    if raw.is_empty() || raw == WEB_ROOT {
        return WEB_ROOT.to_string();
    }

    // Collapse doubled separators until none remain.
    let mut dir = raw.to_string();
    while dir.contains("//") {
        dir = dir.replace("//", "/");
    }

    if let Some(stripped) = dir.strip_suffix('/') {
        dir = stripped.to_string();
    }

    // Bare separators normalize to the empty string; joining that onto the
    // web root would silently point back at the root directory, so it fails
    // here instead of passing the existence check.
    if dir.is_empty() {
        tracing::warn!(raw = %raw, "path is empty after normalization");
        messages.error("File path does not exist");
        return WEB_ROOT.to_string();
    }

    let on_disk = web_root.join(&dir);
    if !on_disk.is_dir() {
        tracing::warn!(path = %dir, "requested path does not exist");
        messages.error("File path does not exist");
        return WEB_ROOT.to_string();
    }

    let matcher = HiddenPathMatcher::new(&config.hidden_paths);
    if matcher.is_hidden(&dir) {
        tracing::warn!(path = %dir, "requested path is hidden");
        messages.error("Access denied");
        return WEB_ROOT.to_string();
    }

    if config.hide_dot_files && dir.len() > 1 && dir.starts_with('.') {
        tracing::warn!(path = %dir, "requested path is a dotfile");
        messages.error("Access denied");
        return WEB_ROOT.to_string();
    }

    // Blocks path traversal and markup/URL-wrapper injection.
    if dir.contains('<') || dir.contains('>') || dir.contains("..") || dir.starts_with('/') {
        tracing::warn!(path = %dir, "invalid path string");
        messages.error("An invalid path string was detected");
        return WEB_ROOT.to_string();
    }

    tracing::debug!(path = %dir, "resolved path");
    dir
}
