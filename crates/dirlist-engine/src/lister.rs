//! Request-scoped listing facade.

use std::path::{Path, PathBuf};

use dirlist_core::{Crumb, ListerConfig, Listing, Message, MessageKind, MessageSink, WEB_ROOT};

use crate::breadcrumb::build_breadcrumbs;
use crate::reader::read_directory;
use crate::resolver::resolve_path;
use crate::sorter::sort_listing;

/// One listing request: resolves the raw path at construction, then serves
/// the listing, breadcrumbs, and accumulated messages.
///
/// Holds no state beyond one request; behind a concurrent server every
/// request gets its own instance.
pub struct DirectoryLister {
    web_root: PathBuf,
    app_url: String,
    config: ListerConfig,
    directory: String,
    messages: MessageSink,
}

impl DirectoryLister {
    /// Create a lister for one request.
    ///
    /// `web_root` is the served directory on disk, `app_url` the absolute
    /// application URL (a missing trailing slash is added), `raw_path` the
    /// untrusted path from the request's query parameter. Resolution
    /// happens here; failures degrade to the web root and are recorded as
    /// messages.
    pub fn new(
        web_root: impl Into<PathBuf>,
        app_url: impl Into<String>,
        config: ListerConfig,
        raw_path: &str,
    ) -> Self {
        Self::with_messages(web_root, app_url, config, raw_path, MessageSink::new())
    }

    /// Like [`DirectoryLister::new`], but resolution appends to an already
    /// seeded message log. Lets the host report conditions that precede
    /// resolution (a missing config file, say) ahead of resolution errors.
    pub fn with_messages(
        web_root: impl Into<PathBuf>,
        app_url: impl Into<String>,
        config: ListerConfig,
        raw_path: &str,
        mut messages: MessageSink,
    ) -> Self {
        let web_root = web_root.into();
        let mut app_url = app_url.into();
        if !app_url.ends_with('/') {
            app_url.push('/');
        }

        let directory = resolve_path(raw_path, &web_root, &config, &mut messages);

        Self {
            web_root,
            app_url,
            config,
            directory,
            messages,
        }
    }

    /// The resolved path for this request (`"."` for the web root).
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The configuration in effect for this request.
    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    /// Read and sort the listing for the resolved path.
    ///
    /// A directory that cannot be opened yields an empty listing with the
    /// cause recorded as a message; the operation itself never fails.
    pub fn list_directory(&mut self) -> Listing {
        let listing = match read_directory(
            &self.directory,
            &self.directory,
            &self.web_root,
            &self.config,
        ) {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(dir = %self.directory, error = %e, "listing failed");
                self.messages.error("Unable to read directory");
                Listing::new()
            }
        };

        sort_listing(listing, self.config.sort_order, self.config.folders_first)
    }

    /// Read and sort the listing for an explicitly supplied raw path.
    ///
    /// The path goes through full resolution (messages included) instead of
    /// being trusted; the request's own resolved path still governs the
    /// parent-link and index-file rules.
    pub fn list_directory_at(&mut self, raw_path: &str) -> Listing {
        let resolved = resolve_path(raw_path, &self.web_root, &self.config, &mut self.messages);

        let listing =
            match read_directory(&resolved, &self.directory, &self.web_root, &self.config) {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::warn!(dir = %resolved, error = %e, "listing failed");
                    self.messages.error("Unable to read directory");
                    Listing::new()
                }
            };

        sort_listing(listing, self.config.sort_order, self.config.folders_first)
    }

    /// Breadcrumb trail for the resolved path.
    pub fn list_breadcrumbs(&self) -> Vec<Crumb> {
        build_breadcrumbs(&self.directory, &self.app_url)
    }

    /// The listed path as an absolute URL: the application URL, or the
    /// application URL plus the resolved path.
    pub fn listed_path(&self) -> String {
        if self.directory == WEB_ROOT {
            self.app_url.clone()
        } else {
            format!("{}{}", self.app_url, self.directory)
        }
    }

    /// Record a user-facing message.
    pub fn set_system_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(kind, text);
    }

    /// All recorded messages in insertion order, or `None` when empty.
    pub fn system_messages(&self) -> Option<&[Message]> {
        self.messages.all()
    }

    /// The served directory on disk.
    pub fn web_root(&self) -> &Path {
        &self.web_root
    }
}
