//! Directory listing engine for dirlist.
//!
//! Composes path resolution, hidden-path matching, directory reading,
//! sorting, and breadcrumb building into the request-scoped
//! [`DirectoryLister`] facade. All filesystem access is synchronous and
//! bounded to one directory level; every failure degrades to a root-sentinel
//! fallback or a skipped entry plus a recorded message.

mod breadcrumb;
mod hidden;
mod lister;
mod reader;
mod resolver;
mod sorter;

pub use breadcrumb::build_breadcrumbs;
pub use hidden::HiddenPathMatcher;
pub use lister::DirectoryLister;
pub use reader::read_directory;
pub use resolver::resolve_path;
pub use sorter::sort_listing;
