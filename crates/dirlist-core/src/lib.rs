//! Core types for the dirlist directory index engine.
//!
//! This crate provides the value types shared by the listing engine and any
//! front end: configuration, directory entries, breadcrumbs, and the
//! request-scoped message log. It performs no filesystem access itself.

mod config;
mod entry;
mod error;
mod message;

pub use config::{BLANK_ICON, ListerConfig, ListerConfigBuilder, SortOrder};
pub use entry::{
    Crumb, DirectoryEntry, EntryKind, FOLDER_ICON, Listing, PARENT_ICON, SortClass, round_to_kib,
};
pub use error::ListError;
pub use message::{Message, MessageKind, MessageSink};

/// The root sentinel: the resolved path meaning "no sub-path selected".
pub const WEB_ROOT: &str = ".";
