//! Checklist Note Reading
//!
//! A checklist note is a markdown document whose `- [ ]`/`- [x]` lines form
//! top-level entries with optionally indented sub-items.

pub mod domain;
pub use domain::{Config, Document, Entry, Item, Link, ReaderKind};

/// Parsing of checklist notes from the filesystem.
pub mod storage;
pub use storage::LoadError;
