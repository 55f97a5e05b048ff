use rand::Rng;
use rand::seq::IndexedRandom;

use super::item::{Item, Link};

/// A top-level checklist item paired with its sub-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The top-level item.
    pub parent: Item,
    /// The immediately following indented items, in file order.
    pub children: Vec<Item>,
}

impl Entry {
    /// The links carried by this entry's children, in file order.
    ///
    /// Children without a link do not appear, so the position in the returned
    /// slice is the index used by the session's `o<N>` command.
    #[must_use]
    pub fn child_links(&self) -> Vec<&Link> {
        self.children
            .iter()
            .filter_map(|child| child.link.as_ref())
            .collect()
    }
}

/// The ordered list of entries parsed from one checklist note.
///
/// A document is built once at load time and never mutated; the reader is
/// display-only and nothing is written back to the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    entries: Vec<Entry>,
}

impl Document {
    /// Assembles a document from a note title and its parsed entries.
    #[must_use]
    pub const fn new(title: String, entries: Vec<Entry>) -> Self {
        Self { title, entries }
    }

    /// The note title (the source file's stem).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All entries, in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether the document contains no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries whose parent is not yet completed, in file order.
    pub fn unfinished(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| !entry.parent.completed)
    }

    /// Draws one unfinished entry uniformly at random.
    ///
    /// Returns [`None`] when every parent is completed (or the document is
    /// empty). The pick is stateless: no history of previously shown entries
    /// is kept, so repeated calls are independent draws over the same
    /// snapshot.
    pub fn pick_unfinished<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Entry> {
        let candidates: Vec<&Entry> = self.unfinished().collect();
        candidates.choose(rng).copied()
    }
}
