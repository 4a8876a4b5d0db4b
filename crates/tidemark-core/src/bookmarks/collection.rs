//! Bookmark records and their ordered collection

/// Opaque bookmark identity. Assigned at creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(u64);

/// Navigation direction through bookmarks in offset order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A single saved viewport position
#[derive(Debug, Clone)]
pub struct Bookmark {
    id: BookmarkId,
    scroll_offset: usize,
    visible_item_ids: Vec<u64>,
}

impl Bookmark {
    pub fn id(&self) -> BookmarkId {
        self.id
    }

    /// The scroll position this bookmark restores
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Item ids that were at least partially visible at creation time
    pub fn visible_item_ids(&self) -> &[u64] {
        &self.visible_item_ids
    }
}

/// Bookmarks kept in ascending `scroll_offset` order
///
/// Next/previous navigation walks this ordering, not creation order. The
/// `current` reference is weak: removing the bookmark it points at clears it.
#[derive(Debug, Default)]
pub struct BookmarkCollection {
    bookmarks: Vec<Bookmark>,
    current: Option<BookmarkId>,
    next_id: u64,
}

impl BookmarkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bookmark, keeping offset order, and make it current.
    ///
    /// Equal offsets keep insertion order (the new entry goes after existing
    /// entries with the same offset).
    pub fn insert(&mut self, scroll_offset: usize, visible_item_ids: Vec<u64>) -> BookmarkId {
        let id = BookmarkId(self.next_id);
        self.next_id += 1;

        let pos = self
            .bookmarks
            .partition_point(|b| b.scroll_offset <= scroll_offset);
        self.bookmarks.insert(
            pos,
            Bookmark {
                id,
                scroll_offset,
                visible_item_ids,
            },
        );
        self.current = Some(id);
        id
    }

    /// Remove by id. An absent id is a no-op, not an error.
    pub fn remove(&mut self, id: BookmarkId) {
        self.bookmarks.retain(|b| b.id != id);
        if self.current == Some(id) {
            self.current = None;
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Bookmarks in ascending offset order
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    pub fn current(&self) -> Option<BookmarkId> {
        self.current
    }

    /// 1-based rank of the current bookmark in offset order
    pub fn current_rank(&self) -> Option<usize> {
        self.current_index().map(|i| i + 1)
    }

    /// Check for an existing bookmark within `tolerance` lines of `offset`
    pub fn has_near(&self, offset: usize, tolerance: usize) -> bool {
        self.bookmarks
            .iter()
            .any(|b| b.scroll_offset.abs_diff(offset) <= tolerance)
    }

    /// Resolve one navigation step in offset order, wrapping at both ends.
    ///
    /// With no current bookmark, `Next` resolves to the first (lowest offset)
    /// entry and `Previous` to the last. Returns `None` only when empty. The
    /// resolved bookmark becomes current.
    pub fn step(&mut self, direction: Direction) -> Option<&Bookmark> {
        if self.bookmarks.is_empty() {
            return None;
        }
        let len = self.bookmarks.len();
        let idx = match (self.current_index(), direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(i), Direction::Next) => (i + 1) % len,
            (Some(i), Direction::Previous) => (i + len - 1) % len,
        };
        self.current = Some(self.bookmarks[idx].id);
        Some(&self.bookmarks[idx])
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current?;
        self.bookmarks.iter().position(|b| b.id == current)
    }
}
