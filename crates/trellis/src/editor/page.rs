//! Paging decorator for collection editors.
//!
//! `PagedEditor` wraps any [`CollectionEditor`] and restricts the visible
//! and operable rows to a contiguous index window `[start, end]` of the
//! backing collection, presented as a standalone `0..len()` index space.
//!
//! The window never exposes an index that no longer exists in the backing
//! collection: its upper bound is re-clamped immediately after every
//! `remove`, the one operation through this decorator that can shrink the
//! backing collection. Other accesses stay cheap and clamp-free.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::editor::{CollectionEditor, EditorSignals};
use crate::geometry::Rect;
use crate::paint::Painter;

/// An inclusive index window `[start, end]` into a backing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First backing index shown by the page.
    pub start: usize,
    /// Last backing index shown by the page (inclusive).
    pub end: usize,
}

impl PageWindow {
    /// Creates a window spanning `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`; invalid window bounds are a programming
    /// error.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "invalid page window: start {start} > end {end}"
        );
        Self { start, end }
    }

    /// Number of backing indices the window spans.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A decorator that presents a contiguous window of a backing editor.
///
/// Every index-taking operation maps the page-local index `i` to the
/// backing index `start + i` before delegating. [`add`] is the exception:
/// new rows are always appended to the full backing collection, not to the
/// window.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use trellis::editor::{CollectionEditor, PagedEditor, SeqEditor};
///
/// let backing = Arc::new(SeqEditor::growable(vec![1, 2, 3, 4, 5]));
/// let page = PagedEditor::new(backing.clone(), 1, 3);
///
/// assert_eq!(page.len(), 3);
/// page.remove(0); // removes backing row 1
/// assert_eq!(backing.len(), 4);
/// ```
///
/// [`add`]: CollectionEditor::add
pub struct PagedEditor<E> {
    backing: Arc<E>,
    window: RwLock<PageWindow>,
}

impl<E: CollectionEditor> PagedEditor<E> {
    /// Creates a page over `backing` spanning backing indices
    /// `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(backing: Arc<E>, start: usize, end: usize) -> Self {
        Self {
            backing,
            window: RwLock::new(PageWindow::new(start, end)),
        }
    }

    /// The current window bounds.
    pub fn window(&self) -> PageWindow {
        *self.window.read()
    }

    /// Moves the window to `[start, end]` (used by the scrolling UI).
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn set_window(&self, start: usize, end: usize) {
        *self.window.write() = PageWindow::new(start, end);
    }

    /// A reference to the backing editor.
    pub fn backing(&self) -> &Arc<E> {
        &self.backing
    }

    /// Maps a page-local row index to the backing index.
    fn map_to_backing(&self, index: usize) -> usize {
        self.window.read().start + index
    }

    /// Pulls the window back inside the (possibly shrunken) backing
    /// collection. Called after every removal through this page.
    fn reclamp(&self) {
        let limit = self.backing.len().saturating_sub(1);
        let mut window = self.window.write();
        if window.end > limit {
            tracing::trace!(
                target: "trellis::page",
                end = window.end,
                limit,
                "re-clamping page window"
            );
            window.end = limit;
            // Keep start <= end when the backing shrank past the window.
            window.start = window.start.min(window.end);
        }
    }
}

impl<E: CollectionEditor> CollectionEditor for PagedEditor<E> {
    fn len(&self) -> usize {
        self.backing.len().min(self.window.read().width())
    }

    fn allow_reordering(&self) -> bool {
        self.backing.allow_reordering()
    }

    fn can_drag(&self, index: usize) -> bool {
        self.backing.can_drag(self.map_to_backing(index))
    }

    fn can_remove(&self, index: usize) -> bool {
        self.backing.can_remove(self.map_to_backing(index))
    }

    /// Appends to the full backing collection; no index remapping.
    fn add(&self) {
        self.backing.add();
    }

    fn insert(&self, index: usize) {
        self.backing.insert(self.map_to_backing(index));
    }

    fn duplicate(&self, index: usize) {
        self.backing.duplicate(self.map_to_backing(index));
    }

    fn remove(&self, index: usize) {
        self.backing.remove(self.map_to_backing(index));
        self.reclamp();
    }

    fn move_row(&self, from: usize, to: usize) {
        self.backing
            .move_row(self.map_to_backing(from), self.map_to_backing(to));
    }

    /// Collapses the window to `[0, 0]`, then clears the backing
    /// collection.
    fn clear(&self) {
        *self.window.write() = PageWindow { start: 0, end: 0 };
        self.backing.clear();
    }

    fn draw_row(&self, painter: &mut dyn Painter, rect: Rect, index: usize) {
        self.backing
            .draw_row(painter, rect, self.map_to_backing(index));
    }

    fn row_height(&self, index: usize) -> f32 {
        self.backing.row_height(self.map_to_backing(index))
    }

    /// Delegates to the backing editor's signals. Row indices carried by
    /// the notifications are backing-collection indices, not page-local
    /// ones.
    fn signals(&self) -> &EditorSignals {
        self.backing.signals()
    }
}
