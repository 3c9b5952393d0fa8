//! The collection-editing capability surface.
//!
//! A UI driver holds a [`CollectionEditor`] and issues index-based
//! operations in response to user input; the editor translates each call
//! into a mutation of the real backing collection. Three implementations
//! live here:
//!
//! - [`SeqEditor`]: the general editor over a [`DualStore`]
//! - [`PagedEditor`]: a decorator that restricts another editor to a
//!   contiguous index window
//! - [`KeyedEditor`]: the specialization for key/value collections
//!
//! All operations are synchronous and invoked from the editing session's
//! control flow; editors use interior mutability so the driver can hold
//! them behind a shared reference.
//!
//! [`DualStore`]: crate::store::DualStore

use trellis_core::Signal;

use crate::error::EditError;
use crate::geometry::Rect;
use crate::paint::Painter;

mod keyed;
mod page;
mod seq;

pub use keyed::{KeyedDrawFn, KeyedEditor};
pub use page::{PageWindow, PagedEditor};
pub use seq::{DEFAULT_ROW_HEIGHT, DrawFn, HeightFn, RowFlagsFn, SeqEditor};

/// Per-row capability flags.
///
/// The view consults these to decide which affordances (drag handle,
/// remove button) to offer for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFlags {
    /// Row can be drag-reordered.
    pub draggable: bool,
    /// Row can be removed.
    pub removable: bool,
}

impl Default for RowFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl RowFlags {
    /// Creates flags with all defaults (draggable and removable).
    pub fn new() -> Self {
        Self {
            draggable: true,
            removable: true,
        }
    }

    /// Creates flags for a row that cannot be edited away.
    pub fn locked() -> Self {
        Self {
            draggable: false,
            removable: false,
        }
    }

    /// Sets the draggable flag.
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Sets the removable flag.
    pub fn with_removable(mut self, removable: bool) -> Self {
        self.removable = removable;
        self
    }
}

/// Collection of signals emitted by collection editors.
///
/// Views connect to these signals to stay synchronized with the collection.
/// Editors emit the appropriate signal after every structural mutation.
pub struct EditorSignals {
    /// Emitted after rows have been inserted. Args: (first row, last row).
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been removed. Args: (first row, last row).
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted after a row has been moved. Args: (source row, dest row).
    pub rows_moved: Signal<(usize, usize)>,

    /// Emitted after the collection has been cleared or replaced wholesale.
    pub reset: Signal<()>,

    /// Emitted when a recoverable editing error was reported to the user
    /// instead of being propagated (e.g. adding a null key).
    pub edit_failed: Signal<EditError>,
}

impl Default for EditorSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSignals {
    /// Creates a new set of editor signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            rows_moved: Signal::new(),
            reset: Signal::new(),
            edit_failed: Signal::new(),
        }
    }

    /// Runs the mutation closure, then emits `rows_inserted`.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Runs the mutation closure, then emits `rows_removed`.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Runs the mutation closure, then emits `rows_moved`.
    pub fn emit_rows_moved<F>(&self, from: usize, to: usize, move_fn: F)
    where
        F: FnOnce(),
    {
        move_fn();
        self.rows_moved.emit((from, to));
    }

    /// Runs the mutation closure, then emits `reset`.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        reset_fn();
        self.reset.emit(());
    }
}

/// The capability contract every concrete editor and decorator exposes.
///
/// The (out-of-scope) UI renderer drives a `CollectionEditor` through this
/// surface without knowing the backing representation: fixed array,
/// growable list, a key/value structure, or a paged window over any of
/// them.
///
/// # Index Contract
///
/// Every index-taking operation requires `index < len()` (both indices for
/// [`move_row`](Self::move_row)). An out-of-range index is a programming
/// error and panics; it is never reported through
/// [`EditorSignals::edit_failed`].
pub trait CollectionEditor: Send + Sync {
    /// Number of rows currently visible through this editor.
    fn len(&self) -> usize;

    /// `true` if no rows are visible.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the collection as a whole supports drag-reordering.
    ///
    /// Keyed collections return `false`: key identity, not position, is
    /// their organizing structure.
    fn allow_reordering(&self) -> bool {
        true
    }

    /// Whether the row at `index` can be drag-reordered.
    fn can_drag(&self, index: usize) -> bool;

    /// Whether the row at `index` can be removed.
    fn can_remove(&self, index: usize) -> bool;

    /// Append a new default-valued row to the backing collection.
    fn add(&self);

    /// Insert a new default-valued row at `index`.
    fn insert(&self, index: usize);

    /// Insert a copy of the row at `index` directly after it.
    fn duplicate(&self, index: usize);

    /// Remove the row at `index`.
    fn remove(&self, index: usize);

    /// Move the row at `from` so it ends up at `to`.
    fn move_row(&self, from: usize, to: usize);

    /// Remove all rows.
    fn clear(&self);

    /// Draw the row at `index` into `rect`. Rendering side effect only;
    /// never mutates the collection.
    fn draw_row(&self, painter: &mut dyn Painter, rect: Rect, index: usize);

    /// Height in logical pixels the row at `index` wants.
    fn row_height(&self, index: usize) -> f32;

    /// The signals this editor emits on mutation.
    fn signals(&self) -> &EditorSignals;
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_row_flags() {
        let flags = RowFlags::new();
        assert!(flags.draggable);
        assert!(flags.removable);

        let locked = RowFlags::locked();
        assert!(!locked.draggable);
        assert!(!locked.removable);

        let pinned = RowFlags::new().with_draggable(false);
        assert!(!pinned.draggable);
        assert!(pinned.removable);
    }

    #[test]
    fn test_editor_signals_creation() {
        let signals = EditorSignals::new();
        assert_eq!(signals.rows_inserted.connection_count(), 0);
        assert_eq!(signals.edit_failed.connection_count(), 0);
    }

    #[test]
    fn test_emit_rows_inserted_after_mutation() {
        let signals = EditorSignals::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let recv = order.clone();
        signals.rows_inserted.connect(move |&(first, last)| {
            recv.lock().push(("signal", first, last));
        });

        let recv = order.clone();
        signals.emit_rows_inserted(2, 2, move || {
            recv.lock().push(("mutation", 2, 2));
        });

        let events = order.lock();
        assert_eq!(events[0], ("mutation", 2, 2));
        assert_eq!(events[1], ("signal", 2, 2));
    }

    #[test]
    fn test_emit_reset() {
        let signals = EditorSignals::new();
        let count = Arc::new(Mutex::new(0));

        let recv = count.clone();
        signals.reset.connect(move |_| *recv.lock() += 1);

        signals.emit_reset(|| {});
        signals.emit_reset(|| {});
        assert_eq!(*count.lock(), 2);
    }
}
