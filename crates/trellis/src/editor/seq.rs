//! Generic sequence editor over a dual-representation store.
//!
//! `SeqEditor<T>` is the workhorse editor: it owns a [`DualStore`] and
//! implements the full [`CollectionEditor`] contract over it, with
//! closure-based extractors for drawing, row heights, and per-row flags.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::editor::{CollectionEditor, EditorSignals, RowFlags};
use crate::geometry::Rect;
use crate::paint::Painter;
use crate::store::DualStore;

/// Type alias for a row draw function.
pub type DrawFn<T> = Arc<dyn Fn(&mut dyn Painter, Rect, &T) + Send + Sync>;

/// Type alias for a row height function.
pub type HeightFn<T> = Arc<dyn Fn(&T) -> f32 + Send + Sync>;

/// Type alias for a per-row flags function.
pub type RowFlagsFn<T> = Arc<dyn Fn(&T) -> RowFlags + Send + Sync>;

/// Row height used when no height function is set.
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// A collection editor over an ordered sequence of items.
///
/// The backing storage may be fixed-capacity or growable (see
/// [`DualStore`]); every operation behaves identically for both. New rows
/// are default-valued, duplicated rows are clones.
///
/// # Example
///
/// ```
/// use trellis::editor::{CollectionEditor, SeqEditor};
///
/// let editor = SeqEditor::growable(vec![1, 2, 3])
///     .with_draw(|painter, rect, item: &i32| {
///         painter.draw_text(rect, &item.to_string());
///     });
///
/// editor.add();               // [1, 2, 3, 0]
/// editor.duplicate(0);        // [1, 1, 2, 3, 0]
/// editor.remove(4);           // [1, 1, 2, 3]
/// assert_eq!(editor.len(), 4);
/// ```
pub struct SeqEditor<T> {
    store: RwLock<DualStore<T>>,
    draw: Option<DrawFn<T>>,
    height: Option<HeightFn<T>>,
    flags: Option<RowFlagsFn<T>>,
    signals: EditorSignals,
}

impl<T: Default + Clone + Send + Sync + 'static> SeqEditor<T> {
    /// Creates an editor over a growable list.
    pub fn growable(items: Vec<T>) -> Self {
        Self::over(DualStore::growable(items))
    }

    /// Creates an editor over a fixed-capacity array.
    ///
    /// Structural changes reconstruct the array; element edits happen in
    /// place.
    pub fn fixed(items: Box<[T]>) -> Self {
        Self::over(DualStore::fixed(items))
    }

    /// Creates an editor over an existing store.
    pub fn over(store: DualStore<T>) -> Self {
        Self {
            store: RwLock::new(store),
            draw: None,
            height: None,
            flags: None,
            signals: EditorSignals::new(),
        }
    }

    /// Sets the row draw function.
    pub fn with_draw<F>(mut self, draw: F) -> Self
    where
        F: Fn(&mut dyn Painter, Rect, &T) + Send + Sync + 'static,
    {
        self.draw = Some(Arc::new(draw));
        self
    }

    /// Sets the row height function. Without one, every row reports
    /// [`DEFAULT_ROW_HEIGHT`].
    pub fn with_height<F>(mut self, height: F) -> Self
    where
        F: Fn(&T) -> f32 + Send + Sync + 'static,
    {
        self.height = Some(Arc::new(height));
        self
    }

    /// Sets the per-row flags function. Without one, every row is
    /// draggable and removable.
    pub fn with_row_flags<F>(mut self, flags: F) -> Self
    where
        F: Fn(&T) -> RowFlags + Send + Sync + 'static,
    {
        self.flags = Some(Arc::new(flags));
        self
    }

    /// Read-only access to the backing store.
    pub fn store(&self) -> impl std::ops::Deref<Target = DualStore<T>> + '_ {
        self.store.read()
    }

    /// Provides mutable access to the item at `index` via a closure.
    ///
    /// Returns `None` if `index` is out of range. Element mutation never
    /// changes the structure, so no structural signal is emitted.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut store = self.store.write();
        store.get_mut(index).map(f)
    }

    fn row_flags(&self, index: usize) -> RowFlags {
        let store = self.store.read();
        let item = &store.as_slice()[index];
        match &self.flags {
            Some(flags) => flags(item),
            None => RowFlags::new(),
        }
    }
}

impl<T: Default + Clone + Send + Sync + 'static> CollectionEditor for SeqEditor<T> {
    fn len(&self) -> usize {
        self.store.read().len()
    }

    fn can_drag(&self, index: usize) -> bool {
        self.row_flags(index).draggable
    }

    fn can_remove(&self, index: usize) -> bool {
        self.row_flags(index).removable
    }

    fn add(&self) {
        let row = self.store.read().len();
        tracing::trace!(target: "trellis::editor", row, "append default row");
        self.signals.emit_rows_inserted(row, row, || {
            self.store.write().append();
        });
    }

    fn insert(&self, index: usize) {
        tracing::trace!(target: "trellis::editor", index, "insert default row");
        self.signals.emit_rows_inserted(index, index, || {
            self.store.write().insert(index);
        });
    }

    fn duplicate(&self, index: usize) {
        tracing::trace!(target: "trellis::editor", index, "duplicate row");
        self.signals.emit_rows_inserted(index + 1, index + 1, || {
            let mut store = self.store.write();
            let copy = store.as_slice()[index].clone();
            store.insert_item(index + 1, copy);
        });
    }

    fn remove(&self, index: usize) {
        tracing::trace!(target: "trellis::editor", index, "remove row");
        self.signals.emit_rows_removed(index, index, || {
            self.store.write().remove(index);
        });
    }

    fn move_row(&self, from: usize, to: usize) {
        if from == to {
            return;
        }
        tracing::trace!(target: "trellis::editor", from, to, "move row");
        self.signals.emit_rows_moved(from, to, || {
            let mut store = self.store.write();
            let item = store.remove(from);
            store.insert_item(to, item);
        });
    }

    fn clear(&self) {
        tracing::trace!(target: "trellis::editor", "clear collection");
        self.signals.emit_reset(|| {
            self.store.write().clear();
        });
    }

    fn draw_row(&self, painter: &mut dyn Painter, rect: Rect, index: usize) {
        let store = self.store.read();
        let item = &store.as_slice()[index];
        if let Some(draw) = &self.draw {
            draw(painter, rect, item);
        }
    }

    fn row_height(&self, index: usize) -> f32 {
        let store = self.store.read();
        let item = &store.as_slice()[index];
        match &self.height {
            Some(height) => height(item),
            None => DEFAULT_ROW_HEIGHT,
        }
    }

    fn signals(&self) -> &EditorSignals {
        &self.signals
    }
}
