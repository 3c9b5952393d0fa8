//! Editor specialization for keyed (dictionary-like) collections.
//!
//! `KeyedEditor` edits an insertion-ordered sequence of `(key, value)`
//! entries where keys are unique at all times. "Add" means "insert a new
//! key mapped to a default value": the UI writes the candidate key into the
//! editor's pending-key slot, and pressing add commits it. A missing
//! (null) key is a recoverable, user-reportable condition, not a fault.
//!
//! Keyed collections disable drag-reordering: key identity, not position,
//! is the collection's organizing structure. Position is insertion order
//! and carries no lookup meaning.

use parking_lot::RwLock;
use std::fmt::Debug;
use std::sync::Arc;

use crate::editor::seq::DEFAULT_ROW_HEIGHT;
use crate::editor::{CollectionEditor, EditorSignals};
use crate::error::{EditError, Result};
use crate::geometry::Rect;
use crate::paint::Painter;

/// Type alias for an entry draw function.
pub type KeyedDrawFn<K, V> = Arc<dyn Fn(&mut dyn Painter, Rect, &K, &V) + Send + Sync>;

/// A collection editor over unique-keyed `(key, value)` entries.
///
/// # Example
///
/// ```
/// use trellis::editor::{CollectionEditor, KeyedEditor};
///
/// let editor = KeyedEditor::<String, i32>::new();
///
/// editor.add_entry(Some("speed".to_string())).unwrap();
/// editor.add_entry(Some("speed".to_string())).unwrap(); // idempotent no-op
/// assert_eq!(editor.len(), 1);
///
/// // A null key is recoverable, never a crash:
/// assert!(editor.add_entry(None).is_err());
/// assert_eq!(editor.len(), 1);
/// ```
pub struct KeyedEditor<K, V> {
    entries: RwLock<Vec<(K, V)>>,
    /// Candidate key the UI has staged for the next add.
    pending_key: RwLock<Option<K>>,
    draw: Option<KeyedDrawFn<K, V>>,
    signals: EditorSignals,
}

impl<K, V> KeyedEditor<K, V>
where
    K: Eq + Clone + Debug + Default + Send + Sync + 'static,
    V: Default + Send + Sync + 'static,
{
    /// Creates an empty keyed editor.
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Creates a keyed editor over existing entries.
    ///
    /// The entries are expected to satisfy key uniqueness; a pre-existing
    /// violation is detected and reported when an insertion touches the
    /// duplicated key.
    pub fn from_entries(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: RwLock::new(entries),
            pending_key: RwLock::new(None),
            draw: None,
            signals: EditorSignals::new(),
        }
    }

    /// Sets the entry draw function.
    pub fn with_draw<F>(mut self, draw: F) -> Self
    where
        F: Fn(&mut dyn Painter, Rect, &K, &V) + Send + Sync + 'static,
    {
        self.draw = Some(Arc::new(draw));
        self
    }

    /// Stages the key the next [`add`](CollectionEditor::add) will commit.
    pub fn set_pending_key(&self, key: Option<K>) {
        *self.pending_key.write() = key;
    }

    /// The currently staged key, if any.
    pub fn pending_key(&self) -> Option<K> {
        self.pending_key.read().clone()
    }

    /// `true` if the collection contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.read().iter().any(|(k, _)| k == key)
    }

    /// Read-only access to the entries, in insertion order.
    pub fn entries(&self) -> impl std::ops::Deref<Target = Vec<(K, V)>> + '_ {
        self.entries.read()
    }

    /// Provides mutable access to the value stored under `key`.
    pub fn modify_value<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut entries = self.entries.write();
        entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| f(v))
    }

    /// Inserts `key` mapped to a default value at the end of the
    /// collection.
    ///
    /// - `None` is the null-key sentinel and yields
    ///   [`EditError::NullKey`], a recoverable, user-reportable
    ///   condition; the collection is unchanged.
    /// - If `key` is already present the call is an idempotent no-op.
    /// - If the collection already violates key uniqueness for `key`, the
    ///   insertion fails with [`EditError::CorruptedCollection`], which the
    ///   caller must not swallow.
    pub fn add_entry(&self, key: Option<K>) -> Result<()> {
        let key = key.ok_or(EditError::NullKey)?;

        let occurrences = {
            let entries = self.entries.read();
            entries.iter().filter(|(k, _)| *k == key).count()
        };
        if occurrences > 1 {
            return Err(EditError::corrupted(format!("{key:?}")));
        }
        if occurrences == 1 {
            tracing::trace!(target: "trellis::keyed", key = ?key, "key already present, no-op");
            return Ok(());
        }

        let row = self.entries.read().len();
        tracing::trace!(target: "trellis::keyed", key = ?key, row, "insert keyed entry");
        self.signals.emit_rows_inserted(row, row, || {
            self.entries.write().push((key, V::default()));
        });
        Ok(())
    }

    /// Reports a recoverable editing error to the user instead of
    /// propagating it.
    fn report(&self, err: EditError) {
        tracing::warn!(target: "trellis::keyed", error = %err, "edit rejected");
        self.signals.edit_failed.emit(err);
    }
}

impl<K, V> Default for KeyedEditor<K, V>
where
    K: Eq + Clone + Debug + Default + Send + Sync + 'static,
    V: Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CollectionEditor for KeyedEditor<K, V>
where
    K: Eq + Clone + Debug + Default + Send + Sync + 'static,
    V: Default + Send + Sync + 'static,
{
    fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Key identity, not position, organizes the collection.
    fn allow_reordering(&self) -> bool {
        false
    }

    fn can_drag(&self, _index: usize) -> bool {
        false
    }

    fn can_remove(&self, index: usize) -> bool {
        index < self.entries.read().len()
    }

    /// Commits the staged pending key.
    ///
    /// A missing pending key is the one recognized recoverable case: it is
    /// logged, reported through [`EditorSignals::edit_failed`], and the
    /// collection stays untouched. Any other insertion failure is a broken
    /// collection invariant and panics.
    fn add(&self) {
        let key = self.pending_key.write().take();
        match self.add_entry(key) {
            Ok(()) => {}
            Err(err @ EditError::NullKey) => self.report(err),
            Err(err) => panic!("keyed insertion failed: {err}"),
        }
    }

    /// Inserts the default key mapped to a default value at `index`, or
    /// reports [`EditError::DuplicateKey`] when the default key is already
    /// taken, since a second one cannot be synthesized.
    fn insert(&self, index: usize) {
        let key = K::default();
        if self.contains_key(&key) {
            self.report(EditError::duplicate_key(format!("{key:?}")));
            return;
        }
        tracing::trace!(target: "trellis::keyed", index, "insert default keyed entry");
        self.signals.emit_rows_inserted(index, index, || {
            self.entries.write().insert(index, (key, V::default()));
        });
    }

    /// Always reports [`EditError::DuplicateKey`]: a unique key cannot be
    /// cloned.
    fn duplicate(&self, index: usize) {
        let key = {
            let entries = self.entries.read();
            format!("{:?}", entries[index].0)
        };
        self.report(EditError::duplicate_key(key));
    }

    fn remove(&self, index: usize) {
        tracing::trace!(target: "trellis::keyed", index, "remove keyed entry");
        self.signals.emit_rows_removed(index, index, || {
            self.entries.write().remove(index);
        });
    }

    /// Positional move only; harmless to key identity. The UI never offers
    /// it because [`can_drag`](Self::can_drag) is always `false`.
    fn move_row(&self, from: usize, to: usize) {
        if from == to {
            return;
        }
        self.signals.emit_rows_moved(from, to, || {
            let mut entries = self.entries.write();
            let entry = entries.remove(from);
            entries.insert(to, entry);
        });
    }

    fn clear(&self) {
        tracing::trace!(target: "trellis::keyed", "clear keyed collection");
        self.signals.emit_reset(|| {
            self.entries.write().clear();
        });
    }

    fn draw_row(&self, painter: &mut dyn Painter, rect: Rect, index: usize) {
        let entries = self.entries.read();
        let (key, value) = &entries[index];
        if let Some(draw) = &self.draw {
            draw(painter, rect, key, value);
        }
    }

    fn row_height(&self, index: usize) -> f32 {
        assert!(index < self.entries.read().len(), "row index out of range");
        DEFAULT_ROW_HEIGHT
    }

    fn signals(&self) -> &EditorSignals {
        &self.signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::CommandPainter;
    use parking_lot::Mutex;

    fn editor() -> KeyedEditor<String, i32> {
        KeyedEditor::from_entries(vec![
            ("x".to_string(), 1),
            ("y".to_string(), 2),
        ])
    }

    #[test]
    fn test_add_entry_idempotent() {
        let editor = editor();
        editor.add_entry(Some("x".to_string())).unwrap();
        assert_eq!(editor.len(), 2); // unchanged

        editor.add_entry(Some("z".to_string())).unwrap();
        assert_eq!(editor.len(), 3);
        assert!(editor.contains_key(&"z".to_string()));
        assert_eq!(editor.entries()[2], ("z".to_string(), 0));
    }

    #[test]
    fn test_null_key_is_recoverable() {
        let editor = editor();
        assert_eq!(editor.add_entry(None), Err(EditError::NullKey));
        assert_eq!(editor.len(), 2); // collection unchanged
    }

    #[test]
    fn test_add_reports_null_key_without_panicking() {
        let editor = editor();
        let failures = Arc::new(Mutex::new(Vec::new()));

        let recv = failures.clone();
        editor.signals().edit_failed.connect(move |err| {
            recv.lock().push(err.clone());
        });

        // No pending key staged.
        editor.add();

        assert_eq!(editor.len(), 2);
        assert_eq!(*failures.lock(), vec![EditError::NullKey]);
    }

    #[test]
    fn test_pending_key_commit() {
        let editor = editor();
        editor.set_pending_key(Some("z".to_string()));
        editor.add();

        assert_eq!(editor.len(), 3);
        assert!(editor.contains_key(&"z".to_string()));
        // The pending key was consumed; the next add is a null-key report.
        assert_eq!(editor.pending_key(), None);
    }

    #[test]
    fn test_corruption_propagates() {
        let corrupted = KeyedEditor::from_entries(vec![
            ("x".to_string(), 1),
            ("x".to_string(), 2),
        ]);
        assert_eq!(
            corrupted.add_entry(Some("x".to_string())),
            Err(EditError::corrupted("\"x\""))
        );
    }

    #[test]
    #[should_panic(expected = "keyed insertion failed")]
    fn test_add_panics_on_corruption() {
        let corrupted = KeyedEditor::from_entries(vec![
            ("x".to_string(), 1),
            ("x".to_string(), 2),
        ]);
        corrupted.set_pending_key(Some("x".to_string()));
        corrupted.add();
    }

    #[test]
    fn test_insert_default_key() {
        let editor = editor();
        editor.insert(0);
        assert_eq!(editor.entries()[0], (String::new(), 0));

        // A second default key cannot be synthesized.
        let failures = Arc::new(Mutex::new(Vec::new()));
        let recv = failures.clone();
        editor.signals().edit_failed.connect(move |err| {
            recv.lock().push(err.clone());
        });

        editor.insert(0);
        assert_eq!(editor.len(), 3); // unchanged
        assert_eq!(*failures.lock(), vec![EditError::duplicate_key("\"\"")]);
    }

    #[test]
    fn test_duplicate_reports_duplicate_key() {
        let editor = editor();
        let failures = Arc::new(Mutex::new(Vec::new()));
        let recv = failures.clone();
        editor.signals().edit_failed.connect(move |err| {
            recv.lock().push(err.clone());
        });

        editor.duplicate(0);
        assert_eq!(editor.len(), 2); // unchanged
        assert_eq!(*failures.lock(), vec![EditError::duplicate_key("\"x\"")]);
    }

    #[test]
    fn test_reordering_disabled() {
        let editor = editor();
        assert!(!editor.allow_reordering());
        assert!(!editor.can_drag(0));
        assert!(editor.can_remove(0));
    }

    #[test]
    fn test_remove_and_clear() {
        let editor = editor();
        editor.remove(0);
        assert_eq!(editor.len(), 1);
        assert!(!editor.contains_key(&"x".to_string()));

        editor.clear();
        assert!(editor.is_empty());
    }

    #[test]
    fn test_draw_row() {
        let editor = KeyedEditor::from_entries(vec![("x".to_string(), 42)]).with_draw(
            |painter, rect, key: &String, value: &i32| {
                painter.draw_text(rect, &format!("{key} = {value}"));
            },
        );

        let mut painter = CommandPainter::new();
        editor.draw_row(&mut painter, Rect::new(0.0, 0.0, 100.0, 20.0), 0);
        assert_eq!(painter.texts(), vec!["x = 42"]);
    }

    #[test]
    fn test_modify_value() {
        let editor = editor();
        editor.modify_value(&"y".to_string(), |v| *v = 99);
        assert_eq!(editor.entries()[1], ("y".to_string(), 99));
        assert_eq!(editor.modify_value(&"missing".to_string(), |_| ()), None);
    }
}
