//! Trellis: a collection-editing adaptor layer for inspector-style UIs.
//!
//! Interactive editors show ordered collections (component lists, layer
//! stacks, key/value tables) and let the user create, remove, duplicate,
//! and reorder rows. The backing storage differs from field to field
//! (fixed-capacity array, growable list, keyed dictionary), and large
//! collections are shown one page at a time. Trellis unifies all of that
//! behind one capability contract the view drives with plain row indices.
//!
//! # Core Pieces
//!
//! - [`store::DualStore`]: one set of structural operations over both a
//!   fixed-capacity array (rebuilt on change) and a growable list (mutated
//!   in place)
//! - [`editor::CollectionEditor`]: the operation contract of
//!   add/insert/duplicate/remove/move/clear plus drawing and row heights
//! - [`editor::SeqEditor`]: the general editor over a `DualStore`
//! - [`editor::PagedEditor`]: a decorator restricting any editor to a
//!   contiguous index window that shrinks with the backing collection
//! - [`editor::KeyedEditor`]: the key/value specialization with
//!   key-uniqueness-aware insertion
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::editor::{CollectionEditor, PagedEditor, SeqEditor};
//!
//! let backing = Arc::new(SeqEditor::growable(vec![1, 2, 3, 4, 5]));
//! let page = PagedEditor::new(backing.clone(), 1, 3);
//!
//! assert_eq!(page.len(), 3);
//! page.remove(0);            // removes backing row 1
//! assert_eq!(backing.len(), 4);
//! assert_eq!(page.len(), 3); // window re-clamped, still full
//! ```
//!
//! # Error Model
//!
//! Out-of-range indices and invalid window bounds are programming errors
//! and panic. Recoverable user-input errors (adding a null key) are logged,
//! reported through [`editor::EditorSignals::edit_failed`], and leave the
//! collection untouched. Anything else that fails during insertion is a
//! genuine fault and propagates.

pub mod editor;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod store;

pub use editor::{
    CollectionEditor, EditorSignals, KeyedEditor, PageWindow, PagedEditor, RowFlags, SeqEditor,
};
pub use error::{EditError, Result};
pub use geometry::{Point, Rect, Size};
pub use paint::{CommandPainter, PaintCommand, Painter};
pub use store::DualStore;

// Re-export the signal types editors hand out.
pub use trellis_core::{ConnectionGuard, ConnectionId, Signal};
