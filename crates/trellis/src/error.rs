//! Error types for collection editing.

/// Result type alias for editing operations.
pub type Result<T> = std::result::Result<T, EditError>;

/// Recoverable and structural errors raised while editing a collection.
///
/// Out-of-range indices and invalid window bounds are programming-contract
/// violations and panic instead; this enum covers the conditions the editor
/// reports and survives. The type is `Clone + PartialEq` so errors can
/// travel through `Signal<EditError>` and be asserted on in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The user pressed "add" on a keyed collection without selecting a key.
    #[error("cannot add a null key; select a concrete key value first")]
    NullKey,

    /// Inserting this key would break key uniqueness.
    #[error("key '{key}' is already present in the collection")]
    DuplicateKey { key: String },

    /// The backing collection already violates key uniqueness.
    #[error("collection invariant violated: key '{key}' appears more than once")]
    CorruptedCollection { key: String },
}

impl EditError {
    /// Create a duplicate-key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Create a corrupted-collection error.
    pub fn corrupted(key: impl Into<String>) -> Self {
        Self::CorruptedCollection { key: key.into() }
    }
}
