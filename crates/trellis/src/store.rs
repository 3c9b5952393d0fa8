//! Dual-representation backing storage.
//!
//! Inspector collections come in two shapes: fixed-capacity arrays, whose
//! length only changes by reallocating the whole array, and growable lists
//! that mutate in place. [`DualStore`] unifies the two behind one set of
//! structural operations so the editors above it never branch on the
//! representation.
//!
//! The fixed variant implements every structural change as
//! copy-construct-replace: the boxed slice is materialized into a `Vec`,
//! mutated, and converted back. Callers hold the store by `&mut self`, so
//! the replaced allocation is never observable from outside.

/// An ordered collection that is either a fixed-capacity array or a
/// growable list.
///
/// The observable behavior of every operation is identical for both
/// representations; only the allocation strategy differs.
///
/// # Example
///
/// ```
/// use trellis::store::DualStore;
///
/// let mut fixed = DualStore::fixed(vec![1, 2, 3].into_boxed_slice());
/// let mut growable = DualStore::growable(vec![1, 2, 3]);
///
/// fixed.insert(1);
/// growable.insert(1);
///
/// assert_eq!(fixed.as_slice(), growable.as_slice());
/// assert_eq!(fixed.as_slice(), &[1, 0, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DualStore<T> {
    /// Fixed-capacity array; structural changes reallocate.
    Fixed(Box<[T]>),
    /// Growable list; structural changes mutate in place.
    Growable(Vec<T>),
}

impl<T> DualStore<T> {
    /// Create a fixed-capacity store over the given array.
    pub fn fixed(items: Box<[T]>) -> Self {
        Self::Fixed(items)
    }

    /// Create a growable store over the given list.
    pub fn growable(items: Vec<T>) -> Self {
        Self::Growable(items)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` if the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// `true` for the fixed-capacity representation.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Fixed(items) => items,
            Self::Growable(items) => items,
        }
    }

    /// View the elements as a mutable slice.
    ///
    /// Element mutation is always in place; only structural changes
    /// reallocate the fixed representation.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::Fixed(items) => items,
            Self::Growable(items) => items,
        }
    }

    /// Reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if out of
    /// range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Swap the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    /// Insert `item` at `index`, shifting later elements one position back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_item(&mut self, index: usize, item: T) {
        match self {
            Self::Fixed(items) => {
                let mut vec = std::mem::take(items).into_vec();
                vec.insert(index, item);
                *items = vec.into_boxed_slice();
            }
            Self::Growable(items) => items.insert(index, item),
        }
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one position forward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        match self {
            Self::Fixed(items) => {
                let mut vec = std::mem::take(items).into_vec();
                let removed = vec.remove(index);
                *items = vec.into_boxed_slice();
                removed
            }
            Self::Growable(items) => items.remove(index),
        }
    }

    /// Remove all elements, keeping the representation.
    pub fn clear(&mut self) {
        match self {
            Self::Fixed(items) => *items = Box::new([]),
            Self::Growable(items) => items.clear(),
        }
    }
}

impl<T: Default> DualStore<T> {
    /// Append a default-valued element at the end.
    pub fn append(&mut self) {
        let len = self.len();
        self.insert_item(len, T::default());
    }

    /// Insert a default-valued element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize) {
        self.insert_item(index, T::default());
    }
}

impl<T> From<Vec<T>> for DualStore<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Growable(items)
    }
}

impl<T> From<Box<[T]>> for DualStore<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::Fixed(items)
    }
}

impl<'a, T> IntoIterator for &'a DualStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
