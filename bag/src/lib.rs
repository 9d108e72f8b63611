//! A multiset ("bag") container backed by a [Vec].
//!
//! Elements keep their insertion order, duplicates are allowed, and there is
//! no validation of what gets stored. Use `Bag<Option<T>>` when absent values
//! need to be stored and matched like any other element.
//!
//! The bag never hands out its live storage: construction from a slice copies
//! the elements in, and [Bag::snapshot] copies them out.

use collection_traits::{Container, HasLength};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};
use tracing::trace;

pub use snapshot::Snapshot;

pub mod snapshot;


#[derive(Clone)]
pub struct Bag<E> {
    items: Vec<E>,
}

impl<E> Bag<E> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a bag holding a copy of `source`, in the same order
    ///
    /// An absent source produces an empty bag
    pub fn from_source(source: Option<&[E]>) -> Self
    where
        E: Clone,
    {
        match source {
            Some(source) => {
                trace!(len = source.len(), "creating bag from source");
                Self {
                    items: source.to_vec(),
                }
            }
            None => {
                trace!("bag source is absent, creating empty bag");
                Self::new()
            }
        }
    }

    /// Appends an item to the bag
    pub fn add(&mut self, item: E) {
        self.items.push(item);
    }

    /// Removes a single occurrence of `item`, the earliest added one
    ///
    /// Returns `false` and leaves the bag untouched if no element matches
    pub fn remove(&mut self, item: &E) -> bool
    where
        E: PartialEq,
    {
        if self.items.is_empty() {
            return false;
        }
        Container::remove(&mut self.items, item)
    }

    pub fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        if self.items.is_empty() {
            return false;
        }
        Container::contains(&self.items, item)
    }

    /// Number of occurrences of `item` in the bag
    pub fn count(&self, item: &E) -> usize
    where
        E: PartialEq,
    {
        self.items.iter().filter(|x| *x == item).count()
    }

    /// Number of elements in the bag, counting duplicates
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over a copy of the current contents
    ///
    /// The snapshot is detached from the bag: anything added, removed or
    /// cleared afterward is not observed by it.
    #[doc(alias = "iterator")]
    pub fn snapshot(&self) -> Snapshot<E>
    where
        E: Clone,
    {
        Snapshot::new(self.items.clone())
    }

    pub fn clear(&mut self) {
        trace!(len = self.items.len(), "clearing bag");
        self.items.clear();
    }
}

impl<E> Default for Bag<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HasLength for Bag<E> {
    fn len(&self) -> usize {
        Bag::len(self)
    }

    fn is_empty(&self) -> bool {
        Bag::is_empty(self)
    }
}

impl<E: PartialEq> Container for Bag<E> {
    type Item = E;

    fn add(&mut self, item: Self::Item) {
        Bag::add(self, item)
    }

    fn remove(&mut self, item: &Self::Item) -> bool {
        Bag::remove(self, item)
    }

    fn contains(&self, item: &Self::Item) -> bool {
        Bag::contains(self, item)
    }

    fn clear(&mut self) {
        Bag::clear(self)
    }
}

impl<E: Clone> From<&[E]> for Bag<E> {
    fn from(source: &[E]) -> Self {
        Self::from_source(Some(source))
    }
}

impl<E> From<Vec<E>> for Bag<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E> FromIterator<E> for Bag<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Bag<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for Bag<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<E: Clone> IntoIterator for &Bag<E> {
    type Item = E;
    type IntoIter = Snapshot<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

impl<E: Display> Display for Bag<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bag[{}]", self.items.iter().format(", "))
    }
}

impl<E: Debug> Debug for Bag<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bag")?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}
