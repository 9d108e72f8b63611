#![forbid(clippy::unconditional_recursion)]

pub mod has_length;
pub mod vec;
pub mod vec_deque;

#[cfg(feature = "smallvec")]
pub mod smallvec;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Unordered collection of values that may hold duplicates
///
/// Matching is done by value equality, and only the first matching element
/// is affected by [Container::remove]
pub trait Container: HasLength {
    type Item;

    /// Adds an item to the end of the collection
    fn add(&mut self, item: Self::Item);

    /// Removes the first element equal to `item`, shifting later elements
    /// back by one. Returns `false` if nothing matched
    fn remove(&mut self, item: &Self::Item) -> bool;

    fn contains(&self, item: &Self::Item) -> bool;

    fn clear(&mut self);
}
