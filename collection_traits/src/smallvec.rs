use crate::{Container, HasLength};
use smallvec::SmallVec;

impl<const N: usize, T> HasLength for SmallVec<[T; N]> {
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn is_empty(&self) -> bool {
        SmallVec::is_empty(self)
    }
}

impl<const N: usize, T: PartialEq> Container for SmallVec<[T; N]> {
    type Item = T;

    fn add(&mut self, item: Self::Item) {
        SmallVec::push(self, item)
    }

    fn remove(&mut self, item: &Self::Item) -> bool {
        match <[T]>::iter(self).position(|x| x == item) {
            Some(idx) => {
                SmallVec::remove(self, idx);
                true
            }
            None => false,
        }
    }

    fn contains(&self, item: &Self::Item) -> bool {
        <[T]>::contains(self, item)
    }

    fn clear(&mut self) {
        SmallVec::clear(self)
    }
}
