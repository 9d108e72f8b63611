use std::iter::FusedIterator;

/// Owned iterator over a point-in-time copy of a [Bag](crate::Bag)
#[derive(Debug, Clone)]
pub struct Snapshot<E> {
    items: std::vec::IntoIter<E>,
}

impl<E> Snapshot<E> {
    pub(crate) fn new(items: Vec<E>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Elements not yet yielded
    pub fn as_slice(&self) -> &[E] {
        self.items.as_slice()
    }
}

impl<E> Iterator for Snapshot<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<E> DoubleEndedIterator for Snapshot<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<E> ExactSizeIterator for Snapshot<E> {}

impl<E> FusedIterator for Snapshot<E> {}

#[cfg(test)]
mod test {
    use crate::Bag;
    use itertools::Itertools;

    #[test]
    fn survives_clear() {
        let mut bag: Bag<u32> = vec![1, 2, 3].into();

        let mut snapshot = bag.snapshot();
        assert_eq!(snapshot.next(), Some(1));
        bag.clear();
        bag.add(7);

        assert_eq!(snapshot.as_slice(), &[2, 3]);
        assert_eq!(snapshot.collect_vec(), vec![2, 3]);
    }

    #[test]
    fn stays_exhausted() {
        let bag: Bag<u32> = vec![1].into();

        let mut snapshot = bag.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.next(), Some(1));
        assert_eq!(snapshot.next(), None);
        assert_eq!(snapshot.next(), None);
    }

    #[test]
    fn restarts_on_each_call() {
        let bag: Bag<&str> = vec!["a", "b"].into();

        let mut first = bag.snapshot();
        first.next();
        let second = bag.snapshot();

        assert_eq!(first.collect_vec(), vec!["b"]);
        assert_eq!(second.rev().collect_vec(), vec!["b", "a"]);
    }
}
