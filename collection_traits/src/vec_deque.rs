use crate::Container;
use std::collections::VecDeque;

impl<T: PartialEq> Container for VecDeque<T> {
    type Item = T;

    fn add(&mut self, item: Self::Item) {
        VecDeque::push_back(self, item)
    }

    fn remove(&mut self, item: &Self::Item) -> bool {
        match VecDeque::iter(self).position(|x| x == item) {
            Some(idx) => VecDeque::remove(self, idx).is_some(),
            None => false,
        }
    }

    fn contains(&self, item: &Self::Item) -> bool {
        VecDeque::contains(self, item)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

#[cfg(test)]
mod test {
    use crate::Container;
    use rstest::rstest;
    use std::collections::VecDeque;

    #[rstest]
    #[case(&[1, 2, 1], 1, &[2, 1], true)]
    #[case(&[1, 2, 1], 2, &[1, 1], true)]
    #[case(&[1, 2, 1], 3, &[1, 2, 1], false)]
    #[case(&[], 3, &[], false)]
    fn remove_keeps_order(
        #[case] initial: &[i32],
        #[case] item: i32,
        #[case] expected: &[i32],
        #[case] removed: bool,
    ) {
        let mut q: VecDeque<i32> = initial.iter().copied().collect();
        assert_eq!(Container::remove(&mut q, &item), removed);
        assert!(q.iter().eq(expected.iter()));
    }
}
