use crate::Container;

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;

    fn add(&mut self, item: Self::Item) {
        Vec::push(self, item)
    }

    fn remove(&mut self, item: &Self::Item) -> bool {
        match <[T]>::iter(self).position(|x| x == item) {
            Some(idx) => {
                Vec::remove(self, idx);
                true
            }
            None => false,
        }
    }

    fn contains(&self, item: &Self::Item) -> bool {
        <[T]>::contains(self, item)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }
}
