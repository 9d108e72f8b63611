use crate::HasLength;
use std::collections::VecDeque;

#[duplicate::duplicate_item(
    ty;
    [ Vec<T> ];
    [ VecDeque<T> ];
)]
impl<T> HasLength for ty {
    fn len(&self) -> usize {
        <ty>::len(self)
    }

    fn is_empty(&self) -> bool {
        <ty>::is_empty(self)
    }
}
