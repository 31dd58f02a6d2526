use std::iter::FusedIterator;

/// Restartable cursor over every slot of a [`SlotMap`](crate::SlotMap).
///
/// Yields slots in ascending key order, vacant ones included (they hold
/// `T::default()`). Pair with [`SlotMap::has_value`](crate::SlotMap::has_value)
/// to skip them.
#[derive(Clone, Debug)]
pub struct Enumerator<'a, T> {
    values: &'a [T],
    /// Number of slots already yielded.
    pos: usize,
}

impl<'a, T> Enumerator<'a, T> {
    pub(crate) fn new(values: &'a [T]) -> Self {
        Self { values, pos: 0 }
    }

    /// Rewind to before the first slot.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, T> Iterator for Enumerator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.values.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.values.len() - self.pos;
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Enumerator<'_, T> {}

impl<T> FusedIterator for Enumerator<'_, T> {}
