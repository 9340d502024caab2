use parking_lot::Mutex;

/// An iterator that several threads can pull from at once.
///
/// Each `next` call holds the lock for a single step, so checking for and
/// taking an element is one atomic operation, and every element is handed
/// to exactly one caller.
///
/// ```rust
/// use mset::enumerator::{Permutations, SharedEnumerator};
/// let shared = SharedEnumerator::new(Permutations::from_chars("ab", 2).unwrap());
///
/// assert_eq!(shared.next(), Some(vec!['a', 'b']));
/// assert_eq!((&shared).count(), 1);
/// ```
pub struct SharedEnumerator<I> {
    inner: Mutex<I>,
}

impl<I: Iterator> SharedEnumerator<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<I::Item> {
        self.inner.lock().next()
    }

    pub fn into_inner(self) -> I {
        self.inner.into_inner()
    }
}

impl<'a, I: Iterator> Iterator for &'a SharedEnumerator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.lock().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::{Combinations, Permutations};
    use std::collections::HashSet;

    #[test]
    fn test_each_element_goes_to_one_thread() {
        let expected: Vec<Vec<char>> = Permutations::from_chars("mississippi", 5)
            .unwrap()
            .collect();
        let shared = SharedEnumerator::new(Permutations::from_chars("mississippi", 5).unwrap());

        let per_thread: Vec<Vec<Vec<char>>> = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|_| (&shared).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        let total: usize = per_thread.iter().map(|v| v.len()).sum();
        assert_eq!(total, expected.len());

        let seen: HashSet<Vec<char>> = per_thread.into_iter().flatten().collect();
        assert_eq!(seen, expected.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_each_thread_sees_increasing_order() {
        let shared = SharedEnumerator::new(Combinations::from_chars("abcdefghij", 4).unwrap());

        crossbeam::scope(|s| {
            for _ in 0..3 {
                s.spawn(|_| {
                    let mine: Vec<Vec<char>> = (&shared).collect();
                    assert!(mine.windows(2).all(|w| w[0] < w[1]));
                });
            }
        })
        .unwrap();

        assert!(shared.next().is_none());
    }

    #[test]
    fn test_into_inner() {
        let shared = SharedEnumerator::new(Combinations::from_chars("aab", 2).unwrap());
        assert_eq!(shared.next(), Some(vec!['a', 'a']));
        let mut inner = shared.into_inner();
        assert_eq!(inner.next(), Some(vec!['a', 'b']));
        assert!(!inner.has_next());
    }
}
