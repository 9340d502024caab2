use super::{Error, Result};

/// A distinct symbol together with how many of its occurrences are still
/// available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthEntry<T> {
    pub symbol: T,
    pub count: usize,
}

impl<T> RunLengthEntry<T> {
    pub fn new(symbol: T, count: usize) -> Self {
        Self { symbol, count }
    }
}

/// A run-length encoded multiset, sorted ascending by symbol.
///
/// Every symbol appears at most once, and every count is positive.
///
/// ```rust
/// use mset::enumerator::{ResidualMultiset, RunLengthEntry};
/// let index = ResidualMultiset::build("yellow".chars()).unwrap();
///
/// assert_eq!(index.entries(), &[
///     RunLengthEntry::new('e', 1),
///     RunLengthEntry::new('l', 2),
///     RunLengthEntry::new('o', 1),
///     RunLengthEntry::new('w', 1),
///     RunLengthEntry::new('y', 1),
/// ]);
/// assert_eq!(index.total(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualMultiset<T> {
    entries: Vec<RunLengthEntry<T>>,
}

impl<T> Default for ResidualMultiset<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Ord> ResidualMultiset<T> {
    /// Sort the symbols and collapse equal neighbours into counted entries.
    pub fn build<I: IntoIterator<Item = T>>(symbols: I) -> Result<Self> {
        let mut symbols: Vec<T> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyDomain);
        }
        symbols.sort_unstable();

        let mut entries: Vec<RunLengthEntry<T>> = Vec::new();
        for symbol in symbols {
            match entries.last_mut() {
                Some(last) if last.symbol == symbol => last.count += 1,
                _ => entries.push(RunLengthEntry::new(symbol, 1)),
            }
        }
        Ok(Self { entries })
    }
}

impl<T> ResidualMultiset<T> {
    pub fn entries(&self) -> &[RunLengthEntry<T>] {
        &self.entries
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of symbol occurrences, counting repeats.
    pub fn total(&self) -> usize {
        self.suffix_total(0)
    }

    /// The number of occurrences held by the entries at `from` and after.
    pub fn suffix_total(&self, from: usize) -> usize {
        self.entries.iter().skip(from).map(|e| e.count).sum()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&RunLengthEntry<T>> {
        self.entries.get(index)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear()
    }

    pub(crate) fn push(&mut self, entry: RunLengthEntry<T>) {
        debug_assert!(entry.count > 0);
        self.entries.push(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_collapses_runs() {
        let index = ResidualMultiset::build("banana".chars()).unwrap();
        assert_eq!(
            index.entries(),
            &[
                RunLengthEntry::new('a', 3),
                RunLengthEntry::new('b', 1),
                RunLengthEntry::new('n', 2),
            ]
        );
        assert_eq!(index.len(), 3);
        assert_eq!(index.total(), 6);
        assert_eq!(index.suffix_total(1), 3);
        assert_eq!(index.suffix_total(3), 0);
    }

    #[test]
    fn test_build_single_symbol() {
        let index = ResidualMultiset::build(vec![7]).unwrap();
        assert_eq!(index.entries(), &[RunLengthEntry::new(7, 1)]);
    }

    #[test]
    fn test_build_all_equal() {
        let index = ResidualMultiset::build(vec![3u8; 5]).unwrap();
        assert_eq!(index.entries(), &[RunLengthEntry::new(3, 5)]);
    }

    #[test]
    fn test_build_empty_fails() {
        match ResidualMultiset::build(Vec::<u32>::new()) {
            Err(Error::EmptyDomain) => {}
            other => panic!("expected EmptyDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_build_ignores_input_order() {
        let a = ResidualMultiset::build(vec![3, 1, 2, 1, 3, 3]).unwrap();
        let b = ResidualMultiset::build(vec![1, 1, 2, 3, 3, 3]).unwrap();
        assert_eq!(a, b);
    }
}
