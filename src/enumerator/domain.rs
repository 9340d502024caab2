use super::multiset::{ResidualMultiset, RunLengthEntry};
use super::{Error, Result};

/// The symbols eligible for one output position, given the prefix chosen
/// so far, plus a cursor at the last symbol emitted at that position.
#[derive(Debug, Clone)]
pub struct PositionDomain<T> {
    residual: ResidualMultiset<T>,
    // index of the last emitted entry, None before the first advance.
    cursor: Option<usize>,
    // exclusive bound for the cursor; equal to residual.len() unless pinned.
    end: usize,
}

impl<T> Default for PositionDomain<T> {
    fn default() -> Self {
        Self {
            residual: ResidualMultiset::default(),
            cursor: None,
            end: 0,
        }
    }
}

impl<T> PositionDomain<T> {
    pub fn new(residual: ResidualMultiset<T>) -> Self {
        let end = residual.len();
        Self {
            residual,
            cursor: None,
            end,
        }
    }

    pub fn residual(&self) -> &ResidualMultiset<T> {
        &self.residual
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    /// True if there is another entry after the cursor.
    pub fn has_next(&self) -> bool {
        self.next_index() < self.end
    }

    /// Like `has_next`, but also requires the entries after the cursor to
    /// hold at least `min_remaining` occurrences between them.
    ///
    /// Counts are summed from the back, stopping as soon as the threshold is
    /// reached.
    pub fn has_next_with(&self, min_remaining: usize) -> bool {
        if !self.has_next() {
            return false;
        }
        let mut total = 0;
        for entry in self.residual.entries()[self.next_index()..].iter().rev() {
            if total >= min_remaining {
                break;
            }
            total += entry.count;
        }
        total >= min_remaining
    }

    /// Move the cursor to the next entry and return its symbol.
    ///
    /// # Panics
    ///
    /// If there is no next entry. Callers check `has_next` first; getting
    /// here otherwise is a bug in the state machine.
    pub fn advance(&mut self) -> &T {
        let next = self.next_index();
        if next >= self.end {
            panic!(
                "position domain exhausted: cursor={:?} end={}",
                self.cursor, self.end
            );
        }
        self.cursor = Some(next);
        &self.residual.entries()[next].symbol
    }

    /// Forget the cursor and every entry. The allocation is kept.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.end = 0;
        self.residual.clear();
    }

    /// Restrict the domain to the single entry at `index`, which becomes the
    /// only value the next `advance` can return.
    pub(crate) fn pin(&mut self, index: usize) {
        debug_assert!(index < self.residual.len());
        self.cursor = index.checked_sub(1);
        self.end = index + 1;
    }
}

/// Decides how a position's domain is derived from the position before it,
/// and when a position may still advance.
///
/// The two policies differ only in how much of the parent's residual
/// multiset the child inherits.
pub trait DerivePolicy {
    /// Reject output lengths this policy can't enumerate for a source of
    /// `source_len` symbols. `k` is already known to be positive.
    fn check_output_len(&self, source_len: usize, k: usize) -> Result<()>;

    /// The index of the first parent entry the child inherits, given the
    /// parent's cursor.
    fn first_inherited(&self, cursor: usize) -> usize;

    /// Whether `domain`, the domain of output position `position` in a
    /// `k`-long output, can produce another symbol.
    fn has_next<T>(&self, domain: &PositionDomain<T>, position: usize, k: usize) -> bool;

    /// Rebuild `child` from `parent` at the parent's current cursor.
    ///
    /// The entry under the cursor was just consumed, so it is inherited with
    /// its count decremented, or dropped when that was its last occurrence.
    ///
    /// # Panics
    ///
    /// If the parent has not emitted a symbol yet.
    fn derive_child<T: Clone>(&self, parent: &PositionDomain<T>, child: &mut PositionDomain<T>) {
        child.reset();
        let cursor = match parent.cursor {
            Some(cursor) => cursor,
            None => panic!("deriving a child from a domain that emitted nothing"),
        };
        let inherited = parent
            .residual
            .entries()
            .iter()
            .enumerate()
            .skip(self.first_inherited(cursor));
        for (i, entry) in inherited {
            if i != cursor {
                child.residual.push(entry.clone());
            } else if entry.count > 1 {
                child
                    .residual
                    .push(RunLengthEntry::new(entry.symbol.clone(), entry.count - 1));
            }
        }
        child.end = child.residual.len();
    }
}

/// Order-independent selection: symbols never decrease from one position
/// to the next, which is what keeps each sub-multiset from being produced
/// twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationPolicy;

impl DerivePolicy for CombinationPolicy {
    fn check_output_len(&self, source_len: usize, k: usize) -> Result<()> {
        if k >= source_len {
            return Err(Error::Configuration(
                "combination length must be less than the number of source symbols",
            ));
        }
        Ok(())
    }

    fn first_inherited(&self, cursor: usize) -> usize {
        cursor
    }

    // Prunes branches that can't fill the remaining k - position slots.
    fn has_next<T>(&self, domain: &PositionDomain<T>, position: usize, k: usize) -> bool {
        domain.has_next_with(k - position)
    }
}

/// Order-dependent arrangement: any symbol with occurrences left may appear
/// at any later position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermutationPolicy;

impl DerivePolicy for PermutationPolicy {
    fn check_output_len(&self, source_len: usize, k: usize) -> Result<()> {
        if k > source_len {
            return Err(Error::Configuration(
                "permutation length cannot exceed the number of source symbols",
            ));
        }
        Ok(())
    }

    fn first_inherited(&self, _cursor: usize) -> usize {
        0
    }

    fn has_next<T>(&self, domain: &PositionDomain<T>, _position: usize, _k: usize) -> bool {
        domain.has_next()
    }
}
