use std::iter::FusedIterator;

use super::domain::{CombinationPolicy, DerivePolicy, PermutationPolicy, PositionDomain};
use super::multiset::ResidualMultiset;
use super::{Error, Result};

/// Distinct k-combinations of a multiset, in lexicographic order.
pub type Combinations<T> = SequenceEnumerator<T, CombinationPolicy>;

/// Distinct k-permutations of a multiset, in lexicographic order.
pub type Permutations<T> = SequenceEnumerator<T, PermutationPolicy>;

/// An odometer over `k` position domains.
///
/// Each call to `try_next` advances the rightmost position that can still
/// advance and re-derives every domain to its right from the new prefix.
/// When a position runs out, the carry moves left; when position 0 runs out
/// the enumerator is exhausted.
///
/// ```rust
/// use mset::enumerator::Combinations;
/// let mut iter = Combinations::from_chars("aab", 2).unwrap();
///
/// assert_eq!(iter.next(), Some(vec!['a', 'a']));
/// assert_eq!(iter.next(), Some(vec!['a', 'b']));
/// assert_eq!(iter.next(), None);
/// ```
///
/// The enumerator is not restartable: construct a new one to start over.
#[derive(Debug, Clone)]
pub struct SequenceEnumerator<T, P> {
    // domains[i] is derived from domains[i - 1] at its current cursor.
    domains: Vec<PositionDomain<T>>,
    // the last produced output; positions left of resume_from are kept as is.
    buf: Vec<T>,
    // leftmost position to advance on the next call, None once exhausted.
    resume_from: Option<usize>,
    policy: P,
}

impl<T: Ord + Clone, P: DerivePolicy> SequenceEnumerator<T, P> {
    /// Create an enumerator of the `k`-long outputs of `symbols` under the
    /// given policy.
    ///
    /// Fails with `Error::Configuration` if `symbols` is empty, `k` is zero,
    /// or `k` is out of range for the policy.
    pub fn with_policy<I: IntoIterator<Item = T>>(symbols: I, k: usize, policy: P) -> Result<Self> {
        let symbols: Vec<T> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::Configuration("the source has no symbols"));
        }
        if k == 0 {
            return Err(Error::Configuration("output length must be positive"));
        }
        policy.check_output_len(symbols.len(), k)?;

        let buf = symbols[..k].to_vec();
        let root = ResidualMultiset::build(symbols)?;
        let mut domains = Vec::with_capacity(k);
        domains.push(PositionDomain::new(root));
        domains.resize_with(k, PositionDomain::default);

        let resume_from = if policy.has_next(&domains[0], 0, k) {
            Some(0)
        } else {
            None
        };
        Ok(Self {
            domains,
            buf,
            resume_from,
            policy,
        })
    }
}

impl<T: Ord + Clone, P: DerivePolicy + Default> SequenceEnumerator<T, P> {
    pub fn new<I: IntoIterator<Item = T>>(symbols: I, k: usize) -> Result<Self> {
        Self::with_policy(symbols, k, P::default())
    }
}

impl<T: Ord + Clone, P: DerivePolicy + Clone> SequenceEnumerator<T, P> {
    /// Split the enumeration of `symbols` into disjoint enumerators, one per
    /// distinct first symbol that starts at least one output.
    ///
    /// The partitions come in ascending first-symbol order, so draining them
    /// one after another yields exactly what a single enumerator would.
    /// Each one owns its state and can be sent to a different thread.
    pub fn partitions_with_policy<I: IntoIterator<Item = T>>(
        symbols: I,
        k: usize,
        policy: P,
    ) -> Result<Vec<Self>> {
        let whole = Self::with_policy(symbols, k, policy)?;
        let mut parts = Vec::with_capacity(whole.domains[0].residual().len());
        for index in 0..whole.domains[0].residual().len() {
            let mut part = whole.clone();
            part.domains[0].pin(index);
            if part.policy.has_next(&part.domains[0], 0, k) {
                part.resume_from = Some(0);
                parts.push(part);
            }
        }
        Ok(parts)
    }
}

impl<T: Ord + Clone, P: DerivePolicy + Clone + Default> SequenceEnumerator<T, P> {
    pub fn partitions<I: IntoIterator<Item = T>>(symbols: I, k: usize) -> Result<Vec<Self>> {
        Self::partitions_with_policy(symbols, k, P::default())
    }
}

impl<T: Clone, P: DerivePolicy> SequenceEnumerator<T, P> {
    pub fn has_next(&self) -> bool {
        self.resume_from.is_some()
    }

    /// The length of every produced output.
    pub fn k(&self) -> usize {
        self.domains.len()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Produce the next output, or `Error::Exhausted` if there is none.
    pub fn try_next(&mut self) -> Result<Vec<T>> {
        let start = match self.resume_from {
            Some(start) => start,
            None => return Err(Error::Exhausted),
        };
        let last = self.domains.len() - 1;

        for i in start..last {
            let (head, tail) = self.domains.split_at_mut(i + 1);
            let parent = &mut head[i];
            self.buf[i] = parent.advance().clone();
            self.policy.derive_child(parent, &mut tail[0]);
        }
        self.buf[last] = self.domains[last].advance().clone();

        self.resume_from = self.find_resume();
        Ok(self.buf.clone())
    }

    // The rightmost position that can still advance.
    fn find_resume(&self) -> Option<usize> {
        let k = self.domains.len();
        (0..k)
            .rev()
            .find(|&p| self.policy.has_next(&self.domains[p], p, k))
    }
}

impl<P: DerivePolicy + Default> SequenceEnumerator<char, P> {
    /// Enumerate over the characters of `s`.
    pub fn from_chars(s: &str, k: usize) -> Result<Self> {
        Self::new(s.chars(), k)
    }
}

impl<P: DerivePolicy> SequenceEnumerator<char, P> {
    /// Yield outputs as `String`s instead of `Vec<char>`s.
    pub fn strings(self) -> impl Iterator<Item = String> {
        self.map(|chars| chars.into_iter().collect())
    }
}

impl<T: Clone, P: DerivePolicy> Iterator for SequenceEnumerator<T, P> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.has_next() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T: Clone, P: DerivePolicy> FusedIterator for SequenceEnumerator<T, P> {}
