// Design
//
// The input is a multiset of symbols, e.g. the chars of "yellow".
// We want every distinct k-combination or k-permutation exactly once,
// lazily, without keeping a set of what was already produced.
//
// The symbols are sorted and run-length encoded once: e:1 l:2 o:1 w:1 y:1.
// Output position i gets a "domain": the encoded symbols still available
// given positions 0..i, plus a cursor. Choosing a distinct entry (not an
// occurrence) at each position is what removes the duplicates.
//
// Position i+1's domain is derived from position i's at its cursor:
// - combinations keep the entries from the cursor on, so symbols never
//   decrease left to right;
// - permutations keep all entries.
// Either way the entry under the cursor loses one occurrence.
//
// Advancing works like an odometer: bump the rightmost position that can
// still move, re-derive everything to its right, and carry left when a
// position runs out. Only the suffix right of the bumped position is
// recomputed, so a step costs O(k).
//
// Combinations also prune: a position only advances if the entries after its
// cursor hold enough occurrences to fill the rest of the output.
//
// Fan out:
// - partitions(): one enumerator per first symbol, to hand to different
//   threads (see parallel);
// - SharedEnumerator: one enumerator behind a mutex.

mod domain;
pub mod error;
mod multiset;
mod options;
pub mod parallel;
mod sequence;
mod shared;

pub use domain::{CombinationPolicy, DerivePolicy, PermutationPolicy, PositionDomain};
pub use error::Error;
pub use multiset::{ResidualMultiset, RunLengthEntry};
pub use options::ParallelOptions;
pub use sequence::{Combinations, Permutations, SequenceEnumerator};
pub use shared::SharedEnumerator;

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{brute_force_combinations, brute_force_permutations};

    // Walks a large enumeration through every public entry point and checks
    // they all agree.
    #[test]
    fn test_entry_points_agree() {
        let source = "abracadabra";
        let chars: Vec<char> = source.chars().collect();
        let k = 5;

        let sequential: Vec<Vec<char>> = Permutations::from_chars(source, k).unwrap().collect();
        assert_eq!(
            sequential,
            brute_force_permutations(&chars, k).into_iter().collect::<Vec<_>>()
        );

        let opts = ParallelOptions::new().threads(2).clone();
        let parts = Permutations::partitions(source.chars(), k).unwrap();
        assert_eq!(parallel::collect(parts, &opts).unwrap(), sequential);

        let shared = SharedEnumerator::new(Permutations::from_chars(source, k).unwrap());
        assert_eq!((&shared).collect::<Vec<_>>(), sequential);
    }

    #[test]
    fn test_counts_differ_from_naive_formulas() {
        // 11 choose 4 = 330 and 11P4 = 7920 if the repeats were distinct.
        let chars: Vec<char> = "mississippi".chars().collect();
        let c = Combinations::from_chars("mississippi", 4).unwrap().count();
        let p = Permutations::from_chars("mississippi", 4).unwrap().count();
        assert_eq!(c, brute_force_combinations(&chars, 4).len());
        assert_eq!(p, brute_force_permutations(&chars, 4).len());
        assert!(c < 330);
        assert!(p < 7920);
    }

    #[test]
    fn test_errors_display() {
        assert_eq!(format!("{}", Error::Exhausted), "no more elements");
        let err = Combinations::from_chars("ab", 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: combination length must be less than the number of source symbols"
        );
    }
}
