//! Slow, obviously-correct enumerations used as an oracle by tests and
//! benchmarks.
//!
//! Both walk every choice of source *indices* by backtracking and dedupe the
//! resulting symbol sequences, so repeated symbols are handled by brute force
//! rather than by anything clever.

use std::collections::BTreeSet;

/// Every distinct `k`-combination of `symbols`, each one sorted, in
/// lexicographic order.
///
/// ```rust
/// use mset::utils::brute_force_combinations;
/// let found = brute_force_combinations(&['a', 'a', 'b'], 2);
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![vec!['a', 'a'], vec!['a', 'b']]);
/// ```
pub fn brute_force_combinations<T: Ord + Clone>(symbols: &[T], k: usize) -> BTreeSet<Vec<T>> {
    let mut found = BTreeSet::new();
    let mut chosen = Vec::with_capacity(k);
    choose(symbols, k, 0, &mut chosen, &mut found);
    found
}

fn choose<T: Ord + Clone>(
    symbols: &[T],
    k: usize,
    from: usize,
    chosen: &mut Vec<usize>,
    found: &mut BTreeSet<Vec<T>>,
) {
    if chosen.len() == k {
        let mut combination: Vec<T> = chosen.iter().map(|&i| symbols[i].clone()).collect();
        combination.sort();
        found.insert(combination);
        return;
    }
    for i in from..symbols.len() {
        chosen.push(i);
        choose(symbols, k, i + 1, chosen, found);
        chosen.pop();
    }
}

/// Every distinct `k`-permutation of `symbols`, in lexicographic order.
///
/// ```rust
/// use mset::utils::brute_force_permutations;
/// let found = brute_force_permutations(&['a', 'a', 'b'], 2);
/// assert_eq!(found.len(), 3);
/// ```
pub fn brute_force_permutations<T: Ord + Clone>(symbols: &[T], k: usize) -> BTreeSet<Vec<T>> {
    let mut found = BTreeSet::new();
    let mut used = vec![false; symbols.len()];
    let mut arranged = Vec::with_capacity(k);
    arrange(symbols, k, &mut used, &mut arranged, &mut found);
    found
}

fn arrange<T: Ord + Clone>(
    symbols: &[T],
    k: usize,
    used: &mut [bool],
    arranged: &mut Vec<T>,
    found: &mut BTreeSet<Vec<T>>,
) {
    if arranged.len() == k {
        found.insert(arranged.clone());
        return;
    }
    for i in 0..symbols.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        arranged.push(symbols[i].clone());
        arrange(symbols, k, used, arranged, found);
        arranged.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(found: BTreeSet<Vec<char>>) -> Vec<String> {
        found.into_iter().map(|v| v.into_iter().collect()).collect()
    }

    #[test]
    fn test_combinations_dedupe() {
        let symbols: Vec<char> = "aab".chars().collect();
        assert_eq!(strings(brute_force_combinations(&symbols, 2)), vec!["aa", "ab"]);
    }

    #[test]
    fn test_permutations_dedupe() {
        let symbols: Vec<char> = "aab".chars().collect();
        assert_eq!(
            strings(brute_force_permutations(&symbols, 2)),
            vec!["aa", "ab", "ba"]
        );
    }

    #[test]
    fn test_distinct_symbols_match_binomial() {
        let symbols: Vec<u8> = (0..6).collect();
        assert_eq!(brute_force_combinations(&symbols, 3).len(), 20);
        assert_eq!(brute_force_permutations(&symbols, 3).len(), 120);
    }
}
