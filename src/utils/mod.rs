mod reference;

pub use reference::{brute_force_combinations, brute_force_permutations};
