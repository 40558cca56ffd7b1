// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ordering generator for nested folding paths.

/// All `n!` orderings of `items`, generated by position (value-equal items are not merged).
///
/// The tail is permuted first; the head is then inserted at every index
/// `0..=len` of each tail ordering. For `[a, b, c]` this yields
/// `abc, bac, bca, acb, cab, cba`. The search reports the first match in this
/// order, so it must not change.
pub fn permutations_of<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let (head, tail) = match items.split_first() {
        Some(split) if items.len() > 1 => split,
        _ => return vec![items.to_vec()],
    };

    let smaller = permutations_of(tail);
    let mut out = Vec::with_capacity(smaller.len() * items.len());
    for perm in &smaller {
        for i in 0..=perm.len() {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.extend_from_slice(&perm[..i]);
            ordering.push(head.clone());
            ordering.extend_from_slice(&perm[i..]);
            out.push(ordering);
        }
    }
    out
}

/// `n!`, saturating. Used to size reports without generating the orderings.
pub fn permutation_count(n: usize) -> u64 {
    (1..=n as u64).fold(1u64, |acc, k| acc.saturating_mul(k))
}
