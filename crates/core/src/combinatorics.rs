//! Combinations and permutations of small sequences.
//!
//! Both generators materialize every result; the permutation count grows as
//! `n!`, which is only practical for roughly `n <= 10`.

/// Returns every `k`-element subset of `items`, preserving relative order.
///
/// Results come in lexicographic index order: `[0, 1], [0, 2], ..., [1, 2], ...`.
/// `k == 0` yields a single empty subset; `k > items.len()` yields nothing.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    for (i, head) in items.iter().enumerate() {
        for mut tail in combinations(&items[i + 1..], k - 1) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

/// Returns every ordering of `items` (`n!` sequences).
///
/// Orderings are produced by recursive in-place swapping, so the first result
/// is the input order. Equal values are not deduplicated: `[1, 1]` yields two
/// (equal) orderings. An empty input yields one empty ordering.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut work = items.to_vec();
    let mut result = Vec::with_capacity(permutation_count(items.len()).unwrap_or(0));
    if work.is_empty() {
        result.push(work);
        return result;
    }
    permute(&mut work, 0, &mut result);
    result
}

fn permute<T: Clone>(work: &mut [T], start: usize, out: &mut Vec<Vec<T>>) {
    if start + 1 == work.len() {
        out.push(work.to_vec());
        return;
    }
    for i in start..work.len() {
        work.swap(start, i);
        permute(work, start + 1, out);
        work.swap(start, i);
    }
}

/// Builds every radius ordering to feed the bundle search.
pub fn build_permutations(radii: &[f64]) -> Vec<Vec<f64>> {
    permutations(radii)
}

/// `n!`, or `None` if it overflows `usize`.
pub fn permutation_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, i| acc.checked_mul(i))
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn combination_count(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1usize, |acc, i| {
        acc.checked_mul(n - i).map(|v| v / (i + 1))
    })
}
