//! Minimal-subsequence search.

/// Find the minimal subsequence of `seq` that satisfies `f`.
///
/// Assumptions, for x and y any subsequences of `seq` with ≺ the proper
/// subsequence order:
///
/// - x ≺ y and f(x) imply f(y);
/// - f(x) and f(y) imply x ≺ y, y ≺ x, or x = y;
/// - `seq` has no repeated elements.
///
/// Returns `None` if no satisfying subsequence exists.
pub fn minimize_seq<T, F>(f: F, seq: &[T]) -> Option<Vec<T>>
where
    T: Clone,
    F: Fn(&[T]) -> bool,
{
    // Check the most probable cases first.
    if f(&[]) {
        return Some(Vec::new());
    }
    if !f(seq) {
        return None;
    }

    let mut current: Vec<T> = seq.to_vec();

    // Try to remove elements one by one, and see if f still holds.
    let mut changed = true;
    while changed {
        changed = false;
        let mut i = 0;
        while i < current.len() {
            let mut candidate = current.clone();
            candidate.remove(i);
            if f(&candidate) {
                current = candidate;
                changed = true;
            } else {
                i += 1;
            }
        }
    }

    Some(current)
}
