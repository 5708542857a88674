use std::cmp::Ordering;

/// Index and reference of the minimum element under `cmp`; the first of
/// several equal minima wins.
pub fn argmin_by<T, F>(items: &[T], mut cmp: F) -> Option<(usize, &T)>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best = items.first()?;
    let mut best_idx = 0;
    for (idx, item) in items.iter().enumerate().skip(1) {
        if cmp(item, best) == Ordering::Less {
            best = item;
            best_idx = idx;
        }
    }
    Some((best_idx, best))
}
