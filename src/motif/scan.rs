use crate::align::{levenshtein, AlignPath};
use crate::utils::argmin_by;

/// One accepted approximate match of a query within the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// 1-based offset of the match in the target
    pub start: usize,
    pub align: AlignPath,
}

/// Collects the non-overlapping approximate occurrences of `query` in
/// `target`, scanning left to right.
///
/// At each cursor position the windows ending at
/// `i + |query| - max_mismatch ..= i + |query| + max_mismatch` are scored
/// (end offsets clipped to the target, offsets before the cursor dropped)
/// and the smallest distance wins, earliest end offset first. An accepted
/// match moves the cursor to the chosen end offset, so the next match
/// cannot overlap it; otherwise the cursor moves by one.
pub fn find_occurrences(query: &str, target: &str, max_mismatch: usize) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    if query.is_empty() || query.len() > target.len() {
        return occurrences;
    }

    let mut i = 0;
    while i <= target.len() - query.len() {
        let first_end = (i + query.len()).saturating_sub(max_mismatch).max(i);
        let last_end = i + query.len() + max_mismatch;
        let mut candidates: Vec<(usize, AlignPath)> = Vec::new();
        for end in first_end..=last_end {
            let end = end.min(target.len());
            if let Some(path) = levenshtein(query, &target[i..end], None) {
                candidates.push((end, path));
            }
        }

        let selected =
            argmin_by(&candidates, |a, b| a.1.distance.cmp(&b.1.distance)).map(|(idx, _)| idx);
        match selected {
            Some(idx) if candidates[idx].1.distance <= max_mismatch => {
                let (end, path) = candidates.swap_remove(idx);
                log::debug!(
                    "match at {}..{} with distance {}",
                    i,
                    end,
                    path.distance
                );
                occurrences.push(Occurrence {
                    start: i + 1,
                    align: path,
                });
                // Jump past the match; the cursor must still move even for
                // a zero-width winning window.
                i = end.max(i + 1);
            }
            _ => i += 1,
        }
    }
    occurrences
}
