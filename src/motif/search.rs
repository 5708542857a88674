use super::scan::{find_occurrences, Occurrence};

/// A motif together with the occurrences that qualified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifResult {
    pub motif: String,
    pub occurrences: Vec<Occurrence>,
}

/// First-fit search for a `window_len`-base substring of `target` that
/// occurs at least `required_occurrences` times with at most `max_mismatch`
/// errors per occurrence. Windows are tried in order of their start
/// position and the first qualifying one is returned; the search makes no
/// attempt to rank qualifying windows against each other.
pub fn find_motif(
    required_occurrences: usize,
    window_len: usize,
    max_mismatch: usize,
    target: &str,
) -> Option<MotifResult> {
    if window_len == 0 || window_len > target.len() {
        return None;
    }

    for start in 0..=target.len() - window_len {
        let candidate = &target[start..start + window_len];
        let occurrences = find_occurrences(candidate, target, max_mismatch);
        log::debug!(
            "window {} at {}: {} occurrence(s)",
            candidate,
            start,
            occurrences.len()
        );
        if occurrences.len() >= required_occurrences {
            return Some(MotifResult {
                motif: candidate.to_string(),
                occurrences,
            });
        }
    }
    None
}
