use super::pair::AlignOp;
use itertools::Itertools;

/// Run-length encodes an op trace into a CIGAR-like string, e.g.
/// `[M, X, X]` becomes `"1M2X"`. Empty traces encode to an empty string.
pub fn compact(ops: &[AlignOp]) -> String {
    ops.iter()
        .dedup_with_count()
        .map(|(count, op)| format!("{}{}", count, op))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(trace: &str) -> Vec<AlignOp> {
        trace
            .chars()
            .map(|c| match c {
                'M' => AlignOp::Match,
                'X' => AlignOp::Subst,
                'I' => AlignOp::Ins,
                'D' => AlignOp::Del,
                _ => panic!("unknown op {}", c),
            })
            .collect()
    }

    #[test]
    fn test_compact_mixed_trace() {
        assert_eq!(compact(&ops("MXXIDXMMMD")), "1M2X1I1D1X3M1D");
    }

    #[test]
    fn test_compact_empty() {
        assert_eq!(compact(&[]), "");
    }

    #[test]
    fn test_compact_single_op() {
        assert_eq!(compact(&ops("M")), "1M");
    }

    #[test]
    fn test_compact_single_run() {
        assert_eq!(compact(&ops("MMMM")), "4M");
    }

    #[test]
    fn test_compact_final_singleton_run() {
        // The trailing run of length one must not be folded into the
        // preceding run.
        assert_eq!(compact(&ops("MMX")), "2M1X");
        assert_eq!(compact(&ops("IIM")), "2I1M");
    }
}
