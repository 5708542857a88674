use std::fmt;

/// A single alignment step, defined from the perspective of the query
/// sequence: `Ins` means the target carries an extra base relative to the
/// query at this point, `Del` the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    Match,
    Subst,
    Ins,
    Del,
}

impl AlignOp {
    pub fn symbol(&self) -> char {
        match self {
            AlignOp::Match => 'M',
            AlignOp::Subst => 'X',
            AlignOp::Ins => 'I',
            AlignOp::Del => 'D',
        }
    }
}

impl fmt::Display for AlignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Edit distance together with the op trace of one optimal alignment path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignPath {
    pub distance: usize,
    pub ops: Vec<AlignOp>,
}

impl AlignPath {
    pub fn new(distance: usize, ops: Vec<AlignOp>) -> AlignPath {
        AlignPath { distance, ops }
    }

    /// Copy of this path with one more step appended.
    pub fn extended(&self, cost: usize, op: AlignOp) -> AlignPath {
        let mut ops = Vec::with_capacity(self.ops.len() + 1);
        ops.extend_from_slice(&self.ops);
        ops.push(op);
        AlignPath {
            distance: self.distance + cost,
            ops,
        }
    }

    /// Number of non-match steps on the path. Equal to `distance` for unit
    /// edit costs, but counted from the trace like the distance is.
    pub fn total_mismatch(&self) -> usize {
        self.ops.iter().filter(|&&op| op != AlignOp::Match).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_symbols() {
        assert_eq!(AlignOp::Match.symbol(), 'M');
        assert_eq!(AlignOp::Subst.symbol(), 'X');
        assert_eq!(AlignOp::Ins.symbol(), 'I');
        assert_eq!(AlignOp::Del.symbol(), 'D');
    }

    #[test]
    fn test_total_mismatch_counts_non_matches() {
        let path = AlignPath::new(
            3,
            vec![
                AlignOp::Match,
                AlignOp::Subst,
                AlignOp::Ins,
                AlignOp::Match,
                AlignOp::Del,
            ],
        );
        assert_eq!(path.total_mismatch(), 3);
        assert_eq!(path.total_mismatch(), path.distance);
    }

    #[test]
    fn test_extended_appends_and_costs() {
        let path = AlignPath::new(1, vec![AlignOp::Subst]);
        let longer = path.extended(0, AlignOp::Match);
        assert_eq!(longer.distance, 1);
        assert_eq!(longer.ops, vec![AlignOp::Subst, AlignOp::Match]);
        let longest = longer.extended(1, AlignOp::Del);
        assert_eq!(longest.distance, 2);
        assert_eq!(longest.ops.len(), 3);
    }
}
