use super::pair::{AlignOp, AlignPath};
use crate::utils::argmin_by;

/// Dense DP grid of `(|s|+1) x (|t|+1)` cells; each cell holds the best
/// path from the origin. Owned by a single `levenshtein` call.
struct PathGrid {
    cols: usize,
    cells: Vec<AlignPath>,
}

impl PathGrid {
    fn new(rows: usize, cols: usize) -> PathGrid {
        PathGrid {
            cols,
            cells: vec![AlignPath::default(); rows * cols],
        }
    }

    fn at(&self, i: usize, j: usize) -> &AlignPath {
        &self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, path: AlignPath) {
        self.cells[i * self.cols + j] = path;
    }
}

/// Levenshtein distance between `s` and `t`, together with the op trace of
/// one optimal alignment from the perspective of `s`.
///
/// Cells are resolved row-major; per cell the predecessors are evaluated in
/// the fixed order {left +Ins, top +Del, diagonal +Match/Subst} and the
/// first strictly-smallest candidate wins. Callers that depend on exact
/// traces depend on this order.
///
/// With a mismatch budget the whole computation aborts and returns `None`
/// the first time any resolved cell's path carries more than `max_mismatch`
/// non-match steps. The abort is global, so an interior cell off the optimal
/// path can reject a pair whose final distance is within budget.
pub fn levenshtein(s: &str, t: &str, max_mismatch: Option<usize>) -> Option<AlignPath> {
    let s = s.as_bytes();
    let t = t.as_bytes();
    let mut grid = PathGrid::new(s.len() + 1, t.len() + 1);

    for i in 1..=s.len() {
        grid.set(i, 0, AlignPath::new(i, vec![AlignOp::Ins; i]));
    }
    for j in 1..=t.len() {
        grid.set(0, j, AlignPath::new(j, vec![AlignOp::Del; j]));
    }

    for i in 1..=s.len() {
        for j in 1..=t.len() {
            let (diag_cost, diag_op) = if s[i - 1] == t[j - 1] {
                (0, AlignOp::Match)
            } else {
                (1, AlignOp::Subst)
            };
            let mut candidates = vec![
                grid.at(i - 1, j).extended(1, AlignOp::Ins),
                grid.at(i, j - 1).extended(1, AlignOp::Del),
                grid.at(i - 1, j - 1).extended(diag_cost, diag_op),
            ];
            let (idx, _) = argmin_by(&candidates, |a, b| a.distance.cmp(&b.distance))
                .expect("cell has three candidates");
            let choice = candidates.swap_remove(idx);

            if let Some(budget) = max_mismatch {
                let mismatches = choice.total_mismatch();
                if mismatches > budget {
                    log::debug!(
                        "Aborting at cell ({}, {}): {} mismatches exceed budget {}",
                        i,
                        j,
                        mismatches,
                        budget
                    );
                    return None;
                }
            }
            grid.set(i, j, choice);
        }
    }

    Some(grid.at(s.len(), t.len()).clone())
}
