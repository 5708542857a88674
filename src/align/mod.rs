mod distance;
mod pair;
pub mod trace;

pub use distance::levenshtein;
pub use pair::{AlignOp, AlignPath};
pub use trace::compact;
