mod scan;
mod search;

pub use scan::{find_occurrences, Occurrence};
pub use search::{find_motif, MotifResult};
