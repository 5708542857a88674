pub mod io_utils;
pub mod math;
pub mod util;

pub use io_utils::{read_motif_task, read_population_tasks, write_lines, MotifTask};
pub use math::argmin_by;
pub use util::{handle_error_and_exit, Result};
