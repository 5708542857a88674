pub mod align;
pub mod cli;
pub mod commands;
pub mod motif;
pub mod population;
pub mod utils;
