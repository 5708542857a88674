pub mod motif;
pub mod population;
