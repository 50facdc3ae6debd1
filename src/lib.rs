//! Conway's game of life on a toroidal grid, drawn in the terminal and
//! persisted as plain-text snapshots.

pub mod data;
pub mod driver;
pub mod errors;
pub mod rendering;
pub mod settings;
