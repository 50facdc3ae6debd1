pub mod cell;
pub mod grid;

pub use self::cell::{Cell, Status};
pub use self::grid::{Coord, Grid, GridIdx, ALIVE_CHAR, DEAD_CHAR};
