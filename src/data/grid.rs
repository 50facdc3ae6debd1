use super::cell::{Cell, Status};
use crate::settings::Settings;
use log::debug;
use rand::Rng;
use std::fmt::{self, Write};

/// Character used for a live cell, both on screen and in snapshots.
pub const ALIVE_CHAR: char = '*';
/// Character used for a dead cell.
pub const DEAD_CHAR: char = ' ';

#[derive(Debug, Clone)]
pub struct Grid {
    /* Addressed by from-zero (col, row) notation and stored row-major, so that
     * a 3 x 2 grid looks like this (coordinates, then flat indices):
     *
     * [ (0,0) (1,0) (2,0) ]    [ 0 1 2 ]
     * [ (0,1) (1,1) (2,1) ]    [ 3 4 5 ]
     */
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
    cell_size: u32,
    generation: u64,
    neighbours: Vec<[GridIdx; 8]>, // Cache of where the neighbours are for each cell
}

#[derive(PartialEq, Eq, Debug, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

/// Position of a cell in the flat, row-major cell vector.
#[derive(PartialEq, Eq, Debug, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct GridIdx(pub usize);

impl Grid {
    /// Builds a grid sized by the settings and seeds it with the configured
    /// live density.
    pub fn new(settings: &Settings) -> Grid {
        let mut grid =
            Grid::with_dimensions(settings.columns(), settings.rows(), settings.cell_size);
        grid.randomize(settings.live_density);
        grid
    }

    /// Builds an all-dead grid. Both dimensions are at least 1.
    pub fn with_dimensions(columns: usize, rows: usize, cell_size: u32) -> Grid {
        let columns = columns.max(1);
        let rows = rows.max(1);
        debug!("Building a {}x{} grid", columns, rows);
        Grid {
            cells: vec![Cell::default(); columns * rows],
            columns,
            rows,
            cell_size,
            generation: 0,
            neighbours: neighbours(columns, rows),
        }
    }

    pub fn randomize(&mut self, live_density: f64) {
        let mut rng = rand::thread_rng();
        self.randomize_with(&mut rng, live_density);
    }

    /// Every cell independently becomes alive with probability `live_density`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, live_density: f64) {
        for cell in self.cells.iter_mut() {
            cell.set_alive(rng.gen::<f64>() < live_density);
        }
    }

    // Returns this grid's cells, one slice per row
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width in display units (columns times cell size).
    pub fn width(&self) -> usize {
        self.columns * self.cell_size as usize
    }

    /// Height in display units (rows times cell size).
    pub fn height(&self) -> usize {
        self.rows * self.cell_size as usize
    }

    pub fn area(&self) -> usize {
        self.columns * self.rows
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restarts the generation count, e.g. after loading a snapshot.
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.idx(coord).and_then(|idx| self.get_idx(&idx))
    }

    pub fn get_idx(&self, idx: &GridIdx) -> Option<&Cell> {
        self.cells.get(idx.0)
    }

    /// Sets the status of the cell at `coord`. Out of range coordinates are
    /// ignored.
    pub fn set_alive(&mut self, coord: Coord, alive: bool) {
        if let Some(GridIdx(idx)) = self.idx(coord) {
            self.cells[idx].set_alive(alive);
        }
    }

    /// The Moore neighbourhood of `coord`, wrapped around the edges. `None`
    /// when `coord` is outside the grid.
    pub fn neighbours(&self, coord: Coord) -> Option<[Coord; 8]> {
        self.idx(coord)
            .map(|_| neighbour_coords(self.columns - 1, self.rows - 1, &coord))
    }

    pub fn live_neighbours(&self, coord: Coord) -> usize {
        self.idx(coord)
            .map_or(0, |idx| self.live_neighbours_idx(idx))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive()).count()
    }

    /// Moves the whole grid forward one generation. Every cell works out its
    /// next status from the current generation before any cell changes.
    pub fn advance(&mut self) {
        for i in 0..self.cells.len() {
            let alives = self.live_neighbours_idx(GridIdx(i));
            self.cells[i].determine_next_state(alives);
        }
        for cell in self.cells.iter_mut() {
            cell.advance();
        }
        self.generation += 1;
    }

    fn live_neighbours_idx(&self, idx: GridIdx) -> usize {
        self.neighbours[idx.0]
            .iter()
            .fold(0, |acc, &GridIdx(n)| {
                if self.cells[n].status() == Status::Alive {
                    acc + 1
                } else {
                    acc
                }
            })
    }

    fn idx(&self, coord: Coord) -> Option<GridIdx> {
        if coord.col < self.columns && coord.row < self.rows {
            Some(GridIdx(coord.row * self.columns + coord.col))
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells() {
            for cell in row {
                f.write_char(if cell.alive() { ALIVE_CHAR } else { DEAD_CHAR })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

fn neighbours(columns: usize, rows: usize) -> Vec<[GridIdx; 8]> {
    let (max_col, max_row) = (columns - 1, rows - 1);
    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| Coord { col, row }))
        .map(|coord| {
            neighbour_coords(max_col, max_row, &coord)
                .map(|Coord { col, row }| GridIdx(row * columns + col))
        })
        .collect()
}

// Given a col and row, returns the (maybe wrapped) coordinates of the neighbours of that
// coordinate. With a single column or row, a cell neighbours itself.
fn neighbour_coords(max_col: usize, max_row: usize, coord: &Coord) -> [Coord; 8] {
    let Coord { col, row } = *coord;

    let row_up = match row {
        0 => max_row,
        _ => row - 1,
    };

    let row_down = match row {
        _ if row == max_row => 0,
        _ => row + 1,
    };

    let col_left = match col {
        0 => max_col,
        _ => col - 1,
    };
    let col_right = match col {
        _ if col == max_col => 0,
        _ => col + 1,
    };

    let north_west = Coord {
        col: col_left,
        row: row_up,
    };
    let north = Coord { col, row: row_up };
    let north_east = Coord {
        col: col_right,
        row: row_up,
    };
    let west = Coord { col: col_left, row };
    let east = Coord {
        col: col_right,
        row,
    };
    let south_west = Coord {
        col: col_left,
        row: row_down,
    };
    let south = Coord { col, row: row_down };
    let south_east = Coord {
        col: col_right,
        row: row_down,
    };
    [north_west, north, north_east, west, east, south_west, south, south_east]
}
