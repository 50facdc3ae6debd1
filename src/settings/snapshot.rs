//! Plain-text snapshots: one line per grid row, one character per column,
//! `*` for a live cell and a space for a dead one.

use crate::data::{Coord, Grid, ALIVE_CHAR};
use crate::errors::SnapshotError;
use log::debug;
use std::fs;
use std::path::Path;

/// Replaces the grid's state with the snapshot stored at `path`.
pub fn load_state<P: AsRef<Path>>(grid: &mut Grid, path: P) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    apply_state(grid, &text)?;
    debug!("Loaded snapshot {}", path.display());
    Ok(())
}

/// Replaces the grid's state with a snapshot held in memory.
///
/// The snapshot must have exactly as many lines as the grid has rows, and
/// every line exactly as many characters as the grid has columns. Any
/// character other than `*` is a dead cell. On error the grid is unchanged.
pub fn apply_state(grid: &mut Grid, text: &str) -> Result<(), SnapshotError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != grid.rows() {
        return Err(SnapshotError::RowCount {
            expected: grid.rows(),
            found: lines.len(),
        });
    }
    if let Some((row, line)) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.chars().count() != grid.columns())
    {
        return Err(SnapshotError::RowLength {
            row,
            expected: grid.columns(),
            found: line.chars().count(),
        });
    }

    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            grid.set_alive(Coord { col, row }, c == ALIVE_CHAR);
        }
    }
    grid.reset_generation();
    Ok(())
}

/// Writes the grid to `path`, replacing whatever was there.
pub fn save_state<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    fs::write(path, grid.to_string()).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::env;
    use std::path::PathBuf;
    use std::process;

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("life-snapshot-{}-{}", process::id(), name))
    }

    #[test]
    fn test_apply_state() {
        let mut grid = Grid::with_dimensions(4, 3, 1);
        apply_state(&mut grid, " *  \n** x\n   *\n").unwrap();
        assert_eq!(grid.to_string(), " *  \n**  \n   *\n");
        assert_eq!(grid.alive_count(), 4);
    }

    #[test]
    fn test_apply_state_restarts_generations() {
        let mut grid = Grid::with_dimensions(2, 1, 1);
        grid.advance();
        apply_state(&mut grid, "**\n").unwrap();
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_apply_state_overwrites_everything() {
        let mut grid = Grid::with_dimensions(3, 2, 1);
        grid.randomize(1.0);
        apply_state(&mut grid, "   \n * ").unwrap();
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn test_apply_state_accepts_crlf() {
        let mut grid = Grid::with_dimensions(2, 2, 1);
        apply_state(&mut grid, "* \r\n *\r\n").unwrap();
        assert_eq!(grid.to_string(), "* \n *\n");
    }

    #[test]
    fn test_row_count_mismatch() {
        let mut grid = Grid::with_dimensions(2, 3, 1);
        let err = apply_state(&mut grid, "**\n**\n").unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::RowCount {
                expected: 3,
                found: 2
            }
        ));
        let err = apply_state(&mut grid, "**\n**\n**\n**\n").unwrap_err();
        assert!(matches!(err, SnapshotError::RowCount { found: 4, .. }));
    }

    #[test]
    fn test_row_length_mismatch_leaves_grid_untouched() {
        let mut grid = Grid::with_dimensions(3, 2, 1);
        let err = apply_state(&mut grid, "***\n****\n").unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::RowLength {
                row: 1,
                expected: 3,
                found: 4
            }
        ));
        assert_eq!(grid.alive_count(), 0);

        let err = apply_state(&mut grid, "**\n***\n").unwrap_err();
        assert!(matches!(err, SnapshotError::RowLength { row: 0, .. }));
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_round_trip() {
        let path = scratch_file("round-trip.txt");
        let mut grid = Grid::with_dimensions(50, 20, 10);
        grid.randomize_with(&mut StdRng::seed_from_u64(3), 0.5);
        save_state(&grid, &path).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(saved, grid.to_string());
        assert_eq!(saved.lines().count(), 20);

        let mut loaded = Grid::with_dimensions(50, 20, 10);
        load_state(&mut loaded, &path).unwrap();
        assert_eq!(loaded.to_string(), grid.to_string());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_overwrites() {
        let path = scratch_file("overwrite.txt");
        fs::write(&path, "a much longer file than the grid will produce\n".repeat(10)).unwrap();
        let grid = Grid::with_dimensions(2, 1, 1);
        save_state(&grid, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "  \n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let mut grid = Grid::with_dimensions(2, 2, 1);
        let err = load_state(&mut grid, scratch_file("missing.txt")).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }
}
