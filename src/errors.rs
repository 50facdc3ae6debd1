use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("CellSize must be greater than 0.")]
    ZeroCellSize,
    #[error("A {width}x{height} area with a cell size of {cell_size} holds no cells.")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("LiveDensity must be between 0 and 1, got {0}.")]
    LiveDensity(f64),
}

/// Problems reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Unable to read snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to write snapshot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Snapshot has {found} rows, the grid has {expected}.")]
    RowCount { expected: usize, found: usize },
    #[error("Snapshot row {row} has {found} columns, the grid has {expected}.")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}
