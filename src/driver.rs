use crate::data::Grid;
use crate::errors::Error;
use crate::rendering::Console;
use crate::settings::snapshot::{load_state, save_state};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// A named starting pattern stored as a snapshot file in the presets directory.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub number: u8,
    pub name: &'static str,
    pub file: &'static str,
}

impl Preset {
    pub fn path(&self, presets_dir: &Path) -> PathBuf {
        presets_dir.join(self.file)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        number: 1,
        name: "Blinkers",
        file: "1.txt",
    },
    Preset {
        number: 2,
        name: "Block",
        file: "2.txt",
    },
    Preset {
        number: 3,
        name: "Beehive",
        file: "3.txt",
    },
    Preset {
        number: 4,
        name: "Loaf",
        file: "4.txt",
    },
    Preset {
        number: 5,
        name: "Ship",
        file: "5.txt",
    },
];

/// Finds the preset picked by a line of menu input, if any.
pub fn choose(input: &str) -> Option<&'static Preset> {
    let number: u8 = input.trim().parse().ok()?;
    PRESETS.iter().find(|p| p.number == number)
}

fn menu_text() -> String {
    let choices: Vec<String> = PRESETS
        .iter()
        .map(|p| format!("{} - {}", p.number, p.name))
        .collect();
    format!("Choose a pattern: {}", choices.join(", "))
}

#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Pause after each generation.
    pub delay: Duration,
    /// Generations shown by the initial run.
    pub initial_generations: usize,
    /// Generations shown for each preset picked from the menu.
    pub preset_generations: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        DriverOptions {
            delay: Duration::from_millis(1000),
            initial_generations: 10,
            preset_generations: 5,
        }
    }
}

/// Owns the grid and steps it: show, save, advance, pause.
pub struct Driver<W: Write> {
    grid: Grid,
    console: Console<W>,
    options: DriverOptions,
}

impl<W: Write> Driver<W> {
    pub fn new(grid: Grid, console: Console<W>, options: DriverOptions) -> Self {
        Self {
            grid,
            console,
            options,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    /// The initial run. With `load` the grid is first replaced by the
    /// snapshot, otherwise its current (random) state is kept.
    pub fn start(&mut self, snapshot: &Path, load: bool) -> Result<(), Error> {
        if load {
            load_state(&mut self.grid, snapshot)?;
        }
        info!(
            "Running {} generations on {}",
            self.options.initial_generations,
            snapshot.display()
        );
        self.run(snapshot, self.options.initial_generations)
    }

    /// Shows, saves to `snapshot` and advances the grid, `generations` times.
    pub fn run(&mut self, snapshot: &Path, generations: usize) -> Result<(), Error> {
        for _ in 0..generations {
            self.console.show(&self.grid)?;
            save_state(&self.grid, snapshot)?;
            self.grid.advance();
            self.pause();
        }
        Ok(())
    }

    pub fn run_preset(&mut self, preset: &Preset, presets_dir: &Path) -> Result<(), Error> {
        let path = preset.path(presets_dir);
        info!("Running preset {} ({})", preset.number, preset.name);
        load_state(&mut self.grid, &path)?;
        self.run(&path, self.options.preset_generations)
    }

    /// Offers the presets until the input runs out. Lines that do not name a
    /// preset are ignored and another line is read.
    pub fn menu<R: BufRead>(&mut self, mut input: R, presets_dir: &Path) -> Result<(), Error> {
        loop {
            self.console.write_line(&menu_text())?;
            let preset = loop {
                let mut raw = Vec::new();
                if input.read_until(b'\n', &mut raw)? == 0 {
                    info!("End of input, leaving the menu");
                    return Ok(());
                }
                // Undecodable bytes can never name a preset
                let line = String::from_utf8_lossy(&raw);
                match choose(&line) {
                    Some(preset) => break preset,
                    None => debug!("Ignoring menu input {:?}", line.trim()),
                }
            };
            self.run_preset(preset, presets_dir)?;
        }
    }

    fn pause(&self) {
        if !self.options.delay.is_zero() {
            thread::sleep(self.options.delay);
        }
    }
}
