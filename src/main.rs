extern crate clap;
extern crate life;

use clap::{App, Arg, ArgMatches};
use life::data::Grid;
use life::driver::{Driver, DriverOptions};
use life::rendering::Console;
use life::settings::Settings;
use log::info;
use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exit(match inner_main() {
        Ok(_) => 0,
        Err(err) => {
            println!("{}", err);
            1
        }
    })
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Game of Life")
        .version(version().as_ref())
        .about("Conway's Game of Life on a torus, in your terminal!")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .default_value("life.json")
                .help("JSON file with Height, Width, CellSize and LiveDensity"),
        )
        .arg(
            Arg::with_name("state")
                .short("s")
                .long("state")
                .default_value("data.txt")
                .help("Snapshot loaded for the initial run and saved every generation"),
        )
        .arg(
            Arg::with_name("presets")
                .short("p")
                .long("presets")
                .default_value("presets")
                .help("Directory holding the preset snapshots 1.txt to 5.txt"),
        )
        .arg(
            Arg::with_name("delay")
                .short("d")
                .long("delay")
                .default_value("1000")
                .help("Milliseconds to wait between generations"),
        )
        .arg(
            Arg::with_name("generations")
                .short("g")
                .long("generations")
                .default_value("10")
                .help("Number of generations in the initial run"),
        )
        .arg(
            Arg::with_name("preset-generations")
                .long("preset-generations")
                .default_value("5")
                .help("Number of generations shown for each preset"),
        )
        .arg(
            Arg::with_name("random")
                .long("random")
                .help("Start from a random grid instead of loading the state file"),
        )
        .arg(
            Arg::with_name("no-clear")
                .long("no-clear")
                .help("Do not clear the terminal between generations"),
        )
        .get_matches();

    let delay = get_number::<u64>("delay", None, &matches)?;
    let initial_generations = get_number("generations", None, &matches)?;
    let preset_generations = get_number("preset-generations", Some(0), &matches)?;
    let config = matches.value_of("config").unwrap_or("life.json");
    let state = matches.value_of("state").unwrap_or("data.txt");
    let presets = matches.value_of("presets").unwrap_or("presets");

    let settings = Settings::load(config)?;
    let grid = Grid::new(&settings);
    info!(
        "{} x {} grid ({} x {} at cell size {}), live density {}",
        grid.columns(),
        grid.rows(),
        grid.width(),
        grid.height(),
        grid.cell_size(),
        settings.live_density
    );
    let console = Console::new(io::stdout(), !matches.is_present("no-clear"));
    let options = DriverOptions {
        delay: Duration::from_millis(delay),
        initial_generations,
        preset_generations,
    };

    let mut driver = Driver::new(grid, console, options);
    driver.start(Path::new(state), !matches.is_present("random"))?;
    driver.menu(io::stdin().lock(), Path::new(presets))?;
    Ok(())
}

fn version() -> String {
    let (maj, min, pat) = (
        option_env!("CARGO_PKG_VERSION_MAJOR"),
        option_env!("CARGO_PKG_VERSION_MINOR"),
        option_env!("CARGO_PKG_VERSION_PATCH"),
    );
    match (maj, min, pat) {
        (Some(maj), Some(min), Some(pat)) => format!("{}.{}.{}", maj, min, pat),
        _ => "".to_owned(),
    }
}

fn get_number<A>(name: &str, maybe_min: Option<A>, matches: &ArgMatches<'_>) -> Result<A, String>
where
    A: FromStr + PartialOrd + Display + Copy,
{
    matches
        .value_of(name)
        .and_then(|s| s.parse::<A>().ok())
        .and_then(|u| match maybe_min {
            Some(min) => {
                if u > min {
                    Some(u)
                } else {
                    None
                }
            }
            _ => Some(u),
        })
        .ok_or_else(|| {
            if let Some(min) = maybe_min {
                format!("{} should be a number greater than {}.", name, min)
            } else {
                format!("{} should be a positive number.", name)
            }
        })
}
