use crate::errors::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod snapshot;

/// Grid geometry and seeding, as read from the JSON configuration file:
///
/// ```json
/// { "Height": 200, "Width": 500, "CellSize": 10, "LiveDensity": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub height: u32,
    pub width: u32,
    pub cell_size: u32,
    pub live_density: f64,
}

impl Default for Settings {
    // A 50 x 20 grid, which the bundled presets are drawn for
    fn default() -> Self {
        Settings {
            height: 200,
            width: 500,
            cell_size: 10,
            live_density: 0.5,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Settings::from_json(&raw)
    }

    /// Parses and validates settings from a JSON document.
    pub fn from_json(raw: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&self.live_density) {
            return Err(ConfigError::LiveDensity(self.live_density));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            debug!(
                "{}x{} is not a multiple of the cell size {}, using {}x{} cells",
                self.width,
                self.height,
                self.cell_size,
                self.columns(),
                self.rows()
            );
        }
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(
            r#"{ "Height": 200, "Width": 500, "CellSize": 10, "LiveDensity": 0.5 }"#,
        )
        .unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.columns(), 50);
        assert_eq!(settings.rows(), 20);
    }

    #[test]
    fn test_dimensions_floor() {
        let settings = Settings {
            height: 25,
            width: 39,
            cell_size: 10,
            live_density: 0.1,
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.columns(), 3);
        assert_eq!(settings.rows(), 2);
    }

    #[test]
    fn test_missing_field() {
        let err = Settings::from_json(r#"{ "Height": 200, "Width": 500, "CellSize": 10 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            Settings::from_json("Height = 200").unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "Height": -1, "Width": 500, "CellSize": 10, "LiveDensity": 0.5 }"#)
                .unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_invalid_values() {
        let zero = Settings {
            cell_size: 0,
            ..Settings::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroCellSize)));

        let empty = Settings {
            width: 5,
            ..Settings::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyGrid { .. })));

        let dense = Settings {
            live_density: 1.5,
            ..Settings::default()
        };
        assert!(matches!(dense.validate(), Err(ConfigError::LiveDensity(_))));

        let nan = Settings {
            live_density: f64::NAN,
            ..Settings::default()
        };
        assert!(matches!(nan.validate(), Err(ConfigError::LiveDensity(_))));
    }

    #[test]
    fn test_load_bundled_configuration() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("life.json");
        assert_eq!(Settings::load(path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/life.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
