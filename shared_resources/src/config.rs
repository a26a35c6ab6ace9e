use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::{ConfigError, ConfigResult};

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ElevatorSection {
    pub num_floors: u8,
    pub num_cars: u8,
}

impl Default for ElevatorSection {
    fn default() -> Self {
        ElevatorSection { num_floors: 10, num_cars: 4 }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusOutput {
    Table,
    Json,
    None,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSection {
    pub tick_ms: u64,
    pub door_open_ticks: u32,
    pub max_ticks: Option<u64>,
    pub output: StatusOutput,
    pub stdin_input: bool,
}

impl Default for SimulationSection {
    fn default() -> Self {
        SimulationSection {
            tick_ms: 1000,
            door_open_ticks: 0,
            max_ticks: None,
            output: StatusOutput::Table,
            stdin_input: false,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSection {
    pub enabled: bool,
    pub max_requests: u32,
    pub interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        GeneratorSection {
            enabled: true,
            max_requests: 1000,
            interval_ms: 1000,
            seed: None,
        }
    }
}

/// Raw layout of `config.json`. Every section and field is optional.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub elevator: ElevatorSection,
    pub simulation: SimulationSection,
    pub generator: GeneratorSection,
}

impl ConfigFile {
    pub fn parse(contents: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads `path` if given. Otherwise tries `config.json`, then the shipped
    /// `_config.json`, then falls back to compiled defaults.
    pub fn read(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::parse(&read_file(path)?)
        }
        for candidate in [CONFIG_FILE, FALLBACK_CONFIG_FILE] {
            let candidate = Path::new(candidate);
            if candidate.exists() {
                info!("Reading configuration from {}", candidate.display());
                return Self::parse(&read_file(candidate)?)
            }
        }
        info!("No configuration file provided, using default settings...");
        Ok(ConfigFile::default())
    }
}

fn read_file(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: PathBuf::from(path),
        source: source,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorConfig {
    pub num_floors: u8,
    pub num_cars: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub tick: Duration,
    pub door_open_ticks: u32,
    pub max_ticks: Option<u64>,
    pub output: StatusOutput,
    pub stdin_input: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub max_requests: u32,
    pub interval: Duration,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasterConfig {
    pub elevator: ElevatorConfig,
    pub simulation: SimulationConfig,
    pub generator: GeneratorConfig,
}

impl MasterConfig {
    pub fn from_file(config_file: ConfigFile) -> ConfigResult<Self> {
        let ConfigFile { elevator, simulation, generator } = config_file;

        if elevator.num_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "numFloors must be at least 2, got {}", elevator.num_floors
            )))
        }
        if elevator.num_cars < 1 {
            return Err(ConfigError::Invalid(String::from("numCars must be at least 1")))
        }
        if simulation.tick_ms == 0 {
            return Err(ConfigError::Invalid(String::from("tickMs must be at least 1")))
        }
        if generator.interval_ms == 0 {
            return Err(ConfigError::Invalid(String::from("intervalMs must be at least 1")))
        }

        Ok(MasterConfig {
            elevator: ElevatorConfig {
                num_floors: elevator.num_floors,
                num_cars: elevator.num_cars,
            },
            simulation: SimulationConfig {
                tick: Duration::from_millis(simulation.tick_ms),
                door_open_ticks: simulation.door_open_ticks,
                max_ticks: simulation.max_ticks,
                output: simulation.output,
                stdin_input: simulation.stdin_input,
            },
            generator: GeneratorConfig {
                enabled: generator.enabled,
                max_requests: generator.max_requests,
                interval: Duration::from_millis(generator.interval_ms),
                seed: generator.seed,
            },
        })
    }
}
