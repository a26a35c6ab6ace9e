use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};

use shared_resources::config::{ConfigFile, MasterConfig, StatusOutput};

use master::error::MasterError;
use master::modules;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Table,
    Json,
    None,
}

impl OutputArg {
    fn to_status_output(self) -> StatusOutput {
        match self {
            OutputArg::Table => StatusOutput::Table,
            OutputArg::Json => StatusOutput::Json,
            OutputArg::None => StatusOutput::None,
        }
    }
}

/// Elevator bank dispatch simulator. Flags override the config file.
#[derive(Debug, Parser)]
#[command(name = "master", version)]
struct Args {
    /// Path to a JSON config file (default: config.json, then _config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of floors
    #[arg(long)]
    floors: Option<u8>,

    /// Number of cars
    #[arg(long)]
    cars: Option<u8>,

    /// Milliseconds per simulation tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Ticks the doors stay open after serving a floor
    #[arg(long)]
    door_open_ticks: Option<u32>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// How to print the per-tick status
    #[arg(long, value_enum)]
    output: Option<OutputArg>,

    /// Number of random hall calls to generate
    #[arg(long)]
    requests: Option<u32>,

    /// Seed for the hall call generator
    #[arg(long)]
    seed: Option<u64>,

    /// Do not generate random hall calls
    #[arg(long)]
    no_generator: bool,

    /// Read hall calls from stdin as "<floor> <up|down>"
    #[arg(long)]
    stdin: bool,
}

impl Args {
    fn apply(&self, config_file: &mut ConfigFile) {
        if let Some(floors) = self.floors {
            config_file.elevator.num_floors = floors;
        }
        if let Some(cars) = self.cars {
            config_file.elevator.num_cars = cars;
        }
        if let Some(tick_ms) = self.tick_ms {
            config_file.simulation.tick_ms = tick_ms;
        }
        if let Some(door_open_ticks) = self.door_open_ticks {
            config_file.simulation.door_open_ticks = door_open_ticks;
        }
        if let Some(max_ticks) = self.max_ticks {
            config_file.simulation.max_ticks = Some(max_ticks);
        }
        if let Some(output) = self.output {
            config_file.simulation.output = output.to_status_output();
        }
        if self.stdin {
            config_file.simulation.stdin_input = true;
        }
        if let Some(requests) = self.requests {
            config_file.generator.max_requests = requests;
        }
        if let Some(seed) = self.seed {
            config_file.generator.seed = Some(seed);
        }
        if self.no_generator {
            config_file.generator.enabled = false;
        }
    }
}

fn start(args: Args) -> Result<(), MasterError> {
    let mut config_file = ConfigFile::read(args.config.as_deref())?;
    args.apply(&mut config_file);
    let config = MasterConfig::from_file(config_file)?;

    // the table redraws in place, so keep the log quiet unless asked otherwise
    if config.simulation.output == StatusOutput::Table && std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Warn);
    }

    let final_status = modules::run(config)?;
    info!(
        "Finished at tick {} with {} requests still pending",
        final_status.tick, final_status.num_pending()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match start(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
