use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;
use log::{error, info};

use shared_resources::call::Call;
use shared_resources::config::{MasterConfig, StatusOutput};
use shared_resources::status_message::StatusMessage;

pub mod dispatcher;
pub mod hall_call_generator;
pub mod input;
pub mod tick_driver;

use crate::error::MasterError;
use crate::utilities::debug;
use dispatcher::Dispatcher;

/// Starts the hall call sources and the status view on their own threads and
/// drives the clock on the calling thread. Only returns when `maxTicks` is set.
pub fn run(config: MasterConfig) -> Result<StatusMessage, MasterError> {
    let num_floors = config.elevator.num_floors;
    let dispatcher = Arc::new(Dispatcher::new(num_floors, config.elevator.num_cars)?);
    info!(
        "Elevator bank started with {} cars over {} floors",
        config.elevator.num_cars, dispatcher.num_floors()
    );

    let (hall_call_tx, hall_call_rx) = unbounded::<(u8, Call)>();
    let (status_tx, status_rx) = unbounded::<StatusMessage>();

    if config.generator.enabled {
        let generator = config.generator.clone();
        let hall_call_tx = hall_call_tx.clone();
        thread::Builder::new()
            .name("hall_call_generator".to_string())
            .spawn(move || hall_call_generator::main(generator, num_floors, hall_call_tx))?;
    }

    if config.simulation.stdin_input {
        let hall_call_tx = hall_call_tx.clone();
        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input::main(hall_call_tx))?;
    }

    let status_thread = match config.simulation.output {
        StatusOutput::Table => Some(thread::Builder::new()
            .name("debug".to_string())
            .spawn(move || {
                if let Err(e) = debug::main(status_rx) {
                    error!("Status view stopped: {}", e);
                }
            })?),
        StatusOutput::Json => Some(thread::Builder::new()
            .name("json_status".to_string())
            .spawn(move || debug::print_json(status_rx))?),
        StatusOutput::None => {
            drop(status_rx);
            None
        },
    };

    let final_status = tick_driver::main(dispatcher, config.simulation, hall_call_rx, status_tx);

    // the driver dropped its sender, so the view drains and exits
    if let Some(handle) = status_thread {
        if handle.join().is_err() {
            error!("Status view panicked");
        }
    }
    drop(hall_call_tx);
    Ok(final_status)
}
