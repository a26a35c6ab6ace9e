/// ----- TICK DRIVER -----
/// This module is the clock of the simulation. It forwards incoming hall calls
/// to the dispatcher as soon as they arrive, and on every tick it assigns
/// pending requests, moves the cars one step and publishes a status snapshot.
/// After a tick in which requests were served the doors stay open for
/// `door_open_ticks` ticks, during which the whole bank waits.

use std::sync::Arc;

use crossbeam_channel::{never, select, tick, Receiver, Sender};
use log::{debug, info};

use shared_resources::call::Call;
use shared_resources::config::SimulationConfig;
use shared_resources::status_message::StatusMessage;

use super::dispatcher::Dispatcher;

/// Runs until `max_ticks` is reached (forever if unset) and returns the last snapshot.
pub fn main(
    dispatcher: Arc<Dispatcher>,
    simulation: SimulationConfig,
    hall_call_rx: Receiver<(u8, Call)>,
    status_tx: Sender<StatusMessage>,
) -> StatusMessage {
    let timer = tick(simulation.tick);
    let no_calls = never();
    let mut intake_open = true;
    let mut tick_count: u64 = 0;
    let mut doors_open: u32 = 0;

    loop {
        let intake = if intake_open { &hall_call_rx } else { &no_calls };
        select! {
            recv(intake) -> msg => {
                match msg {
                    Ok((floor, call)) => dispatcher.receive_request(floor, call),
                    Err(_) => {
                        debug!("All hall call sources are gone, only ticking from now on");
                        intake_open = false;
                    },
                }
            },
            recv(timer) -> _ => {
                tick_count += 1;
                if doors_open > 0 {
                    doors_open -= 1;
                } else {
                    dispatcher.assign();
                    let served = dispatcher.step();
                    if !served.is_empty() {
                        doors_open = simulation.door_open_ticks;
                    }
                }

                let status = dispatcher.status(tick_count);
                if simulation.max_ticks.map_or(false, |max_ticks| tick_count >= max_ticks) {
                    info!("Stopping after {} ticks", tick_count);
                    status_tx.send(status.clone()).ok();
                    return status
                }
                // nobody listening is fine, the status view is optional
                status_tx.send(status).ok();
            },
        }
    }
}
