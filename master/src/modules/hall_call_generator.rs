/// ----- HALL CALL GENERATOR -----
/// Presses random hall buttons at a fixed interval until `max_requests`
/// calls have been made. A seed makes the sequence reproducible.

use crossbeam_channel::{tick, Sender};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shared_resources::call::Call;
use shared_resources::config::GeneratorConfig;

/// A random floor and a direction that is valid from it: the ground floor can
/// only go up and the top floor can only go down.
pub fn random_hall_call<R: Rng>(rng: &mut R, num_floors: u8) -> (u8, Call) {
    let floor = rng.gen_range(1..=num_floors);
    let call = if floor == 1 {
        Call::HallUp
    } else if floor == num_floors {
        Call::HallDown
    } else if rng.gen_bool(0.5) {
        Call::HallUp
    } else {
        Call::HallDown
    };
    (floor, call)
}

pub fn main(
    generator: GeneratorConfig,
    num_floors: u8,
    hall_call_tx: Sender<(u8, Call)>,
) {
    let mut rng = match generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let timer = tick(generator.interval);

    for request_count in 0..generator.max_requests {
        if timer.recv().is_err() {
            return
        }
        let (floor, call) = random_hall_call(&mut rng, num_floors);
        info!(
            "\"{}\" request on floor {} auto-generated. This is request {}.",
            call.as_string(), floor, request_count
        );
        if hall_call_tx.send((floor, call)).is_err() {
            warn!("Dispatcher stopped listening, no more generated requests");
            return
        }
    }
    info!("Reached request limit of {}. Hall request generation complete.", generator.max_requests);
}
