/// ----- HALL REQUEST ASSIGNER -----
/// This stateless module distributes pending hall requests among the cars.
/// It works in three passes, each handing a whole batch of same-direction
/// requests to a single car:
///   1. pending up requests go to the nearest car already moving up,
///   2. whatever is still pending up goes to the nearest idle car at or below
///      the lowest requested floor,
///   3. pending down requests go to the nearest idle or down-moving car at or
///      above the highest requested floor.
/// Down-moving cars have no pass of their own; they compete with idle cars in
/// pass 3. Requests no car qualifies for stay pending until the next call.
/// The floor bounds are inclusive: a car standing on the lowest up call (or
/// the highest down call) qualifies, which is what lets the bottom and top
/// floors be served at all.

use log::{debug, info};

use shared_resources::call::Call;
use shared_resources::car::Car;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

use super::route;

pub fn assign_hall_requests(cars: &mut [Car], requests: &mut [Request]) {
    batch_up_on_the_way(cars, requests);
    batch_up_from_below(cars, requests);
    batch_down_from_above(cars, requests);
}

fn batch_up_on_the_way(cars: &mut [Car], requests: &mut [Request]) {
    let batch = pending_batch(requests, Call::HallUp);
    let lowest = match batch.first() {
        Some(&index) => requests[index].floor,
        None => return,
    };
    let chosen = nearest_car(cars, lowest, |car| {
        car.direction == Direction::Up && car.floor <= lowest
    });
    if let Some(car_index) = chosen {
        assign_batch(&mut cars[car_index], requests, &batch, Call::HallUp);
    }
}

fn batch_up_from_below(cars: &mut [Car], requests: &mut [Request]) {
    let batch = pending_batch(requests, Call::HallUp);
    let lowest = match batch.first() {
        Some(&index) => requests[index].floor,
        None => return,
    };
    let chosen = nearest_car(cars, lowest, |car| {
        car.direction != Direction::Down && car.floor <= lowest
    });
    if let Some(car_index) = chosen {
        assign_batch(&mut cars[car_index], requests, &batch, Call::HallUp);
    }
}

fn batch_down_from_above(cars: &mut [Car], requests: &mut [Request]) {
    let batch = pending_batch(requests, Call::HallDown);
    let highest = match batch.first() {
        Some(&index) => requests[index].floor,
        None => return,
    };
    let chosen = nearest_car(cars, highest, |car| {
        car.direction != Direction::Up && car.floor >= highest
    });
    if let Some(car_index) = chosen {
        assign_batch(&mut cars[car_index], requests, &batch, Call::HallDown);
    }
}

/// Indices of pending requests for `call`, in the order the car will meet
/// them: ascending floors going up, descending floors going down.
fn pending_batch(requests: &[Request], call: Call) -> Vec<usize> {
    let mut batch: Vec<usize> = requests
        .iter()
        .enumerate()
        .filter(|(_, request)| request.is_pending() && request.call == call)
        .map(|(index, _)| index)
        .collect();
    match call {
        Call::HallUp => batch.sort_by_key(|&index| requests[index].floor),
        Call::HallDown => batch.sort_by_key(|&index| std::cmp::Reverse(requests[index].floor)),
    }
    batch
}

/// Closest eligible car to `floor`; equal distances go to the lowest id.
fn nearest_car<F>(cars: &[Car], floor: u8, eligible: F) -> Option<usize>
where
    F: Fn(&Car) -> bool,
{
    cars.iter()
        .enumerate()
        .filter(|(_, car)| eligible(car))
        .min_by_key(|(_, car)| (car.distance_to(floor), car.id))
        .map(|(index, _)| index)
}

fn assign_batch(car: &mut Car, requests: &mut [Request], batch: &[usize], call: Call) {
    car.direction = call.as_direction();
    for &index in batch {
        let request = &mut requests[index];
        if route::is_passing_floor(car, request.floor) {
            debug!("Floor {} is already on the way for elevator {}", request.floor, car.id);
        }
        route::insert_stop_in_direction_order(car, request.floor);
        request.assign_to(car.id);
        info!(
            "Elevator {} assigned \"{}\" request on floor {} (currently at floor {})",
            car.id, request.call.as_string(), request.floor, car.floor
        );
    }
}
