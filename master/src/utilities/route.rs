/// ----- ROUTE ORDERING -----
/// Stateless helpers over a single car's stop list. The dispatcher calls these
/// while holding its lock; nothing else touches a car's stops.

use shared_resources::car::Car;
use shared_resources::direction::Direction;

/// Adds `floor` to the car's stops unless it is already there. Moving cars keep
/// their stops sorted in travel order; idle cars keep insertion order.
pub fn insert_stop_in_direction_order(car: &mut Car, floor: u8) {
    if car.stops.contains(&floor) {
        return
    }
    car.stops.push(floor);
    match car.direction {
        Direction::Up => car.stops.sort_unstable(),
        Direction::Down => car.stops.sort_unstable_by(|a, b| b.cmp(a)),
        Direction::Idle => (),
    }
}

/// True if `floor` lies ahead of the car on the stretch it is already going to
/// cover in its current direction. The car's own floor never counts.
pub fn is_passing_floor(car: &Car, floor: u8) -> bool {
    match car.direction {
        Direction::Idle => false,
        Direction::Up => {
            let highest = car.stops.iter().copied().max().unwrap_or(car.floor).max(car.floor);
            car.floor < floor && floor <= highest
        },
        Direction::Down => {
            let lowest = car.stops.iter().copied().min().unwrap_or(car.floor).min(car.floor);
            car.floor > floor && floor >= lowest
        },
    }
}
