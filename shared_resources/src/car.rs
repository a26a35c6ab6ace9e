use crate::direction::Direction;

/// One elevator car in the bank.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u8,
    pub floor: u8,
    pub direction: Direction,
    pub stops: Vec<u8>,
}

/// What a single call to [`Car::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Parked,
    Moved { from: u8, to: u8, target: u8 },
    Arrived { floor: u8, direction: Direction },
}

impl Car {
    /// All cars start idle at the ground floor.
    pub fn new(id: u8) -> Self {
        Car {
            id: id,
            floor: 1,
            direction: Direction::Idle,
            stops: Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn next_stop(&self) -> Option<u8> {
        self.stops.first().copied()
    }

    pub fn distance_to(&self, floor: u8) -> u8 {
        self.floor.abs_diff(floor)
    }

    /// Advance one tick: either move exactly one floor towards the next stop,
    /// or, if already standing on it, pop it and turn towards the following one.
    /// `Arrived` carries the direction the car had when it reached the floor.
    pub fn advance(&mut self) -> Motion {
        let target = match self.next_stop() {
            Some(target) => target,
            None => {
                self.direction = Direction::Idle;
                return Motion::Parked
            }
        };

        if self.floor == target {
            let arrived_moving = self.direction;
            self.stops.remove(0);
            self.direction = match self.next_stop() {
                Some(next) => Direction::towards(self.floor, next),
                None => Direction::Idle,
            };
            return Motion::Arrived { floor: target, direction: arrived_moving }
        }

        let from = self.floor;
        self.direction = Direction::towards(self.floor, target);
        self.floor = if target > self.floor { self.floor + 1 } else { self.floor - 1 };
        Motion::Moved { from: from, to: self.floor, target: target }
    }
}
