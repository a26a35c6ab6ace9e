/// ----- DISPATCHER MODULE -----
/// Owns the elevator bank and the list of active hall requests. Intake,
/// assignment, motion and snapshots all go through the same lock, so a tick
/// never observes a half-applied request and a snapshot never observes a
/// half-moved car.

use log::{debug, info, warn};
use parking_lot::Mutex;

use shared_resources::call::Call;
use shared_resources::car::{Car, Motion};
use shared_resources::direction::Direction;
use shared_resources::request::{Request, RequestStatus};
use shared_resources::status_message::StatusMessage;

use crate::error::{DispatchError, DispatchResult};
use crate::utilities::hall_request_assigner::assign_hall_requests;

#[derive(Debug)]
struct DispatchState {
    cars: Vec<Car>,
    requests: Vec<Request>,
}

#[derive(Debug)]
pub struct Dispatcher {
    num_floors: u8,
    state: Mutex<DispatchState>,
}

impl Dispatcher {
    /// Builds a bank of `num_cars` cars, numbered from 1, idle on floor 1.
    pub fn new(num_floors: u8, num_cars: u8) -> DispatchResult<Self> {
        if num_floors < 2 {
            return Err(DispatchError::TooFewFloors(num_floors))
        }
        if num_cars < 1 {
            return Err(DispatchError::NoCars)
        }
        Ok(Dispatcher {
            num_floors: num_floors,
            state: Mutex::new(DispatchState {
                cars: (1..=num_cars).map(Car::new).collect(),
                requests: Vec::new(),
            }),
        })
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    /// Registers a hall call. Calls that would leave the building, and calls
    /// whose button is already lit (an identical pending request), are dropped.
    /// An identical request that is already assigned does not block a new one.
    pub fn receive_request(&self, floor: u8, call: Call) {
        if !call.is_valid_at(floor, self.num_floors) {
            warn!("Ignoring \"{}\" request on floor {}", call.as_string(), floor);
            return
        }
        let mut state = self.state.lock();
        let duplicate = state.requests.iter().any(|request| {
            request.is_pending() && request.floor == floor && request.call == call
        });
        if duplicate {
            debug!("\"{}\" request on floor {} is already pending", call.as_string(), floor);
            return
        }
        state.requests.push(Request::new(floor, call));
        debug!("\"{}\" request on floor {} received", call.as_string(), floor);
    }

    /// Hands pending requests to cars. Safe to call with nothing pending.
    pub fn assign(&self) {
        let mut state = self.state.lock();
        let DispatchState { cars, requests } = &mut *state;
        assign_hall_requests(cars, requests);
    }

    /// Advances every car by one tick and returns the requests served on the way.
    pub fn step(&self) -> Vec<Request> {
        let mut state = self.state.lock();
        let DispatchState { cars, requests } = &mut *state;
        let mut served = Vec::new();

        for car in cars.iter_mut() {
            match car.advance() {
                Motion::Parked => (),
                Motion::Moved { from, to, target } => {
                    debug!(
                        "Elevator {} moving {} from floor {} to {}. Next stop: floor {}",
                        car.id, car.direction.as_string(), from, to, target
                    );
                },
                Motion::Arrived { floor, direction } => {
                    info!("Elevator {} stopped at floor {} going {}", car.id, floor, direction.as_string());
                    let call = match direction.to_call() {
                        Some(call) => call,
                        None => continue,
                    };
                    let (done, active): (Vec<Request>, Vec<Request>) = requests
                        .drain(..)
                        .partition(|request| request.is_served_by(car.id, floor, call));
                    *requests = active;
                    for request in &done {
                        info!("Elevator {} served \"{}\" request on floor {}", car.id, request.call.as_string(), request.floor);
                    }
                    served.extend(done);
                },
            }
        }
        served
    }

    /// Copies of all cars, by ascending id.
    pub fn list_cars(&self) -> Vec<Car> {
        self.state.lock().cars.clone()
    }

    /// Copies of all active requests, oldest first.
    pub fn list_calls(&self) -> Vec<Request> {
        self.state.lock().requests.clone()
    }

    pub fn calls_with_status(&self, status: RequestStatus) -> Vec<Request> {
        self.filtered_calls(|request| request.status == status)
    }

    pub fn calls_in_direction(&self, call: Call) -> Vec<Request> {
        self.filtered_calls(|request| request.call == call)
    }

    pub fn pending_up_requests(&self) -> Vec<Request> {
        self.filtered_calls(|request| request.is_pending() && request.call == Call::HallUp)
    }

    pub fn pending_down_requests(&self) -> Vec<Request> {
        self.filtered_calls(|request| request.is_pending() && request.call == Call::HallDown)
    }

    fn filtered_calls<F>(&self, keep: F) -> Vec<Request>
    where
        F: Fn(&Request) -> bool,
    {
        self.state.lock().requests.iter().filter(|request| keep(*request)).cloned().collect()
    }

    /// Cars and requests copied under a single lock, so they agree with each other.
    pub fn status(&self, tick: u64) -> StatusMessage {
        let state = self.state.lock();
        StatusMessage {
            tick: tick,
            floors: self.num_floors,
            elevators: state.cars.clone(),
            requests: state.requests.clone(),
        }
    }

    /// Puts a car on `floor` heading `direction`. Meant for staging scenarios,
    /// not for normal operation. Only a car without stops can be moved, so a
    /// staged car never strands its assigned requests or misorders its route.
    pub fn set_car_state(&self, id: u8, floor: u8, direction: Direction) -> DispatchResult<()> {
        if floor < 1 || floor > self.num_floors {
            return Err(DispatchError::FloorOutOfRange { floor: floor, num_floors: self.num_floors })
        }
        let mut state = self.state.lock();
        let car = state.cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or(DispatchError::UnknownCar(id))?;
        if !car.is_idle() {
            return Err(DispatchError::CarBusy(id))
        }
        car.floor = floor;
        car.direction = direction;
        Ok(())
    }
}
