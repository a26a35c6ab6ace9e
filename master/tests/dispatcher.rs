use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use master::modules::dispatcher::Dispatcher;
use master::modules::hall_call_generator::random_hall_call;
use shared_resources::call::Call;
use shared_resources::car::Car;
use shared_resources::direction::Direction;
use shared_resources::request::RequestStatus;

fn run_until_idle(dispatcher: &Dispatcher, max_ticks: usize) {
    for _ in 0..max_ticks {
        dispatcher.assign();
        dispatcher.step();
        if dispatcher.list_cars().iter().all(|car| car.stops.is_empty()) {
            return
        }
    }
    panic!("cars still busy after {} ticks", max_ticks);
}

#[test]
fn up_batch_goes_to_first_of_four_idle_cars() {
    let dispatcher = Dispatcher::new(10, 4).unwrap();
    dispatcher.receive_request(5, Call::HallUp);
    dispatcher.receive_request(6, Call::HallUp);
    dispatcher.receive_request(7, Call::HallUp);

    dispatcher.assign();

    let cars = dispatcher.list_cars();
    assert_eq!(cars[0].stops, vec![5, 6, 7]);
    for car in &cars[1..] {
        assert!(car.stops.is_empty());
    }
    for request in dispatcher.list_calls() {
        assert_eq!(request.status, RequestStatus::Assigned);
        assert_eq!(request.assigned_car, Some(1));
    }
}

#[test]
fn up_moving_car_picks_up_a_call_it_is_about_to_pass() {
    let dispatcher = Dispatcher::new(10, 4).unwrap();
    dispatcher.set_car_state(1, 3, Direction::Up).unwrap();
    dispatcher.receive_request(6, Call::HallUp);
    dispatcher.receive_request(7, Call::HallUp);
    dispatcher.receive_request(8, Call::HallUp);
    dispatcher.assign();
    assert_eq!(dispatcher.list_cars()[0].stops, vec![6, 7, 8]);

    dispatcher.receive_request(5, Call::HallUp);
    dispatcher.assign();

    assert_eq!(dispatcher.list_cars()[0].stops, vec![5, 6, 7, 8]);
    assert!(dispatcher.pending_up_requests().is_empty());
}

#[test]
fn single_car_reaches_floor_five_in_five_steps() {
    let dispatcher = Dispatcher::new(10, 1).unwrap();
    dispatcher.receive_request(5, Call::HallUp);
    dispatcher.assign();

    for _ in 0..5 {
        dispatcher.step();
    }

    let car = &dispatcher.list_cars()[0];
    assert_eq!(car.floor, 5);
    assert!(car.stops.is_empty());
    assert_eq!(car.direction, Direction::Idle);
    assert!(dispatcher.list_calls().is_empty());
}

#[test]
fn five_steps_serve_only_the_first_floor_of_a_batch() {
    let dispatcher = Dispatcher::new(10, 4).unwrap();
    for floor in [5, 6, 7] {
        dispatcher.receive_request(floor, Call::HallUp);
    }
    dispatcher.assign();

    for _ in 0..5 {
        dispatcher.step();
    }

    let car = &dispatcher.list_cars()[0];
    assert_eq!(car.floor, 5);
    assert_eq!(car.stops, vec![6, 7]);
    assert_eq!(car.direction, Direction::Up);
    let remaining: Vec<u8> = dispatcher.list_calls().iter().map(|request| request.floor).collect();
    assert_eq!(remaining, vec![6, 7]);
}

#[test]
fn untouched_cars_stay_parked_while_one_serves_two_floors() {
    let dispatcher = Dispatcher::new(10, 4).unwrap();
    dispatcher.receive_request(2, Call::HallUp);
    dispatcher.receive_request(3, Call::HallUp);
    dispatcher.assign();

    run_until_idle(&dispatcher, 20);

    let cars = dispatcher.list_cars();
    assert_eq!(cars[0].floor, 3);
    assert_eq!(cars[0].direction, Direction::Idle);
    for car in &cars[1..] {
        assert_eq!(car.floor, 1);
        assert_eq!(car.direction, Direction::Idle);
    }
    assert!(dispatcher.list_calls().is_empty());
}

#[test]
fn down_batch_is_served_top_to_bottom() {
    let dispatcher = Dispatcher::new(10, 2).unwrap();
    dispatcher.set_car_state(2, 10, Direction::Idle).unwrap();
    dispatcher.receive_request(4, Call::HallDown);
    dispatcher.receive_request(8, Call::HallDown);
    dispatcher.receive_request(6, Call::HallDown);
    dispatcher.assign();
    assert_eq!(dispatcher.list_cars()[1].stops, vec![8, 6, 4]);

    let mut served_floors = Vec::new();
    for _ in 0..20 {
        dispatcher.assign();
        served_floors.extend(dispatcher.step().iter().map(|request| request.floor));
    }

    assert_eq!(served_floors, vec![8, 6, 4]);
    let car = &dispatcher.list_cars()[1];
    assert_eq!((car.floor, car.direction), (4, Direction::Idle));
}

#[test]
fn arrival_going_up_leaves_down_calls_on_the_same_floor() {
    let dispatcher = Dispatcher::new(10, 2).unwrap();
    dispatcher.set_car_state(2, 10, Direction::Idle).unwrap();
    dispatcher.receive_request(5, Call::HallDown);
    dispatcher.assign();
    dispatcher.receive_request(5, Call::HallUp);
    dispatcher.assign();
    assert_eq!(dispatcher.list_cars()[0].stops, vec![5]);
    assert_eq!(dispatcher.list_cars()[1].stops, vec![5]);

    for _ in 0..4 {
        assert!(dispatcher.step().is_empty());
    }
    // a fresh down call on floor 5, never assigned
    dispatcher.receive_request(5, Call::HallDown);

    let served = dispatcher.step();

    assert_eq!(served.len(), 1);
    assert_eq!((served[0].floor, served[0].call, served[0].assigned_car), (5, Call::HallUp, Some(1)));

    let remaining: Vec<(u8, Call, RequestStatus, Option<u8>)> = dispatcher
        .list_calls()
        .iter()
        .map(|request| (request.floor, request.call, request.status, request.assigned_car))
        .collect();
    assert_eq!(remaining, vec![
        (5, Call::HallDown, RequestStatus::Assigned, Some(2)),
        (5, Call::HallDown, RequestStatus::Pending, None),
    ]);
}

#[test]
fn boundary_calls_that_leave_the_building_are_rejected() {
    let dispatcher = Dispatcher::new(10, 2).unwrap();
    dispatcher.receive_request(1, Call::HallDown);
    dispatcher.receive_request(10, Call::HallUp);
    dispatcher.receive_request(1, Call::HallUp);
    dispatcher.receive_request(10, Call::HallDown);

    let calls: Vec<(u8, Call)> = dispatcher.list_calls().iter().map(|request| (request.floor, request.call)).collect();
    assert_eq!(calls, vec![(1, Call::HallUp), (10, Call::HallDown)]);
}

#[test]
fn down_call_below_every_idle_car_waits() {
    let dispatcher = Dispatcher::new(10, 2).unwrap();
    dispatcher.receive_request(5, Call::HallDown);

    for _ in 0..10 {
        dispatcher.assign();
        dispatcher.step();
    }

    assert_eq!(dispatcher.pending_down_requests().len(), 1);
    assert!(dispatcher.list_cars().iter().all(|car| car.floor == 1 && car.stops.is_empty()));
}

fn assert_route_is_consistent(car: &Car, num_floors: u8) {
    assert!(car.floor >= 1 && car.floor <= num_floors, "car {} left the building", car.id);

    let unique: HashSet<u8> = car.stops.iter().copied().collect();
    assert_eq!(unique.len(), car.stops.len(), "car {} has duplicate stops {:?}", car.id, car.stops);

    match car.direction {
        Direction::Up => {
            assert!(car.stops.windows(2).all(|pair| pair[0] < pair[1]), "car {} going up with {:?}", car.id, car.stops);
            assert!(car.stops.iter().all(|&stop| stop >= car.floor), "car {} going up past {:?}", car.id, car.stops);
        },
        Direction::Down => {
            assert!(car.stops.windows(2).all(|pair| pair[0] > pair[1]), "car {} going down with {:?}", car.id, car.stops);
            assert!(car.stops.iter().all(|&stop| stop <= car.floor), "car {} going down past {:?}", car.id, car.stops);
        },
        Direction::Idle => assert!(car.stops.is_empty(), "car {} idle with {:?}", car.id, car.stops),
    }
}

#[test]
fn random_traffic_keeps_the_bank_consistent() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let num_floors = rng.gen_range(2..=15);
        let num_cars = rng.gen_range(1..=5);
        let dispatcher = Dispatcher::new(num_floors, num_cars).unwrap();

        for tick in 0..300 {
            if tick < 200 && rng.gen_bool(0.4) {
                let (floor, call) = random_hall_call(&mut rng, num_floors);
                dispatcher.receive_request(floor, call);
            }

            dispatcher.assign();

            let before = dispatcher.list_cars();
            let served = dispatcher.step();
            let after = dispatcher.list_cars();

            for (old, new) in before.iter().zip(after.iter()) {
                match old.next_stop() {
                    None => assert_eq!(new.floor, old.floor),
                    Some(target) if target == old.floor => assert_eq!(new.floor, old.floor),
                    Some(target) => assert_eq!(new.distance_to(target) + 1, old.distance_to(target)),
                }
            }

            for request in &served {
                let car = &after[request.assigned_car.unwrap() as usize - 1];
                assert_eq!(car.floor, request.floor, "request served away from its floor");
            }

            for car in &after {
                assert_route_is_consistent(car, num_floors);
            }

            let calls = dispatcher.list_calls();
            let mut pending = HashSet::new();
            for request in &calls {
                assert!(request.call.is_valid_at(request.floor, num_floors));
                match request.status {
                    RequestStatus::Pending => {
                        assert!(request.assigned_car.is_none());
                        assert!(pending.insert((request.floor, request.call)), "duplicate pending {:?}", request);
                    },
                    RequestStatus::Assigned => {
                        let car = &after[request.assigned_car.unwrap() as usize - 1];
                        assert!(car.stops.contains(&request.floor), "car {} dropped floor {}", car.id, request.floor);
                    },
                }
            }
        }
    }
}
