use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("a building needs at least 2 floors, got {0}")]
    TooFewFloors(u8),

    #[error("an elevator bank needs at least one car")]
    NoCars,

    #[error("elevator {0} does not exist")]
    UnknownCar(u8),

    #[error("elevator {0} still has stops and cannot be moved")]
    CarBusy(u8),

    #[error("floor {floor} is outside the building (1..={num_floors})")]
    FloorOutOfRange { floor: u8, num_floors: u8 },
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Anything that can stop the simulator from starting.
#[derive(Debug, Error)]
pub enum MasterError {
    #[error(transparent)]
    Config(#[from] shared_resources::error::ConfigError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("could not start thread: {0}")]
    Thread(#[from] std::io::Error),
}
