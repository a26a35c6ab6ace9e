use crate::direction::Direction;

/// Which hall button was pressed on a floor.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
}

impl Call {
    pub fn as_direction(self) -> Direction {
        match self {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("up"),
            Call::HallDown => String::from("down"),
        }
    }

    /// Accepts "up"/"u" and "down"/"d", case insensitive.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(Call::HallUp),
            "down" | "d" => Some(Call::HallDown),
            _ => None,
        }
    }

    /// A call is only valid if it does not ask to leave the building.
    pub fn is_valid_at(self, floor: u8, num_floors: u8) -> bool {
        if floor < 1 || floor > num_floors {
            return false
        }
        match self {
            Call::HallUp => floor != num_floors,
            Call::HallDown => floor != 1,
        }
    }
}
