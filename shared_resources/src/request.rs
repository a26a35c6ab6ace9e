use super::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Assigned,
}

impl RequestStatus {
    pub fn as_string(self) -> String {
        match self {
            RequestStatus::Pending => String::from("pending"),
            RequestStatus::Assigned => String::from("assigned"),
        }
    }
}

/// A hall request. Floor and call are fixed at creation; the dispatcher moves
/// it from `Pending` to `Assigned` and drops it once it has been served.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub floor: u8,
    pub call: Call,
    pub status: RequestStatus,
    pub assigned_car: Option<u8>,
}

impl Request {
    pub fn new(floor: u8, call: Call) -> Self {
        Request {
            floor: floor,
            call: call,
            status: RequestStatus::Pending,
            assigned_car: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn assign_to(&mut self, car_id: u8) {
        self.status = RequestStatus::Assigned;
        self.assigned_car = Some(car_id);
    }

    /// True if car `car_id`, arriving at `floor` while moving in the call's
    /// direction, serves this request.
    pub fn is_served_by(&self, car_id: u8, floor: u8, call: Call) -> bool {
        self.status == RequestStatus::Assigned
            && self.assigned_car == Some(car_id)
            && self.floor == floor
            && self.call == call
    }
}
