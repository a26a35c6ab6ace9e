use super::car::Car;
use super::request::Request;

/// Snapshot of the whole bank, published once per tick.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub tick: u64,
    pub floors: u8,
    pub elevators: Vec<Car>,
    pub requests: Vec<Request>,
}

impl StatusMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn num_pending(&self) -> usize {
        self.requests.iter().filter(|request| request.is_pending()).count()
    }
}
