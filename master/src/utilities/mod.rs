pub mod debug;
pub mod hall_request_assigner;
pub mod route;
