pub mod call;
pub mod car;
pub mod config;
pub mod direction;
pub mod error;
pub mod request;
pub mod status_message;
