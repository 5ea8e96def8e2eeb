pub mod client;
pub mod completion_gateway;
