pub mod models;
pub mod ports;
