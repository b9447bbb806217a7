pub mod ports;
pub mod event_bus;
pub mod store;
pub mod session;
pub mod simulator;
pub mod preferences;
pub mod controller;
