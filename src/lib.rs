pub mod cli;
pub mod config;
pub mod controller;
pub mod models;
pub mod store;

pub use controller::FilterController;
pub use store::Roster;
