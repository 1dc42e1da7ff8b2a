//! VL Rent a Car library exports for testing

pub mod assistant;
pub mod core;
pub mod tui;
