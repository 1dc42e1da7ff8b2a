//! # Core Domain
//!
//! Everything the UI renders and mutates, free of any terminal or network
//! code: the fleet catalog, the navigation stack, the booking workflow, the
//! simulated account store and the action/reducer pair that ties them
//! together.

pub mod action;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod nav;
pub mod state;
pub mod store;
