//! Record runs and rides, pin them on a map, list them, and keep them
//! across restarts in a key-value store.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod geo;
pub mod map;
pub mod persistence;
pub mod render;
pub mod sidebar;
pub mod storage;
pub mod store;
pub mod types;
pub mod utils;
pub mod view;

pub use error::{Result, WorkoutError};
pub use view::App;
