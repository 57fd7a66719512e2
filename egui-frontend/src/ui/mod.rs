pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod export;
pub mod format;
pub mod state;

pub use app_state::*;
