//! Application state module

mod app_state;
pub mod controller;
mod forms;
mod loader_state;
pub mod sequencer;
pub mod validation;

pub use app_state::*;
pub use controller::{Controller, SubmitOutcome};
pub use forms::*;
pub use loader_state::*;
