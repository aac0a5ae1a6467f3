//! View state and controller
//!
//! The list and detail view models and the controller that drives them.

pub mod controller;
pub mod detail;
pub mod list;
pub mod state;

pub use controller::AppController;
pub use detail::{DetailState, DetailView};
pub use list::{Card, ListView};
pub use state::{AppCommand, LoadState, ViewState};
