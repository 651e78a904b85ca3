//! Section-access state machine for the Opti-Transit dashboard.
//!
//! Tracks which section is selected, which sections the session has unlocked
//! through the mock authentication gate, and whether the gate is open. The
//! renderer asks [`AccessController::resolve_view`] what to draw, or
//! subscribes to [`ViewChange`] notifications.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod controller;
mod error;
mod section;
mod state;
mod view;

pub use controller::{AccessController, AuthMode};
pub use error::{Error, Result};
pub use section::Section;
pub use state::AccessState;
pub use view::{View, ViewChange};
