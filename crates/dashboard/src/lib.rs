//! Opti-Transit terminal dashboard
//!
//! A sidebar-driven view switcher over the section-access state machine in
//! `opti-transit-access`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

/// Application state and event loop
pub mod app;
/// Static section display data
pub mod catalog;
/// Command line and file configuration
pub mod config;
/// Authentication form state
pub mod gate_form;
/// File-based tracing setup
pub mod logging;
/// UI components
pub mod ui;

mod error;

pub use app::{App, KeyEventResult};
pub use config::{Args, DashboardConfig, LogFormat};
pub use error::{Error, Result};
