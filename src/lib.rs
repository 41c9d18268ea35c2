//! Page controller for the course analytics dashboard.
//!
//! The DOM is reached through the traits in [`dom`], so all behavior here runs
//! and is tested on the host. `coursedash_web` binds it to `web_sys`.

pub mod config;
pub mod controller;
pub mod dom;
pub mod endpoint;
pub mod error;
pub mod frame;
pub mod tabs;
pub mod ui_model;

#[cfg(test)]
mod testing;

pub use config::DashboardConfig;
pub use controller::PageController;
pub use error::{DashboardError, Result};
pub use ui_model::{ChartCategory, Selection};
