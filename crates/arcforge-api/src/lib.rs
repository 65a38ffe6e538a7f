//! Request boundary for the Arcforge requirement calculator.
//!
//! Hosts (a CLI, an HTTP layer, a desktop shell) talk to [`Calculator`]
//! through typed requests or through [`handle_json`], and get back
//! display-ready records sorted by name.
//!
//! # Operations
//!
//! - [`Calculator::list_items`] -- every craftable, upgradeable, or
//!   weapon-tier item.
//! - [`Calculator::calculate`] -- direct requirements for a selection.
//! - [`Calculator::expand`] -- direct requirements for one item.
//! - [`Calculator::item_info`] -- the display record for one id.

pub mod error;
pub mod json;
pub mod service;
pub mod types;

pub use error::ApiError;
pub use json::{Operation, handle_json};
pub use service::Calculator;
pub use types::{CalculateRequest, ExpandRequest, InfoRequest, ListedItem, RequirementLine};
