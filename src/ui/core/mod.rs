//! Core UI building blocks.
//!
//! - [`actions`] - Table interactions and application actions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input and frame ticks
//! - [`task_manager`] - Background work whose results come back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, TableAction};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::TaskManager;
