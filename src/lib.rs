//! Rewardsdesk - a prizes admin page in the terminal
//!
//! The centrepiece is a generic, configuration-driven data table: pages
//! describe their columns, filters and actions once and the table takes care
//! of rendering cells, selection, bulk actions and pagination. The prizes
//! page hosts one over an in-memory catalog.
//!
//! # Modules
//!
//! * [`catalog`] - Prize model and the paged data source
//! * [`config`] - Application configuration management
//! * [`ui`] - The data table components and the prizes page
//! * [`utils`] - Date, number and colour helpers

/// Prize catalog and the paged data source trait
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types
pub mod error;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for formatting dates, numbers and colours
pub mod utils;
