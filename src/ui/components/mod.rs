//! Reusable UI components

pub mod badge;
pub mod data_table;
pub mod help_panel;
pub mod logs_panel;
pub mod status_bar;

pub use data_table::DataTable;
pub use help_panel::HelpPanel;
pub use logs_panel::LogsPanel;
pub use status_bar::StatusBar;
