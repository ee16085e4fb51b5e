//! UI module
//!
//! The data table components, the prizes page that hosts one, and the
//! terminal run loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod prizes_page;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
