//! Terminal user interface.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::run_app;
