//! Reusable UI components

pub mod board;
pub mod card;
pub mod column;
pub mod dialog_component;
pub mod dialogs;
pub mod navigator;
pub mod status_bar;

pub use board::BoardComponent;
pub use card::CardComponent;
pub use column::ColumnComponent;
pub use dialog_component::DialogComponent;
pub use navigator::NavigatorComponent;
pub use status_bar::StatusBar;
