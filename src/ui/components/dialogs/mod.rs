//! Dialog rendering modules.
//!
//! The [`DialogComponent`](super::dialog_component::DialogComponent) owns the
//! dialog state; these modules only draw.

pub mod card_dialogs;
pub mod common;
pub mod system_dialogs;
