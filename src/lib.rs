//! Terminal kanban client for Planka.
//!
//! A two-screen TUI: a project/board navigator and a columnar board view.
//! All state lives on the server; every mutation is a remote call first and a
//! local widget patch second.

pub mod api;
pub mod config;
pub mod constants;
pub mod logger;
pub mod ui;
