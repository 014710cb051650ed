//! UI Module - GTK4 + Libadwaita Interface
//!
//! A single window with three buttons in a flow layout.

pub mod app;
pub mod host;
pub mod window;
