//! Wellness Tracker Library
//!
//! This library provides:
//! - The compiled-in window layout
//! - The window lifecycle state machine
//! - Error types
//! - The GTK4/Libadwaita shell

pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod ui;
