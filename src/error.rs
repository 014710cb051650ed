//! Error types for the window shell.

use thiserror::Error;

use crate::lifecycle::{ConstructionStep, WindowEvent, WindowState};

/// Errors raised while bringing up or tearing down the main window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Neither X11 nor Wayland is reachable.
    #[error("No display server detected (X11 or Wayland)")]
    NoDisplay,

    /// The GUI toolkit refused to initialize.
    #[error("Failed to initialize {toolkit}: {message}")]
    ToolkitInit {
        toolkit: &'static str,
        message: String,
    },

    /// A lifecycle event arrived in a state that does not accept it.
    #[error("Cannot {event} a window that is {from}")]
    InvalidTransition {
        from: WindowState,
        event: WindowEvent,
    },

    /// A construction step ran before the step it depends on.
    #[error("Construction step '{step}' ran out of order (expected '{expected}')")]
    OutOfOrder {
        step: ConstructionStep,
        expected: ConstructionStep,
    },
}

impl ShellError {
    /// Create a toolkit init error from any displayable cause.
    pub fn toolkit_init(toolkit: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::ToolkitInit {
            toolkit,
            message: cause.to_string(),
        }
    }
}
