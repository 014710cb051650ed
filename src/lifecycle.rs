//! Window Lifecycle
//!
//! `Uninitialized → [construct] → Visible → [close] → Terminated`, plus a
//! tracker that enforces construction order: the window exists before any
//! child is added, and every child is added before the window is shown.

use crate::error::ShellError;
use std::fmt;

/// Lifecycle state of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Uninitialized,
    Visible,
    Terminated,
}

/// Events that move the window between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Construct,
    Close,
}

impl WindowState {
    /// Apply an event. Terminated is final.
    pub fn apply(self, event: WindowEvent) -> Result<WindowState, ShellError> {
        match (self, event) {
            (WindowState::Uninitialized, WindowEvent::Construct) => Ok(WindowState::Visible),
            (WindowState::Visible, WindowEvent::Close) => Ok(WindowState::Terminated),
            (from, event) => Err(ShellError::InvalidTransition { from, event }),
        }
    }

    pub fn construct(self) -> Result<WindowState, ShellError> {
        self.apply(WindowEvent::Construct)
    }

    pub fn close(self) -> Result<WindowState, ShellError> {
        self.apply(WindowEvent::Close)
    }

    pub fn is_visible(self) -> bool {
        self == WindowState::Visible
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowState::Uninitialized => "uninitialized",
            WindowState::Visible => "visible",
            WindowState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowEvent::Construct => f.write_str("construct"),
            WindowEvent::Close => f.write_str("close"),
        }
    }
}

/// One step of building the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionStep {
    CreateWindow,
    AddChild,
    SetExitOnClose,
    SetVisible,
}

impl fmt::Display for ConstructionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstructionStep::CreateWindow => "create window",
            ConstructionStep::AddChild => "add child",
            ConstructionStep::SetExitOnClose => "set exit-on-close",
            ConstructionStep::SetVisible => "set visible",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Building,
    Shown,
}

/// Records construction steps and rejects any that arrive out of order.
#[derive(Debug, Clone)]
pub struct ConstructionTracker {
    phase: Phase,
    children: usize,
    state: WindowState,
}

impl Default for ConstructionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructionTracker {
    pub fn new() -> Self {
        Self {
            phase: Phase::Fresh,
            children: 0,
            state: WindowState::Uninitialized,
        }
    }

    /// Record a step. Showing the window completes the `construct` transition.
    pub fn record(&mut self, step: ConstructionStep) -> Result<(), ShellError> {
        match (self.phase, step) {
            (Phase::Fresh, ConstructionStep::CreateWindow) => {
                self.phase = Phase::Building;
            }
            (Phase::Fresh, step) => {
                return Err(ShellError::OutOfOrder {
                    step,
                    expected: ConstructionStep::CreateWindow,
                });
            }
            (Phase::Building, ConstructionStep::AddChild) => {
                self.children += 1;
            }
            (Phase::Building, ConstructionStep::SetExitOnClose) => {}
            (Phase::Building, ConstructionStep::SetVisible) => {
                self.state = self.state.construct()?;
                self.phase = Phase::Shown;
            }
            (Phase::Building, step) => {
                return Err(ShellError::OutOfOrder {
                    step,
                    expected: ConstructionStep::AddChild,
                });
            }
            // Nothing may be added once the window is on screen
            (Phase::Shown, _) => {
                return Err(ShellError::InvalidTransition {
                    from: self.state,
                    event: WindowEvent::Construct,
                });
            }
        }
        tracing::debug!("Construction step: {}", step);
        Ok(())
    }

    pub fn children(&self) -> usize {
        self.children
    }

    pub fn state(&self) -> WindowState {
        self.state
    }
}
