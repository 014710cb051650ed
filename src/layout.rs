//! Window Layout Description
//!
//! Compiled-in description of the main window. Nothing here touches the
//! toolkit, so the whole shape of the UI can be inspected without a display.

/// Application ID registered with GIO
pub const APP_ID: &str = "io.github.wellness.Tracker";

/// Main window title
pub const WINDOW_TITLE: &str = "Wellness Tracker";

/// Outer window width in logical units
pub const WINDOW_WIDTH: i32 = 900;

/// Outer window height in logical units
pub const WINDOW_HEIGHT: i32 = 700;

/// Button labels in display order
pub const BUTTON_LABELS: [&str; 3] = ["Log Exercise", "Log Nutrition", "Log Sleep"];

/// Default gap between flow children, both horizontally and vertically
pub const FLOW_GAP: i32 = 5;

/// How a row of flowed children is aligned inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAlignment {
    Leading,
    Center,
    Trailing,
}

/// Layout policy for the window's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Left-to-right in insertion order, wrapping to new rows,
    /// children keep their natural size.
    Flow {
        hgap: i32,
        vgap: i32,
        alignment: FlowAlignment,
    },
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy::Flow {
            hgap: FLOW_GAP,
            vgap: FLOW_GAP,
            alignment: FlowAlignment::Center,
        }
    }
}

/// What happens when the window's close control is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// Terminate the whole process, no confirmation
    #[default]
    ExitProcess,
}

/// A button with a label and nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
}

/// Everything needed to build the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
    pub layout: LayoutPolicy,
    pub close_policy: ClosePolicy,
    pub buttons: Vec<ButtonSpec>,
}

impl WindowSpec {
    /// The Wellness Tracker main window
    pub fn wellness_tracker() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            layout: LayoutPolicy::default(),
            close_policy: ClosePolicy::default(),
            buttons: BUTTON_LABELS
                .iter()
                .map(|&label| ButtonSpec { label })
                .collect(),
        }
    }

    pub fn button_labels(&self) -> Vec<&'static str> {
        self.buttons.iter().map(|b| b.label).collect()
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::wellness_tracker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_attributes() {
        let spec = WindowSpec::wellness_tracker();
        assert_eq!(spec.title, "Wellness Tracker");
        assert_eq!((spec.width, spec.height), (900, 700));
        assert_eq!(spec.close_policy, ClosePolicy::ExitProcess);
    }

    #[test]
    fn test_button_order() {
        let spec = WindowSpec::wellness_tracker();
        assert_eq!(
            spec.button_labels(),
            vec!["Log Exercise", "Log Nutrition", "Log Sleep"]
        );
    }

    #[test]
    fn test_flow_defaults() {
        match WindowSpec::default().layout {
            LayoutPolicy::Flow { hgap, vgap, alignment } => {
                assert_eq!(hgap, 5);
                assert_eq!(vgap, 5);
                assert_eq!(alignment, FlowAlignment::Center);
            }
        }
    }

    #[test]
    fn test_spec_is_reproducible() {
        assert_eq!(WindowSpec::wellness_tracker(), WindowSpec::wellness_tracker());
    }
}
