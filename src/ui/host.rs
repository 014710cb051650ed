//! Window Host - the toolkit capabilities the shell consumes
//!
//! The shell needs exactly four things from a GUI toolkit: create a window,
//! add a child widget, mark the window exit-on-close, and show it.
//! `create_main_window` drives any host through those steps in order.

use crate::error::ShellError;
use crate::layout::{ButtonSpec, WindowSpec};
use crate::lifecycle::{ConstructionStep, ConstructionTracker, WindowState};

/// Toolkit adapter used to build the main window
pub trait WindowHost {
    type Window;

    /// Allocate a top-level window with the spec's title, size and layout
    fn create_window(&mut self, spec: &WindowSpec) -> Result<Self::Window, ShellError>;

    /// Append an inert button; no handler is attached
    fn add_button(&mut self, window: &Self::Window, button: &ButtonSpec);

    /// Closing this window ends the process
    fn set_exit_on_close(&mut self, window: &Self::Window);

    fn set_visible(&mut self, window: &Self::Window);
}

/// A constructed main window and its lifecycle state
#[derive(Debug)]
pub struct MainWindow<W> {
    pub window: W,
    state: WindowState,
}

impl<W> MainWindow<W> {
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Move to `Terminated`. Fails if already closed.
    pub fn close(&mut self) -> Result<(), ShellError> {
        self.state = self.state.close()?;
        tracing::info!("Main window closed");
        Ok(())
    }
}

/// Build and show the main window described by `spec`.
pub fn create_main_window<H: WindowHost>(
    host: &mut H,
    spec: &WindowSpec,
) -> Result<MainWindow<H::Window>, ShellError> {
    let mut tracker = ConstructionTracker::new();

    tracker.record(ConstructionStep::CreateWindow)?;
    let window = host.create_window(spec)?;

    tracker.record(ConstructionStep::SetExitOnClose)?;
    host.set_exit_on_close(&window);

    for button in &spec.buttons {
        tracker.record(ConstructionStep::AddChild)?;
        host.add_button(&window, button);
    }

    // Visibility is always last
    tracker.record(ConstructionStep::SetVisible)?;
    host.set_visible(&window);

    tracing::info!(
        "Main window '{}' shown ({}x{}, {} buttons)",
        spec.title,
        spec.width,
        spec.height,
        tracker.children()
    );

    Ok(MainWindow {
        window,
        state: tracker.state(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutPolicy;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateWindow {
            title: &'static str,
            width: i32,
            height: i32,
            layout: LayoutPolicy,
        },
        AddButton(&'static str),
        SetExitOnClose,
        SetVisible,
    }

    /// Records every call instead of touching a display
    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<Call>,
        windows: usize,
    }

    impl RecordingHost {
        fn buttons(&self) -> Vec<&'static str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::AddButton(label) => Some(*label),
                    _ => None,
                })
                .collect()
        }
    }

    impl WindowHost for RecordingHost {
        type Window = usize;

        fn create_window(&mut self, spec: &WindowSpec) -> Result<usize, ShellError> {
            self.windows += 1;
            self.calls.push(Call::CreateWindow {
                title: spec.title,
                width: spec.width,
                height: spec.height,
                layout: spec.layout,
            });
            Ok(self.windows)
        }

        fn add_button(&mut self, _window: &usize, button: &ButtonSpec) {
            self.calls.push(Call::AddButton(button.label));
        }

        fn set_exit_on_close(&mut self, _window: &usize) {
            self.calls.push(Call::SetExitOnClose);
        }

        fn set_visible(&mut self, _window: &usize) {
            self.calls.push(Call::SetVisible);
        }
    }

    #[test]
    fn test_single_window_with_title_and_size() {
        let mut host = RecordingHost::default();
        let main = create_main_window(&mut host, &WindowSpec::wellness_tracker()).unwrap();

        assert_eq!(host.windows, 1);
        assert_eq!(main.window, 1);
        assert_eq!(
            host.calls[0],
            Call::CreateWindow {
                title: "Wellness Tracker",
                width: 900,
                height: 700,
                layout: LayoutPolicy::default(),
            }
        );
    }

    #[test]
    fn test_three_buttons_in_order() {
        let mut host = RecordingHost::default();
        create_main_window(&mut host, &WindowSpec::wellness_tracker()).unwrap();
        assert_eq!(host.buttons(), vec!["Log Exercise", "Log Nutrition", "Log Sleep"]);
    }

    #[test]
    fn test_visible_is_last() {
        let mut host = RecordingHost::default();
        let main = create_main_window(&mut host, &WindowSpec::wellness_tracker()).unwrap();

        assert_eq!(host.calls.last(), Some(&Call::SetVisible));
        assert_eq!(host.calls.iter().filter(|c| **c == Call::SetVisible).count(), 1);
        assert!(host.calls.contains(&Call::SetExitOnClose));
        assert_eq!(main.state(), WindowState::Visible);
    }

    #[test]
    fn test_close_terminates_once() {
        let mut host = RecordingHost::default();
        let mut main = create_main_window(&mut host, &WindowSpec::wellness_tracker()).unwrap();

        main.close().unwrap();
        assert_eq!(main.state(), WindowState::Terminated);
        assert!(main.close().is_err());
    }

    #[test]
    fn test_relaunch_is_identical() {
        let mut first = RecordingHost::default();
        let mut second = RecordingHost::default();
        create_main_window(&mut first, &WindowSpec::wellness_tracker()).unwrap();
        create_main_window(&mut second, &WindowSpec::wellness_tracker()).unwrap();
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_create_failure_propagates() {
        struct NoDisplayHost;

        impl WindowHost for NoDisplayHost {
            type Window = ();

            fn create_window(&mut self, _spec: &WindowSpec) -> Result<(), ShellError> {
                Err(ShellError::NoDisplay)
            }
            fn add_button(&mut self, _window: &(), _button: &ButtonSpec) {
                panic!("add_button after failed create");
            }
            fn set_exit_on_close(&mut self, _window: &()) {
                panic!("set_exit_on_close after failed create");
            }
            fn set_visible(&mut self, _window: &()) {
                panic!("set_visible after failed create");
            }
        }

        let err = create_main_window(&mut NoDisplayHost, &WindowSpec::wellness_tracker())
            .unwrap_err();
        assert_eq!(err, ShellError::NoDisplay);
    }
}
