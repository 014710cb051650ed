//! Wellness Tracker Application - Libadwaita Application Setup
//!
//! Owns the `adw::Application`, builds the main window on activation and
//! runs the main loop until the window is closed.

use crate::error::ShellError;
use crate::layout::{WindowSpec, APP_ID};
use crate::ui::host::{create_main_window, MainWindow};
use crate::ui::window::{GtkHost, GtkMainWindow};
use adw::prelude::*;
use gtk::gio;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type WindowSlot = Rc<RefCell<Option<MainWindow<GtkMainWindow>>>>;

pub struct WellnessApplication {
    app: adw::Application,
    build_failed: Rc<Cell<bool>>,
}

impl Default for WellnessApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl WellnessApplication {
    pub fn new() -> Self {
        let app = adw::Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::FLAGS_NONE)
            .build();

        let slot: WindowSlot = Rc::new(RefCell::new(None));
        let build_failed = Rc::new(Cell::new(false));

        app.connect_startup(|app| {
            if gtk::gdk::Display::default().is_none() {
                tracing::warn!("No default display available at startup");
            }
            setup_actions(app);
        });

        let failed = build_failed.clone();
        app.connect_activate(move |app| {
            if activate(app, &slot).is_err() {
                failed.set(true);
            }
        });

        Self { app, build_failed }
    }

    /// Run the main loop. Process arguments are handled by the caller.
    pub fn run(&self) -> glib::ExitCode {
        let code = self.app.run_with_args::<&str>(&[]);
        exit_code(code, self.build_failed.get())
    }
}

/// A window that could not be built turns a clean loop exit into a failure
fn exit_code(loop_code: glib::ExitCode, build_failed: bool) -> glib::ExitCode {
    if build_failed {
        glib::ExitCode::FAILURE
    } else {
        loop_code
    }
}

fn activate(app: &adw::Application, slot: &WindowSlot) -> Result<(), ShellError> {
    // A second activation only raises the existing window
    if let Some(existing) = slot.borrow().as_ref() {
        if existing.state().is_visible() {
            existing.window.toplevel.present();
            return Ok(());
        }
    }

    let mut host = GtkHost::new(app);
    match create_main_window(&mut host, &WindowSpec::wellness_tracker()) {
        Ok(main) => {
            track_close(&main.window, slot);
            *slot.borrow_mut() = Some(main);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Could not build main window: {}", e);
            app.quit();
            Err(e)
        }
    }
}

fn track_close(window: &GtkMainWindow, slot: &WindowSlot) {
    let weak = Rc::downgrade(slot);
    window.toplevel.connect_close_request(move |_| {
        if let Some(slot) = weak.upgrade() {
            if let Some(main) = slot.borrow_mut().as_mut() {
                if let Err(e) = main.close() {
                    tracing::warn!("{}", e);
                }
            }
        }
        glib::Propagation::Proceed
    });
}

fn setup_actions(app: &adw::Application) {
    // Quit closes the active window so the exit-on-close path runs
    let quit_action = gio::SimpleAction::new("quit", None);
    let app = app.clone();
    quit_action.connect_activate(glib::clone!(
        @weak app =>
        move |_, _| {
            match app.active_window() {
                Some(window) => window.close(),
                None => app.quit(),
            }
        }
    ));
    app.add_action(&quit_action);

    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}

/// Check for an X11 or Wayland display before initializing GTK
pub fn check_display() -> Result<(), ShellError> {
    let x11 = std::env::var_os("DISPLAY");
    let wayland = std::env::var_os("WAYLAND_DISPLAY");
    if has_display(x11.as_deref(), wayland.as_deref()) {
        Ok(())
    } else {
        Err(ShellError::NoDisplay)
    }
}

fn has_display(x11: Option<&std::ffi::OsStr>, wayland: Option<&std::ffi::OsStr>) -> bool {
    [x11, wayland]
        .into_iter()
        .flatten()
        .any(|value| !value.is_empty())
}
