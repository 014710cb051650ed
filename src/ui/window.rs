//! GTK4/Libadwaita Window Host
//!
//! Builds the main window by composition: an `AdwApplicationWindow` whose
//! content is a `GtkFlowBox`, with plain `GtkButton`s appended to it.

use crate::error::ShellError;
use crate::layout::{ButtonSpec, FlowAlignment, LayoutPolicy, WindowSpec};
use crate::ui::host::WindowHost;
use adw::prelude::*;

/// The toolkit objects that make up the main window
#[derive(Debug, Clone)]
pub struct GtkMainWindow {
    pub toplevel: adw::ApplicationWindow,
    pub flow: gtk::FlowBox,
}

/// `WindowHost` backed by a running `adw::Application`
pub struct GtkHost {
    app: adw::Application,
}

impl GtkHost {
    pub fn new(app: &adw::Application) -> Self {
        Self { app: app.clone() }
    }
}

fn halign(alignment: FlowAlignment) -> gtk::Align {
    match alignment {
        FlowAlignment::Leading => gtk::Align::Start,
        FlowAlignment::Center => gtk::Align::Center,
        FlowAlignment::Trailing => gtk::Align::End,
    }
}

fn flow_box(layout: &LayoutPolicy) -> gtk::FlowBox {
    let LayoutPolicy::Flow { hgap, vgap, alignment } = *layout;

    gtk::FlowBox::builder()
        .orientation(gtk::Orientation::Horizontal)
        .selection_mode(gtk::SelectionMode::None)
        .homogeneous(false)
        .column_spacing(hgap.max(0) as u32)
        .row_spacing(vgap.max(0) as u32)
        .halign(halign(alignment))
        .valign(gtk::Align::Start)
        .margin_top(vgap)
        .margin_bottom(vgap)
        .margin_start(hgap)
        .margin_end(hgap)
        .build()
}

impl WindowHost for GtkHost {
    type Window = GtkMainWindow;

    fn create_window(&mut self, spec: &WindowSpec) -> Result<GtkMainWindow, ShellError> {
        if gtk::gdk::Display::default().is_none() {
            return Err(ShellError::NoDisplay);
        }

        let flow = flow_box(&spec.layout);

        let toplevel = adw::ApplicationWindow::builder()
            .application(&self.app)
            .title(spec.title)
            .default_width(spec.width)
            .default_height(spec.height)
            .content(&flow)
            .build();

        Ok(GtkMainWindow { toplevel, flow })
    }

    fn add_button(&mut self, window: &GtkMainWindow, button: &ButtonSpec) {
        // No clicked handler is connected
        let widget = gtk::Button::with_label(button.label);
        window.flow.append(&widget);
    }

    fn set_exit_on_close(&mut self, window: &GtkMainWindow) {
        let app = self.app.clone();
        window.toplevel.set_hide_on_close(false);
        window.toplevel.connect_close_request(glib::clone!(
            @weak app => @default-return glib::Propagation::Proceed,
            move |_| {
                tracing::info!("Close requested, quitting");
                app.quit();
                glib::Propagation::Proceed
            }
        ));
    }

    fn set_visible(&mut self, window: &GtkMainWindow) {
        window.toplevel.present();
    }
}
