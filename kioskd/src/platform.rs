use std::net::IpAddr;
use std::sync::mpsc as std_mpsc;

use crate::screen::Screen;

/// Completion signal for an asynchronous surface navigation. Delivered on
/// a channel drained by the main loop; never assume it arrives in the same
/// tick as the navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    LoadFinished { ok: bool },
}

/// Trait for the embedded web-rendering surface and the screen stack
/// around it. This abstraction allows mocking in tests.
///
/// A real implementation is expected to load arbitrary HTTP/HTTPS targets
/// with certificate-error tolerance and mixed-content allowance, and to
/// report load completion through a `SurfaceEvent` channel. All methods
/// must be called from the primary thread.
pub trait DisplaySurface {
    /// Make the given screen the visible one. Idempotent.
    fn show_screen(&mut self, screen: Screen);
    fn navigate(&mut self, url: &str);
    fn set_zoom(&mut self, factor: f64);
    fn set_cursor_visible(&mut self, visible: bool);
    fn reload(&mut self);
    /// Update the setup screen's connect URL text. The scannable code is
    /// regenerated only when asked, on entry into the setup screen.
    fn show_connect_info(&mut self, connect_url: &str, regenerate_code: bool);
    /// Show the load-failure indicator without hiding the surface, so
    /// whatever the page already rendered stays inspectable.
    fn show_load_failure(&mut self);
    fn clear_load_failure(&mut self);
}

/// Trait for outbound reachability probes. This abstraction allows
/// mocking in tests.
pub trait ConnectivityProbe {
    fn has_internet(&self) -> bool;
    fn local_address(&self) -> Option<IpAddr>;
}

/// Surface used until a real embedded webview is wired in: logs every
/// command and reports navigations as immediately successful.
pub struct HeadlessSurface {
    event_tx: std_mpsc::Sender<SurfaceEvent>,
}

impl HeadlessSurface {
    pub fn new(event_tx: std_mpsc::Sender<SurfaceEvent>) -> Self {
        Self { event_tx }
    }
}

impl DisplaySurface for HeadlessSurface {
    fn show_screen(&mut self, screen: Screen) {
        tracing::info!("Showing screen {:?}", screen);
    }

    fn navigate(&mut self, url: &str) {
        tracing::info!("Navigating to {}", url);
        if self.event_tx.send(SurfaceEvent::LoadFinished { ok: true }).is_err() {
            tracing::debug!("Surface event receiver gone");
        }
    }

    fn set_zoom(&mut self, factor: f64) {
        tracing::info!("Zoom factor set to {}", factor);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        tracing::info!("Cursor visible: {}", visible);
    }

    fn reload(&mut self) {
        tracing::info!("Reloading current page");
        if self.event_tx.send(SurfaceEvent::LoadFinished { ok: true }).is_err() {
            tracing::debug!("Surface event receiver gone");
        }
    }

    fn show_connect_info(&mut self, connect_url: &str, regenerate_code: bool) {
        tracing::info!(
            "Setup connect URL: {} (regenerate code: {})",
            connect_url,
            regenerate_code
        );
    }

    fn show_load_failure(&mut self) {
        tracing::warn!("Page failed to load");
    }

    fn clear_load_failure(&mut self) {}
}
