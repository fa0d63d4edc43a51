use crate::platform::{ConnectivityProbe, DisplaySurface};
use crate::screen::Screen;

/// Side effects a reconciliation tick wants applied to the display
/// surface. Kept as plain data so the tick stays a pure state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowConnectInfo { regenerate_code: bool },
    Navigate(String),
    SetZoom(f64),
    SetCursorVisible(bool),
    Reload,
    SwitchScreen(Screen),
}

/// Execute side effects against the display surface. `ShowConnectInfo`
/// resolves the local address at execution time; if resolution fails the
/// setup screen keeps its previous text.
pub fn execute_effects<S: DisplaySurface, P: ConnectivityProbe>(
    effects: Vec<Effect>,
    surface: &mut S,
    probe: &P,
    settings_port: u16,
) {
    for effect in effects {
        match effect {
            Effect::ShowConnectInfo { regenerate_code } => match probe.local_address() {
                Some(addr) => {
                    let connect_url = format!("http://{}:{}", addr, settings_port);
                    surface.show_connect_info(&connect_url, regenerate_code);
                }
                None => {
                    tracing::debug!("Local address not resolvable yet");
                }
            },
            Effect::Navigate(url) => {
                tracing::info!("Loading URL: {}", url);
                surface.navigate(&url);
            }
            Effect::SetZoom(factor) => surface.set_zoom(factor),
            Effect::SetCursorVisible(visible) => surface.set_cursor_visible(visible),
            Effect::Reload => surface.reload(),
            Effect::SwitchScreen(screen) => surface.show_screen(screen),
        }
    }
}
