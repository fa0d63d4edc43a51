use crate::config::Configuration;
use crate::effect::Effect;
use crate::screen::{select_screen, Screen};

/// The loop's record of what the display surface was last told. It tracks
/// applied values, never the desired configuration, which is what makes
/// delta-only updates possible. `None` means never applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedState {
    pub url: Option<String>,
    pub zoom: Option<f64>,
    pub cursor_visible: Option<bool>,
}

/// Computes the effects for one reconciliation tick.
pub struct Reconciler {
    applied: AppliedState,
    active: Option<Screen>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            applied: AppliedState::default(),
            active: None,
        }
    }

    pub fn active_screen(&self) -> Option<Screen> {
        self.active
    }

    pub fn applied(&self) -> &AppliedState {
        &self.applied
    }

    /// One tick: select the target screen and emit the minimal effects to
    /// get the surface there.
    ///
    /// `changed` is the one-shot settings flag; the caller must only
    /// consume it from the cell when the dashboard is the target, so a
    /// change posted while another screen is up still forces a reload once
    /// the dashboard comes back. A set flag yields exactly one `Reload`
    /// even when no individual field differs.
    pub fn tick(&mut self, config: &Configuration, changed: bool, has_internet: bool) -> Vec<Effect> {
        let target = select_screen(&config.url, has_internet);
        let mut effects = Vec::new();

        if target == Screen::Setup {
            // Regenerate the scannable code only on entry, not every tick.
            effects.push(Effect::ShowConnectInfo {
                regenerate_code: self.active != Some(Screen::Setup),
            });
        }

        if target == Screen::Dashboard {
            if self.applied.url.as_deref() != Some(config.url.as_str()) {
                effects.push(Effect::Navigate(config.url.clone()));
                self.applied.url = Some(config.url.clone());
            }
            if self.applied.zoom != Some(config.zoom) {
                effects.push(Effect::SetZoom(config.zoom));
                self.applied.zoom = Some(config.zoom);
            }
            if self.applied.cursor_visible != Some(config.show_cursor) {
                effects.push(Effect::SetCursorVisible(config.show_cursor));
                self.applied.cursor_visible = Some(config.show_cursor);
            }
            if changed {
                effects.push(Effect::Reload);
            }
        }

        // Switching is idempotent and never resets the applied snapshot.
        if self.active != Some(target) {
            effects.push(Effect::SwitchScreen(target));
            self.active = Some(target);
        }

        effects
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}
