use std::sync::mpsc as std_mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::ConfigStore;
use crate::effect::execute_effects;
use crate::net::NetProbe;
use crate::platform::{ConnectivityProbe, DisplaySurface, HeadlessSurface, SurfaceEvent};
use crate::reconcile::Reconciler;
use crate::screen::{select_screen, Screen};
use crate::server;
use crate::shared::SettingsCell;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct App {}

impl App {
    pub fn run() -> Result<()> {
        let store = ConfigStore::default_location();
        let cell = SettingsCell::new(store.load());
        tracing::info!("Loaded configuration from {:?}", store.path());

        // The settings server gets its own thread and runtime; the primary
        // thread keeps ownership of the display surface.
        {
            let cell = cell.clone();
            let store = store.clone();
            std::thread::spawn(move || match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(async move {
                    if let Err(e) = server::serve(cell, store, server::SETTINGS_PORT).await {
                        tracing::error!("Settings server error: {}", e);
                    }
                }),
                Err(e) => tracing::error!("Failed to start tokio runtime: {}", e),
            });
        }

        let (surface_event_tx, surface_event_rx) = std_mpsc::channel::<SurfaceEvent>();
        let surface = HeadlessSurface::new(surface_event_tx);

        let app = App {};
        app.run_main_loop(surface, NetProbe, cell, surface_event_rx)
    }

    fn run_main_loop<S: DisplaySurface, P: ConnectivityProbe>(
        self,
        mut surface: S,
        probe: P,
        cell: SettingsCell,
        surface_event_rx: std_mpsc::Receiver<SurfaceEvent>,
    ) -> Result<()> {
        tracing::info!("Starting reconciliation loop");

        let mut reconciler = Reconciler::new();
        let mut next_tick = Instant::now();

        loop {
            run_tick(&mut reconciler, &cell, &mut surface, &probe);
            next_tick += TICK_INTERVAL;

            // Service surface events until the next tick is due. Load
            // completion arrives here, not on the tick.
            loop {
                let now = Instant::now();
                if now >= next_tick {
                    break;
                }
                match surface_event_rx.recv_timeout(next_tick - now) {
                    Ok(event) => handle_surface_event(event, &mut surface),
                    Err(std_mpsc::RecvTimeoutError::Timeout) => break,
                    Err(std_mpsc::RecvTimeoutError::Disconnected) => {
                        std::thread::sleep(next_tick.saturating_duration_since(Instant::now()));
                        break;
                    }
                }
            }
        }
    }
}

/// One reconciliation tick: read the shared settings, probe connectivity,
/// and apply the resulting deltas to the surface.
fn run_tick<S: DisplaySurface, P: ConnectivityProbe>(
    reconciler: &mut Reconciler,
    cell: &SettingsCell,
    surface: &mut S,
    probe: &P,
) {
    let config = cell.get();
    let has_internet = probe.has_internet();

    // The changed flag is only consumed when the dashboard is the target;
    // a change posted while another screen is up keeps the flag raised and
    // forces a reload once the dashboard comes back.
    let changed =
        select_screen(&config.url, has_internet) == Screen::Dashboard && cell.take_changed();

    let effects = reconciler.tick(&config, changed, has_internet);
    execute_effects(effects, surface, probe, server::SETTINGS_PORT);
}

fn handle_surface_event<S: DisplaySurface>(event: SurfaceEvent, surface: &mut S) {
    match event {
        SurfaceEvent::LoadFinished { ok: true } => {
            tracing::debug!("Page load finished");
            surface.clear_load_failure();
        }
        SurfaceEvent::LoadFinished { ok: false } => {
            tracing::warn!("Page load failed");
            surface.show_load_failure();
        }
    }
}
