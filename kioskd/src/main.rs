mod app;
mod config;
mod effect;
mod net;
mod platform;
mod reconcile;
mod screen;
mod server;
mod shared;

use anyhow::Result;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kioskd - kiosk-mode web dashboard controller
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Start(StartCmd),
    Version(VersionCmd),
}

/// Start the display controller
#[derive(FromArgs)]
#[argh(subcommand, name = "start")]
struct StartCmd {}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    match cli.command {
        Some(SubCommand::Version(_)) => {
            println!("kioskd {}", VERSION);
            Ok(())
        }
        // No subcommand means start: the binary is launched bare by an
        // init system or session autostart.
        None | Some(SubCommand::Start(_)) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();

            tracing::info!("kioskd starting");
            app::App::run()
        }
    }
}
