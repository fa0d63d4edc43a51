use anyhow::Result;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::config::{ConfigStore, Configuration, DEFAULT_ZOOM};
use crate::shared::SettingsCell;

/// Port for the companion settings page, served on all interfaces.
pub const SETTINGS_PORT: u16 = 8080;

const FORM_TEMPLATE: &str = include_str!("settings.html");

#[derive(Clone)]
struct ServerContext {
    cell: SettingsCell,
    store: ConfigStore,
}

/// Form-encoded settings submission. `zoom` arrives as text and is coerced
/// separately; `show_cursor` is a checkbox and encoded by presence.
#[derive(Debug, Deserialize)]
struct SettingsForm {
    #[serde(default)]
    url: String,
    #[serde(default)]
    zoom: Option<String>,
    #[serde(default)]
    show_cursor: Option<String>,
}

impl SettingsForm {
    fn into_configuration(self) -> Configuration {
        Configuration {
            url: self.url,
            zoom: parse_zoom(self.zoom.as_deref()),
            show_cursor: self.show_cursor.is_some(),
        }
    }
}

/// Numeric coercion with the documented fallback: an unparsable zoom
/// becomes 1.0 rather than rejecting the submission.
fn parse_zoom(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_ZOOM)
}

async fn show_form(State(ctx): State<ServerContext>) -> Html<String> {
    Html(render_form(&ctx.cell.get(), ""))
}

async fn submit_form(
    State(ctx): State<ServerContext>,
    Form(form): Form<SettingsForm>,
) -> Html<String> {
    let config = form.into_configuration();
    tracing::info!(
        "Settings updated: url={}, zoom={}, show_cursor={}",
        config.url,
        config.zoom,
        config.show_cursor
    );

    ctx.store.save(&config);
    ctx.cell.replace(config.clone());

    Html(render_form(&config, "Settings updated successfully!"))
}

fn render_form(config: &Configuration, message: &str) -> String {
    FORM_TEMPLATE
        .replace("{{url}}", &escape_attr(&config.url))
        .replace("{{zoom}}", &config.zoom.to_string())
        .replace("{{checked}}", if config.show_cursor { "checked" } else { "" })
        .replace("{{message}}", message)
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn router(cell: SettingsCell, store: ConfigStore) -> Router {
    let ctx = ServerContext { cell, store };
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .with_state(ctx)
}

pub async fn serve(cell: SettingsCell, store: ConfigStore, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Settings server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(cell, store)).await?;
    Ok(())
}
