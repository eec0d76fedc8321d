//! coursehub entry-point: loads configuration and the course catalogue, then
//! serves the HTTP API.

mod server;

use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use actix_web::web;
use coursehub::inbound::http::health::HealthState;
use coursehub::inbound::http::session_config::{BuildMode, session_settings_from_env};
use coursehub::outbound::catalogue::load_catalogue_seed;
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    let bind_addr = settings.bind_addr()?;
    let administrators = settings.admin_ids()?;
    let catalogue_path = settings.catalogue_path();
    let courses = load_catalogue_seed(&catalogue_path)
        .wrap_err_with(|| format!("failed to load catalogue from {}", catalogue_path.display()))?;

    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_catalogue(courses)
    .with_administrators(administrators);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "coursehub listening");
    server.await?;
    Ok(())
}
