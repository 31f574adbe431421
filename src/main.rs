//! HTTP server for the shift roster generator.
//!
//! Environment:
//! - `SHIFT_ROSTER_CONFIG`: scheduler YAML (default `config/scheduler.yaml`)
//! - `SHIFT_ROSTER_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `SHIFT_ROSTER_RECORDS`: employee record file (default `employee.json`)
//! - `SHIFT_ROSTER_SELECTION`: remembered selection file (default `employee_selection.json`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;

use shift_roster::api::{AppState, create_router};
use shift_roster::config::ConfigLoader;
use shift_roster::store::{DEFAULT_RECORD_FILE, DEFAULT_SELECTION_FILE, EmployeeStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/scheduler.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;

    let config_path =
        env::var("SHIFT_ROSTER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let addr = env::var("SHIFT_ROSTER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let records_path =
        env::var("SHIFT_ROSTER_RECORDS").unwrap_or_else(|_| DEFAULT_RECORD_FILE.to_string());
    let selection_path =
        env::var("SHIFT_ROSTER_SELECTION").unwrap_or_else(|_| DEFAULT_SELECTION_FILE.to_string());

    let loader = ConfigLoader::load(&config_path)?;
    info!(
        config = %config_path,
        stores = loader.config().stores.len(),
        slots = loader.config().slot_count(),
        "Configuration loaded"
    );

    info!(records = %records_path, selection = %selection_path, "Using employee storage");
    let state =
        AppState::new(loader).with_storage(EmployeeStore::new(&records_path), &selection_path);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() -> Result<(), BoxError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("info")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}
