//! UnitFlow backend: fleet unit tracking with a movement audit ledger.
//!
//! The backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - movement engine, auth, aggregation
//! - **Data Layer** (`data/`) - repositories and entity-to-domain conversion
//! - **Model Layer** (`model/`) - domain models and operation parameters
//! - **DTO Layer** (`dto/`) - wire-format request/response types
//! - **Error Layer** (`error/`) - application errors and HTTP response mapping
//! - **Catalog** (`catalog`) - the closed department/section vocabulary

mod catalog;
mod config;
mod controller;
mod data;
mod dto;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("UnitFlow backend listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
