mod config;
mod error;
mod map_embed;
mod models;
mod routes;
mod store;
mod views;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::Config;
use store::InviteStore;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub store: InviteStore,
    pub config: Arc<Config>,
}

#[derive(Parser)]
#[command(about = "Create and share event invitations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store = InviteStore::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    store.migrate().await.expect("failed to run migrations");

    if matches!(cli.command, Some(Command::Migrate)) {
        tracing::info!("migrations applied");
        return;
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };
    let app = routes::router(state);

    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
