use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bioterio::adapters::postgres;
use bioterio::app::{Application, Storage};
use bioterio::application::handlers::RegisterUserCommand;
use bioterio::config::{AppConfig, ServerConfig, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let storage = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            Storage::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            Storage::in_memory()
        }
    };

    let app = Application::build(storage, &config);

    if let Some((email, password)) = config.auth.bootstrap_account() {
        let cmd = RegisterUserCommand {
            email: email.to_string(),
            password: password.clone(),
        };
        if let Some(account) = app.register_user.ensure_bootstrap(cmd).await? {
            tracing::info!(email = account.email(), "Seeded bootstrap account");
        }
    }

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "bioterio listening");

    axum::serve(listener, app.router).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
