use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use catalog::config::{AppConfig, Config, LogFormat, StorageBackend};
use catalog::middleware::{ErrorHandler, RequestId};
use catalog::products::repositories::{in_memory_product_repository, mysql_product_repository};
use catalog::products::{ProductRepository, ProductService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting product catalog");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Storage backend: {}", config.storage);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repository = build_repository(&config).await?;
    let service = web::Data::new(ProductService::new(repository));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(catalog::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(app)));
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Filter used when RUST_LOG is unset: LOG_LEVEL for the crate, info for actix
fn default_directives(app: &AppConfig) -> String {
    format!("catalog={},actix_web=info", app.log_level)
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<ProductRepository>> {
    match config.storage {
        StorageBackend::Memory => Ok(in_memory_product_repository(Vec::new())),
        StorageBackend::MySql => {
            let pool = config
                .database
                .create_pool()
                .await
                .context("Failed to create database pool")?;

            tracing::info!(
                "Database pool initialized ({}-{} connections)",
                config.database.pool_size,
                config.database.max_connections
            );

            if config.database.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            Ok(mysql_product_repository(pool))
        }
    }
}
