use anyhow::{Context, Result};
use histai_functions::config::Config;
use histai_functions::email::Mailer;
use histai_functions::handlers::{self, AppState};
use histai_functions::scheduler;
use histai_functions::store::SubmissionStore;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("histai_functions=info".parse()?),
        )
        .init();

    info!("Starting HistBench submission service");

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("failed to connect to Postgres")?;

    let store = Arc::new(SubmissionStore::new(pool));
    store.init_schema().await?;

    let mailer = Arc::new(Mailer::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    )?);

    let _scheduler = scheduler::start_scheduler(
        &config.digest_cron,
        Arc::clone(&store),
        Arc::clone(&mailer),
        config.digest_recipient.clone(),
    )
    .await?;

    let app = handlers::build_router(AppState {
        store,
        mailer,
        digest_recipient: config.digest_recipient.clone(),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
