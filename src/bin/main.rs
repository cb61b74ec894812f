use std::{env, fs};

use financial_helper_server::{
    auth::{password_hasher::Argon2PasswordHasher, token_service::JwtTokenService},
    config::Config,
    db_utils::create_schema,
    server,
    store::DbConnStore,
    utils::date_time_provider::CoreTimeProvider,
};
use log::info;
use sea_orm::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = serde_json::from_str::<Config>(&fs::read_to_string("config.json")?)?;
    let time_provider = CoreTimeProvider::new_dyn();

    let db = Database::connect(env::var("DATABASE_URL")?).await?;
    create_schema(&db).await?;

    let token_key = env::var("TOKEN_SYMMETRIC_KEY")?;
    let token_svc = JwtTokenService::new_dyn(
        token_key.as_bytes(),
        time_provider.clone(),
        config.token_svc_config,
    )?;

    let store = DbConnStore::new_dyn(db, time_provider.clone());
    let app_state = server::build_state(
        store,
        token_svc,
        Argon2PasswordHasher::new_dyn(),
        time_provider,
        config.pagination,
    );

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Listening on {}", config.server_address);
    axum::serve(listener, server::router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Could not listen for shutdown signal: {}", err);
    }
    info!("Shutting down");
}
