use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use techtest_api::application::services::ApplicationServices;
use techtest_api::config::AppConfig;
use techtest_api::domain::{
    article::ArticleRepository, author::AuthorRepository, region::RegionRepository,
};
use techtest_api::infrastructure::{
    database,
    repositories::{SqliteArticleRepository, SqliteAuthorRepository, SqliteRegionRepository},
    seed,
};
use techtest_api::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    if std::env::args().nth(1).as_deref() == Some("seed") {
        let summary = seed::seed_demo_data(&pool).await?;
        println!(
            "seeded {} authors, {} articles, {} regions",
            summary.authors, summary.articles, summary.regions
        );
        return Ok(());
    }

    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(Arc::clone(&pool)));
    let region_repo: Arc<dyn RegionRepository> =
        Arc::new(SqliteRegionRepository::new(Arc::clone(&pool)));
    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(SqliteArticleRepository::new(Arc::clone(&pool)));

    let services = Arc::new(ApplicationServices::new(
        author_repo,
        region_repo,
        article_repo,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
