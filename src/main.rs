use reactions_api::{
    application::{
        notify_like::dispatcher::NotificationDispatcher, toggle_like::use_case::ToggleLikeUseCase,
        view_reactions::use_case::ViewReactionsUseCase,
    },
    config::Config,
    infrastructure::{
        database::pool::create_pool,
        notifications::sqlx_activity_service::SqlxActivityService,
        repositories::{
            sqlx_like_repository::SqlxLikeRepository, sqlx_post_repository::SqlxPostRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::RolePermissionGate,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging with safe environment filter
    // Uses RUST_LOG if set, otherwise uses sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,reactions_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let like_store = Arc::new(SqlxLikeRepository::new(db.clone()));
    let posts = Arc::new(SqlxPostRepository::new(db.clone()));
    let activity = Arc::new(SqlxActivityService::new(
        db.clone(),
        config.notify_popup_default,
        config.notify_email_default,
    ));

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        posts: posts.clone(),
        users: Arc::new(SqlxUserRepository::new(db.clone())),
        permission_gate: Arc::new(RolePermissionGate),
        toggle_like: Arc::new(ToggleLikeUseCase::new(like_store.clone())),
        view_reactions: Arc::new(ViewReactionsUseCase::new(like_store, posts)),
        dispatcher: Arc::new(NotificationDispatcher::new(activity)),
    };

    // Configure CORS with security in mind
    // In production, specify explicit allowed origins from config
    let cors = if cfg!(debug_assertions) {
        // Development: allow any origin
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        // Production: restrict to configured origins
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(vec![]))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    };

    let app = create_router(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("reactions api listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
