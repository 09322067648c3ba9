// region:    --- Imports
use std::sync::Arc;

use antique_auction_service::config::Config;
use antique_auction_service::database::DatabaseManager;
use antique_auction_service::handlers;
use antique_auction_service::store::pg::PgAuctionStore;
use antique_auction_service::store::AuctionStore;
use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = Arc::new(Config::load());

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new(&config).await);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 경매 기록 저장소 생성
    let store: Arc<dyn AuctionStore> = Arc::new(PgAuctionStore::new(db_manager, &config));

    // 폴링 클라이언트를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::router(store, Arc::clone(&config))
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024 * 20));

    // 리스너 생성
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
