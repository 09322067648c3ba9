// region:    --- Imports
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::auction::model::ResolvedBid;
use crate::bidding::commands::{handle_place_bid, PlaceBidCommand};
use crate::config::Config;
use crate::error::AppError;
use crate::query;
use crate::query::handlers::AuctionDetail;
use crate::query::partition::PartitionedAuctions;
use crate::store::AuctionStore;

// endregion: --- Imports

/// 핸들러 공유 상태
pub type AppState = (Arc<dyn AuctionStore>, Arc<Config>);

/// 라우터 구성 (서버와 테스트가 공유)
pub fn router(store: Arc<dyn AuctionStore>, config: Arc<Config>) -> Router {
    Router::new()
        .route("/bid", post(handle_bid))
        .route("/auctions", get(handle_list_auctions))
        .route("/auctions/:id", get(handle_get_auction_detail))
        .route("/auctions/:id/bids", get(handle_get_bid_history))
        .with_state((store, config))
}

// region:    --- Command Handlers

/// 입찰 요청 처리
async fn handle_bid(
    State((store, config)): State<AppState>,
    Json(cmd): Json<PlaceBidCommand>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("{:<12} --> 입찰 요청: {:?}", "Handler", cmd);
    let accepted = handle_place_bid(cmd, store.as_ref(), &config.bid_policy()).await?;
    Ok(Json(serde_json::json!({
        "message": "입찰이 성공적으로 처리되었습니다.",
        "bid": accepted.bid,
        "current_price": accepted.current_price,
    })))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 단계별 경매 목록 조회
async fn handle_list_auctions(
    State((store, _)): State<AppState>,
) -> Result<Json<PartitionedAuctions>, AppError> {
    info!("{:<12} --> 경매 목록 요청", "Handler");
    let partitioned = query::handlers::list_partitioned(store.as_ref()).await?;
    Ok(Json(partitioned))
}

/// 경매 상세 조회
async fn handle_get_auction_detail(
    State((store, _)): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<Json<AuctionDetail>, AppError> {
    info!("{:<12} --> 경매 상세 요청 id: {}", "Handler", book_id);
    let detail = query::handlers::get_auction_detail(store.as_ref(), book_id).await?;
    Ok(Json(detail))
}

/// 입찰 이력 조회
async fn handle_get_bid_history(
    State((store, _)): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<Json<Vec<ResolvedBid>>, AppError> {
    info!("{:<12} --> 입찰 이력 요청 id: {}", "Handler", book_id);
    let history = query::handlers::get_bid_history(store.as_ref(), book_id).await?;
    Ok(Json(history))
}

// endregion: --- Query Handlers
