// region:    --- Imports
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::partition::{partition_books, PartitionedAuctions};
use crate::auction::model::{AntiqueBook, ResolvedBid};
use crate::auction::status::{resolve_status, AuctionStatus};
use crate::error::AppError;
use crate::store::AuctionStore;

// endregion: --- Imports

// region:    --- Query Handlers
/// 경매 상세 (단계, 표시 가격, 신원 해석된 입찰 이력 포함)
#[derive(Debug, Serialize)]
pub struct AuctionDetail {
    pub book: AntiqueBook,
    pub status: AuctionStatus,
    pub display_price: i64,
    pub bidding_history: Vec<ResolvedBid>,
}

/// 단계별 경매 목록 조회
pub async fn list_partitioned(store: &dyn AuctionStore) -> Result<PartitionedAuctions, AppError> {
    info!("{:<12} --> 단계별 경매 목록 조회", "Query");
    let books = store.list_books().await?;
    Ok(partition_books(books, Utc::now()))
}

/// 경매 상세 조회
pub async fn get_auction_detail(
    store: &dyn AuctionStore,
    book_id: i64,
) -> Result<AuctionDetail, AppError> {
    info!("{:<12} --> 경매 상세 조회 id: {}", "Query", book_id);
    let book = store
        .get_book(book_id)
        .await?
        .ok_or(AppError::BookNotFound(book_id))?;
    let bidding_history = store.get_bid_history(book_id).await?;
    let status = resolve_status(Utc::now(), book.auction_start, book.auction_end);
    let display_price = book.display_price();

    Ok(AuctionDetail {
        book,
        status,
        display_price,
        bidding_history,
    })
}

/// 입찰 이력 조회
pub async fn get_bid_history(
    store: &dyn AuctionStore,
    book_id: i64,
) -> Result<Vec<ResolvedBid>, AppError> {
    info!("{:<12} --> 입찰 이력 조회 id: {}", "Query", book_id);
    store
        .get_book(book_id)
        .await?
        .ok_or(AppError::BookNotFound(book_id))?;
    store.get_bid_history(book_id).await
}
// endregion: --- Query Handlers
