/// Postgres 경매 기록 저장소
/// 입찰 반영은 트랜잭션 안에서 현재 가격 조건부 UPDATE(CAS) + 원장 INSERT로 처리한다.
// region:    --- Imports
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::{queries, validate_new_book, AuctionStore};
use crate::auction::model::{AntiqueBook, Bid, NewAntiqueBook, NewBid, ResolvedBid};
use crate::config::Config;
use crate::database::DatabaseManager;
use crate::error::AppError;

// endregion: --- Imports

// region:    --- Pg Auction Store
pub struct PgAuctionStore {
    db: Arc<DatabaseManager>,
    min_window: chrono::Duration,
}

impl PgAuctionStore {
    pub fn new(db: Arc<DatabaseManager>, config: &Config) -> Self {
        Self {
            db,
            min_window: config.min_auction_window(),
        }
    }
}

#[async_trait]
impl AuctionStore for PgAuctionStore {
    async fn insert_book(&self, new: NewAntiqueBook) -> Result<AntiqueBook, AppError> {
        validate_new_book(&new, self.min_window)?;
        info!("{:<12} --> 고서 출품 등록: {}", "Store", new.title);
        let book: Result<AntiqueBook, sqlx::Error> = self
            .db
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, AntiqueBook>(queries::INSERT_BOOK)
                        .bind(&new.title)
                        .bind(&new.author)
                        .bind(&new.description)
                        .bind(&new.genre)
                        .bind(new.condition)
                        .bind(new.base_price)
                        .bind(new.auction_start)
                        .bind(new.auction_end)
                        .bind(new.owner_id)
                        .bind(Utc::now())
                        .fetch_one(&mut **tx)
                        .await
                })
            })
            .await;
        Ok(book?)
    }

    async fn register_bidder(&self, name: &str, email: &str) -> Result<i64, AppError> {
        let name = name.to_string();
        let email = email.to_string();
        let id: Result<i64, sqlx::Error> = self
            .db
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_scalar::<_, i64>(queries::UPSERT_BIDDER)
                        .bind(&name)
                        .bind(&email)
                        .fetch_one(&mut **tx)
                        .await
                })
            })
            .await;
        Ok(id?)
    }

    async fn list_books(&self) -> Result<Vec<AntiqueBook>, AppError> {
        let books = sqlx::query_as::<_, AntiqueBook>(queries::LIST_BOOKS)
            .fetch_all(&*self.db.get_pool())
            .await?;
        Ok(books)
    }

    async fn get_book(&self, book_id: i64) -> Result<Option<AntiqueBook>, AppError> {
        let book = sqlx::query_as::<_, AntiqueBook>(queries::GET_BOOK)
            .bind(book_id)
            .fetch_optional(&*self.db.get_pool())
            .await?;
        Ok(book)
    }

    async fn get_bid_history(&self, book_id: i64) -> Result<Vec<ResolvedBid>, AppError> {
        let bids = sqlx::query_as::<_, ResolvedBid>(queries::GET_BID_HISTORY)
            .bind(book_id)
            .fetch_all(&*self.db.get_pool())
            .await?;
        Ok(bids)
    }

    async fn find_bid_by_key(&self, book_id: i64, key: &str) -> Result<Option<Bid>, AppError> {
        let bid = sqlx::query_as::<_, Bid>(queries::FIND_BID_BY_KEY)
            .bind(book_id)
            .bind(key)
            .fetch_optional(&*self.db.get_pool())
            .await?;
        Ok(bid)
    }

    async fn append_bid_if_price(
        &self,
        book_id: i64,
        expected_price: i64,
        bid: NewBid,
    ) -> Result<Option<Bid>, AppError> {
        let appended: Result<Option<Bid>, sqlx::Error> = self
            .db
            .transaction(|tx| {
                Box::pin(async move {
                    let updated = sqlx::query(queries::CAS_UPDATE_PRICE)
                        .bind(bid.amount)
                        .bind(book_id)
                        .bind(expected_price)
                        .execute(&mut **tx)
                        .await?;

                    // 다른 입찰이 먼저 반영된 경우: 아무것도 변경하지 않는다
                    if updated.rows_affected() == 0 {
                        return Ok(None);
                    }

                    let row = sqlx::query_as::<_, Bid>(queries::INSERT_BID)
                        .bind(book_id)
                        .bind(bid.bidder_id)
                        .bind(bid.amount)
                        .bind(bid.placed_at)
                        .bind(&bid.idempotency_key)
                        .fetch_one(&mut **tx)
                        .await?;
                    Ok(Some(row))
                })
            })
            .await;
        Ok(appended?)
    }
}
// endregion: --- Pg Auction Store
