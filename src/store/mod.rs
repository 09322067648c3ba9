// region:    --- Imports
use async_trait::async_trait;

use crate::auction::model::{AntiqueBook, Bid, NewAntiqueBook, NewBid, ResolvedBid};
use crate::error::AppError;

pub mod memory;
pub mod pg;
mod queries;

// endregion: --- Imports

// region:    --- Auction Store Trait
/// 경매 기록 저장소
/// 입찰 원장과 현재 가격은 append_bid_if_price의 CAS 단위로만 변경된다.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 고서 출품 등록 (외부 출품/승인 흐름에서 유입)
    async fn insert_book(&self, new: NewAntiqueBook) -> Result<AntiqueBook, AppError>;

    /// 입찰자 신원 등록 (외부 신원 공급자로부터 유입)
    async fn register_bidder(&self, name: &str, email: &str) -> Result<i64, AppError>;

    /// 전체 고서 조회
    async fn list_books(&self) -> Result<Vec<AntiqueBook>, AppError>;

    /// 고서 단건 조회
    async fn get_book(&self, book_id: i64) -> Result<Option<AntiqueBook>, AppError>;

    /// 입찰 이력 조회 (placed_at 오름차순, 신원 해석 포함)
    async fn get_bid_history(&self, book_id: i64) -> Result<Vec<ResolvedBid>, AppError>;

    /// 멱등 키로 기존 입찰 조회
    async fn find_bid_by_key(&self, book_id: i64, key: &str) -> Result<Option<Bid>, AppError>;

    /// 현재 가격이 기대값과 일치할 때만 입찰을 추가하고 가격을 갱신한다.
    /// 불일치(동시 입찰 경합) 시 None을 반환하고 아무것도 변경하지 않는다.
    async fn append_bid_if_price(
        &self,
        book_id: i64,
        expected_price: i64,
        bid: NewBid,
    ) -> Result<Option<Bid>, AppError>;
}
// endregion: --- Auction Store Trait

// region:    --- Validation
/// 출품 데이터 검증 (시작가, 최소 경매 기간)
pub(crate) fn validate_new_book(
    new: &NewAntiqueBook,
    min_window: chrono::Duration,
) -> Result<(), AppError> {
    if new.base_price <= 0 {
        return Err(AppError::InvalidBasePrice);
    }
    if new.auction_end - new.auction_start < min_window {
        return Err(AppError::WindowTooShort {
            min_hours: min_window.num_hours(),
        });
    }
    Ok(())
}
// endregion: --- Validation
