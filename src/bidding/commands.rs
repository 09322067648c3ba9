/// 입찰 커맨드 처리
/// 조회-검증-원장 추가-가격 갱신을 고서 단위 원자 단위로 수행한다.
// region:    --- Imports
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auction::model::{Bid, NewBid};
use crate::bidding::validate::{validate_bid, BidPolicy};
use crate::error::AppError;
use crate::store::AuctionStore;

// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub book_id: i64,
    pub bidder_id: i64,
    pub bid_amount: i64,
    /// 재전송 안전을 위한 선택적 멱등 키
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// 수락된 입찰과 갱신된 현재 가격
#[derive(Debug, Serialize)]
pub struct BidAccepted {
    pub bid: Bid,
    pub current_price: i64,
}

// 최대 재시도 횟수
const MAX_RETRIES: i32 = 100;

/// 입찰 처리
/// 현재 가격 CAS가 실패하면(동시 입찰 경합) 최신 상태로 재검증 후 재시도한다.
pub async fn handle_place_bid(
    cmd: PlaceBidCommand,
    store: &dyn AuctionStore,
    policy: &BidPolicy,
) -> Result<BidAccepted, AppError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);
    let mut retries = 0;

    while retries < MAX_RETRIES {
        // 고서 조회
        let book = store
            .get_book(cmd.book_id)
            .await?
            .ok_or(AppError::BookNotFound(cmd.book_id))?;

        // 멱등 키 재전송이면 기존 입찰을 그대로 반환
        if let Some(key) = &cmd.idempotency_key {
            if let Some(existing) = store.find_bid_by_key(cmd.book_id, key).await? {
                info!(
                    "{:<12} --> 멱등 키 재전송 감지: bid id {}",
                    "Command", existing.id
                );
                return Ok(BidAccepted {
                    current_price: book.current_price.max(existing.amount),
                    bid: existing,
                });
            }
        }

        let now = Utc::now();

        // 서버 기준 권위 검증 (클라이언트 판정은 신뢰하지 않는다)
        validate_bid(&book, cmd.bid_amount, now, policy)?;

        // 방금 읽은 가격을 기대값으로 원장 추가
        let appended = store
            .append_bid_if_price(
                cmd.book_id,
                book.current_price,
                NewBid {
                    bidder_id: cmd.bidder_id,
                    amount: cmd.bid_amount,
                    placed_at: now,
                    idempotency_key: cmd.idempotency_key.clone(),
                },
            )
            .await?;

        match appended {
            Some(bid) => {
                info!(
                    "{:<12} --> 입찰 수락: book {} 현재 가격 {}",
                    "Command", cmd.book_id, bid.amount
                );
                return Ok(BidAccepted {
                    current_price: bid.amount,
                    bid,
                });
            }
            None => {
                warn!("{:<12} --> 낙관적 갱신 경합: 재시도", "Command");
                retries += 1;
                continue;
            }
        }
    }

    Err(AppError::RetriesExhausted)
}
// endregion: --- Commands
