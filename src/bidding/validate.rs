/// 입찰 검증 규칙
/// UI의 사전 안내와 서버의 권위 판정이 같은 함수를 사용한다.
// region:    --- Imports
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::auction::model::AntiqueBook;
use crate::auction::status::{resolve_status, AuctionStatus};

// endregion: --- Imports

// region:    --- Bid Policy
/// 입찰 정책
#[derive(Debug, Clone, Copy)]
pub struct BidPolicy {
    /// 최소 인상 단위 (루피)
    pub min_increment: i64,
}

impl Default for BidPolicy {
    fn default() -> Self {
        Self { min_increment: 100 }
    }
}
// endregion: --- Bid Policy

// region:    --- Reject Reason
/// 입찰 거절 사유 (사용자에게 그대로 노출되는 업무 결과)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("경매가 아직 시작되지 않았습니다.")]
    NotYetStarted,
    #[error("경매가 이미 종료되었습니다.")]
    AlreadyEnded,
    #[error("입찰 금액은 최소 {minimum_acceptable} 이상이어야 합니다.")]
    BelowMinimum { minimum_acceptable: i64 },
}

impl RejectReason {
    /// 클라이언트 분기용 오류 코드
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::NotYetStarted => "NOT_STARTED",
            RejectReason::AlreadyEnded => "ALREADY_ENDED",
            RejectReason::BelowMinimum { .. } => "LOW_BID",
        }
    }
}
// endregion: --- Reject Reason

// region:    --- Validation
/// 최소 허용 입찰가
pub fn minimum_acceptable(book: &AntiqueBook, policy: &BidPolicy) -> i64 {
    book.current_price.max(book.base_price) + policy.min_increment
}

/// 입찰 검증 (순수 함수, 부수 효과 없음)
pub fn validate_bid(
    book: &AntiqueBook,
    amount: i64,
    now: DateTime<Utc>,
    policy: &BidPolicy,
) -> Result<(), RejectReason> {
    match resolve_status(now, book.auction_start, book.auction_end) {
        AuctionStatus::Upcoming => return Err(RejectReason::NotYetStarted),
        AuctionStatus::Ended => return Err(RejectReason::AlreadyEnded),
        AuctionStatus::Active => {}
    }

    let minimum = minimum_acceptable(book, policy);
    if amount < minimum {
        return Err(RejectReason::BelowMinimum {
            minimum_acceptable: minimum,
        });
    }

    Ok(())
}
// endregion: --- Validation

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::BookCondition;
    use chrono::Duration;

    fn active_book(base_price: i64, current_price: i64) -> AntiqueBook {
        let now = Utc::now();
        AntiqueBook {
            id: 1,
            title: "활자본 시집".to_string(),
            author: "미상".to_string(),
            description: "검증 테스트용 고서".to_string(),
            genre: "시".to_string(),
            condition: BookCondition::Good,
            base_price,
            current_price,
            auction_start: now - Duration::hours(1),
            auction_end: now + Duration::hours(1),
            owner_id: 1,
            created_at: now - Duration::days(1),
        }
    }

    #[test]
    fn first_bid_floor_is_base_price() {
        let book = active_book(500, 0);
        assert_eq!(minimum_acceptable(&book, &BidPolicy::default()), 600);

        assert_eq!(
            validate_bid(&book, 599, Utc::now(), &BidPolicy::default()),
            Err(RejectReason::BelowMinimum {
                minimum_acceptable: 600
            })
        );
        assert_eq!(validate_bid(&book, 600, Utc::now(), &BidPolicy::default()), Ok(()));
    }

    #[test]
    fn floor_follows_current_price_after_first_bid() {
        let book = active_book(500, 600);
        assert_eq!(
            validate_bid(&book, 650, Utc::now(), &BidPolicy::default()),
            Err(RejectReason::BelowMinimum {
                minimum_acceptable: 700
            })
        );
        assert_eq!(validate_bid(&book, 700, Utc::now(), &BidPolicy::default()), Ok(()));
    }

    #[test]
    fn non_positive_amount_is_below_minimum() {
        let book = active_book(500, 0);
        assert!(matches!(
            validate_bid(&book, 0, Utc::now(), &BidPolicy::default()),
            Err(RejectReason::BelowMinimum { .. })
        ));
        assert!(matches!(
            validate_bid(&book, -10, Utc::now(), &BidPolicy::default()),
            Err(RejectReason::BelowMinimum { .. })
        ));
    }

    #[test]
    fn rejects_outside_active_window() {
        let mut book = active_book(500, 0);
        let now = Utc::now();

        book.auction_start = now + Duration::hours(1);
        book.auction_end = now + Duration::hours(3);
        assert_eq!(
            validate_bid(&book, 10_000, now, &BidPolicy::default()),
            Err(RejectReason::NotYetStarted)
        );

        book.auction_start = now - Duration::hours(3);
        book.auction_end = now - Duration::hours(1);
        assert_eq!(
            validate_bid(&book, 10_000, now, &BidPolicy::default()),
            Err(RejectReason::AlreadyEnded)
        );
    }

    #[test]
    fn custom_increment_changes_minimum() {
        let book = active_book(500, 0);
        let policy = BidPolicy { min_increment: 50 };
        assert_eq!(validate_bid(&book, 550, Utc::now(), &policy), Ok(()));
    }
}
// endregion: --- Tests
