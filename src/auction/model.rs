use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 경매 대상 고서 모델
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AntiqueBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub condition: BookCondition,
    pub base_price: i64,
    pub current_price: i64,
    pub auction_start: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl AntiqueBook {
    /// 표시 가격. current_price 0은 입찰 없음을 뜻하므로 시작가로 대체한다.
    pub fn display_price(&self) -> i64 {
        if self.current_price == 0 {
            self.base_price
        } else {
            self.current_price
        }
    }
}

// 고서 보존 상태 (출품 시 고정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum BookCondition {
    Mint,
    #[serde(rename = "Near Mint")]
    #[sqlx(rename = "Near Mint")]
    NearMint,
    Excellent,
    #[serde(rename = "Very Good")]
    #[sqlx(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
}

// 입찰 모델 (기록 후 불변)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub book_id: i64,
    pub bidder_id: i64,
    pub amount: i64,
    pub placed_at: DateTime<Utc>,
    pub idempotency_key: Option<String>,
}

// 입찰자 신원이 해석된 입찰 기록 (상세 조회용)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResolvedBid {
    pub id: i64,
    pub bidder_id: i64,
    pub bidder_name: String,
    pub bidder_email: String,
    pub amount: i64,
    pub placed_at: DateTime<Utc>,
}

// 신규 고서 출품 (외부 출품/승인 흐름에서 유입)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAntiqueBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub condition: BookCondition,
    pub base_price: i64,
    pub auction_start: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub owner_id: i64,
}

// 신규 입찰 (저장소 CAS 단위로 전달)
#[derive(Debug, Clone)]
pub struct NewBid {
    pub bidder_id: i64,
    pub amount: i64,
    pub placed_at: DateTime<Utc>,
    pub idempotency_key: Option<String>,
}
