// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::bidding::validate::RejectReason;

// endregion: --- Imports

// region:    --- App Error
/// 서비스 오류 분류
/// 입찰 거절은 업무 결과, 나머지는 클라이언트 오류 또는 시스템 장애다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("경매 고서를 찾을 수 없습니다: {0}")]
    BookNotFound(i64),

    #[error("{0}")]
    BidRejected(#[from] RejectReason),

    #[error("시작가는 0보다 커야 합니다.")]
    InvalidBasePrice,

    #[error("경매 기간은 최소 {min_hours}시간 이상이어야 합니다.")]
    WindowTooShort { min_hours: i64 },

    #[error("최대 재시도 횟수를 초과했습니다. 잠시 후 다시 시도해 주세요.")]
    RetriesExhausted,

    #[error("데이터베이스 오류: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BookNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::BidRejected(reason) => (StatusCode::BAD_REQUEST, reason.code()),
            AppError::InvalidBasePrice => (StatusCode::BAD_REQUEST, "INVALID_BASE_PRICE"),
            AppError::WindowTooShort { .. } => (StatusCode::BAD_REQUEST, "WINDOW_TOO_SHORT"),
            AppError::RetriesExhausted => {
                (StatusCode::SERVICE_UNAVAILABLE, "MAX_RETRIES_EXCEEDED")
            }
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let mut body = serde_json::json!({
            "error": self.to_string(),
            "code": code,
        });

        // 최소 허용가는 별도 필드로 함께 내려준다
        if let AppError::BidRejected(RejectReason::BelowMinimum { minimum_acceptable }) = &self {
            body["minimum_acceptable"] = serde_json::json!(minimum_acceptable);
        }

        (status, Json(body)).into_response()
    }
}
// endregion: --- App Error
