use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 경매 진행 단계
/// 저장되지 않으며 항상 시각으로부터 유도된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    Upcoming,
    Active,
    Ended,
}

/// 경매 단계 판정
/// 시작/종료 경계 시각은 Active로 판정한다.
pub fn resolve_status(
    now: DateTime<Utc>,
    auction_start: DateTime<Utc>,
    auction_end: DateTime<Utc>,
) -> AuctionStatus {
    if now < auction_start {
        AuctionStatus::Upcoming
    } else if now > auction_end {
        AuctionStatus::Ended
    } else {
        AuctionStatus::Active
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        (start, start + Duration::hours(2))
    }

    #[test]
    fn resolves_upcoming_before_start() {
        let (start, end) = window();
        assert_eq!(
            resolve_status(start - Duration::seconds(1), start, end),
            AuctionStatus::Upcoming
        );
    }

    #[test]
    fn boundary_instants_resolve_active() {
        let (start, end) = window();
        assert_eq!(resolve_status(start, start, end), AuctionStatus::Active);
        assert_eq!(resolve_status(end, start, end), AuctionStatus::Active);
    }

    #[test]
    fn resolves_active_inside_window() {
        let (start, end) = window();
        assert_eq!(
            resolve_status(start + Duration::minutes(30), start, end),
            AuctionStatus::Active
        );
    }

    #[test]
    fn resolves_ended_just_after_end() {
        let (start, end) = window();
        assert_eq!(
            resolve_status(end + Duration::milliseconds(1), start, end),
            AuctionStatus::Ended
        );
    }
}
// endregion: --- Tests
