// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auction::model::AntiqueBook;
use crate::auction::status::{resolve_status, AuctionStatus};

// endregion: --- Imports

// region:    --- Partition
/// 단계별로 분할된 경매 목록
#[derive(Debug, Serialize)]
pub struct PartitionedAuctions {
    pub upcoming: Vec<AntiqueBook>,
    pub active: Vec<AntiqueBook>,
    pub ended: Vec<AntiqueBook>,
}

/// 경매 목록 분할
/// upcoming: 시작 임박순, active: 종료 임박순, ended: 최근 종료순
pub fn partition_books(books: Vec<AntiqueBook>, now: DateTime<Utc>) -> PartitionedAuctions {
    let mut upcoming = Vec::new();
    let mut active = Vec::new();
    let mut ended = Vec::new();

    for book in books {
        match resolve_status(now, book.auction_start, book.auction_end) {
            AuctionStatus::Upcoming => upcoming.push(book),
            AuctionStatus::Active => active.push(book),
            AuctionStatus::Ended => ended.push(book),
        }
    }

    upcoming.sort_by(|a, b| a.auction_start.cmp(&b.auction_start));
    active.sort_by(|a, b| a.auction_end.cmp(&b.auction_end));
    ended.sort_by(|a, b| b.auction_end.cmp(&a.auction_end));

    PartitionedAuctions {
        upcoming,
        active,
        ended,
    }
}
// endregion: --- Partition

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::BookCondition;
    use chrono::Duration;

    fn book(id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> AntiqueBook {
        AntiqueBook {
            id,
            title: format!("고서 {id}"),
            author: "미상".to_string(),
            description: "분할 테스트용".to_string(),
            genre: "역사".to_string(),
            condition: BookCondition::Fair,
            base_price: 1000,
            current_price: 0,
            auction_start: start,
            auction_end: end,
            owner_id: 1,
            created_at: start - Duration::days(1),
        }
    }

    #[test]
    fn every_book_lands_in_exactly_one_partition() {
        let now = Utc::now();
        let books = vec![
            book(1, now + Duration::hours(2), now + Duration::hours(4)),
            book(2, now - Duration::hours(1), now + Duration::hours(1)),
            book(3, now - Duration::hours(4), now - Duration::hours(2)),
            book(4, now + Duration::hours(1), now + Duration::hours(3)),
            book(5, now - Duration::hours(2), now + Duration::hours(2)),
            book(6, now - Duration::hours(6), now - Duration::hours(4)),
        ];
        let total = books.len();

        let partitioned = partition_books(books, now);
        let mut ids: Vec<i64> = partitioned
            .upcoming
            .iter()
            .chain(partitioned.active.iter())
            .chain(partitioned.ended.iter())
            .map(|b| b.id)
            .collect();
        ids.sort_unstable();

        assert_eq!(ids.len(), total);
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn partitions_are_sorted_for_display() {
        let now = Utc::now();
        let books = vec![
            book(1, now + Duration::hours(2), now + Duration::hours(4)),
            book(2, now + Duration::hours(1), now + Duration::hours(3)),
            book(3, now - Duration::hours(1), now + Duration::hours(2)),
            book(4, now - Duration::hours(1), now + Duration::hours(1)),
            book(5, now - Duration::hours(4), now - Duration::hours(2)),
            book(6, now - Duration::hours(3), now - Duration::hours(1)),
        ];

        let partitioned = partition_books(books, now);

        // upcoming은 시작 임박순
        let upcoming_ids: Vec<i64> = partitioned.upcoming.iter().map(|b| b.id).collect();
        assert_eq!(upcoming_ids, vec![2, 1]);

        // active는 종료 임박순
        let active_ids: Vec<i64> = partitioned.active.iter().map(|b| b.id).collect();
        assert_eq!(active_ids, vec![4, 3]);

        // ended는 최근 종료순
        let ended_ids: Vec<i64> = partitioned.ended.iter().map(|b| b.id).collect();
        assert_eq!(ended_ids, vec![6, 5]);
    }

    #[test]
    fn boundary_instant_partitions_as_active() {
        let now = Utc::now();
        let starts_now = book(1, now, now + Duration::hours(2));
        let ends_now = book(2, now - Duration::hours(2), now);

        let partitioned = partition_books(vec![starts_now, ends_now], now);
        assert_eq!(partitioned.active.len(), 2);
        assert!(partitioned.upcoming.is_empty());
        assert!(partitioned.ended.is_empty());
    }
}
// endregion: --- Tests
