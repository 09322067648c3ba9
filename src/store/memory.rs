/// 인메모리 경매 기록 저장소
/// 고서별 Mutex로 입찰을 직렬화한다. 서로 다른 고서의 입찰은 경합하지 않는다.
// region:    --- Imports
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};

use super::{validate_new_book, AuctionStore};
use crate::auction::model::{AntiqueBook, Bid, NewAntiqueBook, NewBid, ResolvedBid};
use crate::error::AppError;

// endregion: --- Imports

// region:    --- Memory Auction Store
/// 고서 한 권의 기록 (원장 포함)
struct BookRecord {
    book: AntiqueBook,
    bids: Vec<Bid>,
}

/// 입찰자 신원
struct BidderIdentity {
    name: String,
    email: String,
}

pub struct MemoryAuctionStore {
    books: RwLock<HashMap<i64, Arc<Mutex<BookRecord>>>>,
    bidders: RwLock<HashMap<i64, BidderIdentity>>,
    next_book_id: AtomicI64,
    next_bid_id: AtomicI64,
    next_bidder_id: AtomicI64,
    min_window: chrono::Duration,
}

impl MemoryAuctionStore {
    pub fn new(min_window: chrono::Duration) -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            bidders: RwLock::new(HashMap::new()),
            next_book_id: AtomicI64::new(1),
            next_bid_id: AtomicI64::new(1),
            next_bidder_id: AtomicI64::new(1),
            min_window,
        }
    }

    async fn record(&self, book_id: i64) -> Option<Arc<Mutex<BookRecord>>> {
        self.books.read().await.get(&book_id).cloned()
    }
}

#[async_trait]
impl AuctionStore for MemoryAuctionStore {
    async fn insert_book(&self, new: NewAntiqueBook) -> Result<AntiqueBook, AppError> {
        validate_new_book(&new, self.min_window)?;
        let id = self.next_book_id.fetch_add(1, Ordering::Relaxed);
        let book = AntiqueBook {
            id,
            title: new.title,
            author: new.author,
            description: new.description,
            genre: new.genre,
            condition: new.condition,
            base_price: new.base_price,
            current_price: 0,
            auction_start: new.auction_start,
            auction_end: new.auction_end,
            owner_id: new.owner_id,
            created_at: Utc::now(),
        };
        self.books.write().await.insert(
            id,
            Arc::new(Mutex::new(BookRecord {
                book: book.clone(),
                bids: Vec::new(),
            })),
        );
        Ok(book)
    }

    async fn register_bidder(&self, name: &str, email: &str) -> Result<i64, AppError> {
        let id = self.next_bidder_id.fetch_add(1, Ordering::Relaxed);
        self.bidders.write().await.insert(
            id,
            BidderIdentity {
                name: name.to_string(),
                email: email.to_string(),
            },
        );
        Ok(id)
    }

    async fn list_books(&self) -> Result<Vec<AntiqueBook>, AppError> {
        let books = self.books.read().await;
        let mut out = Vec::with_capacity(books.len());
        for record in books.values() {
            out.push(record.lock().await.book.clone());
        }
        Ok(out)
    }

    async fn get_book(&self, book_id: i64) -> Result<Option<AntiqueBook>, AppError> {
        match self.record(book_id).await {
            Some(record) => Ok(Some(record.lock().await.book.clone())),
            None => Ok(None),
        }
    }

    async fn get_bid_history(&self, book_id: i64) -> Result<Vec<ResolvedBid>, AppError> {
        let Some(record) = self.record(book_id).await else {
            return Ok(Vec::new());
        };
        let record = record.lock().await;
        let bidders = self.bidders.read().await;

        let mut history: Vec<ResolvedBid> = record
            .bids
            .iter()
            .map(|bid| {
                let identity = bidders.get(&bid.bidder_id);
                ResolvedBid {
                    id: bid.id,
                    bidder_id: bid.bidder_id,
                    bidder_name: identity
                        .map(|i| i.name.clone())
                        .unwrap_or_else(|| format!("bidder-{}", bid.bidder_id)),
                    bidder_email: identity.map(|i| i.email.clone()).unwrap_or_default(),
                    amount: bid.amount,
                    placed_at: bid.placed_at,
                }
            })
            .collect();
        history.sort_by(|a, b| a.placed_at.cmp(&b.placed_at).then(a.id.cmp(&b.id)));
        Ok(history)
    }

    async fn find_bid_by_key(&self, book_id: i64, key: &str) -> Result<Option<Bid>, AppError> {
        let Some(record) = self.record(book_id).await else {
            return Ok(None);
        };
        let record = record.lock().await;
        Ok(record
            .bids
            .iter()
            .find(|bid| bid.idempotency_key.as_deref() == Some(key))
            .cloned())
    }

    async fn append_bid_if_price(
        &self,
        book_id: i64,
        expected_price: i64,
        bid: NewBid,
    ) -> Result<Option<Bid>, AppError> {
        let Some(record) = self.record(book_id).await else {
            return Ok(None);
        };
        let mut record = record.lock().await;

        // 다른 입찰이 먼저 반영된 경우: 아무것도 변경하지 않는다
        if record.book.current_price != expected_price {
            return Ok(None);
        }

        let placed = Bid {
            id: self.next_bid_id.fetch_add(1, Ordering::Relaxed),
            book_id,
            bidder_id: bid.bidder_id,
            amount: bid.amount,
            placed_at: bid.placed_at,
            idempotency_key: bid.idempotency_key,
        };
        record.book.current_price = placed.amount;
        record.bids.push(placed.clone());
        Ok(Some(placed))
    }
}
// endregion: --- Memory Auction Store
