/// 고서 출품 등록
pub const INSERT_BOOK: &str = r#"
    INSERT INTO antique_books
        (title, author, description, genre, condition, base_price, current_price,
         auction_start, auction_end, owner_id, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, 0, $7, $8, $9, $10)
    RETURNING *
"#;

/// 입찰자 신원 등록
pub const UPSERT_BIDDER: &str = r#"
    INSERT INTO bidders (name, email)
    VALUES ($1, $2)
    ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
    RETURNING id
"#;

/// 전체 고서 조회
pub const LIST_BOOKS: &str = "SELECT * FROM antique_books ORDER BY created_at DESC";

/// 고서 단건 조회
pub const GET_BOOK: &str = "SELECT * FROM antique_books WHERE id = $1";

/// 입찰 이력 조회 (원장 순서, 신원 해석 포함)
pub const GET_BID_HISTORY: &str = r#"
    SELECT b.id, b.bidder_id, u.name AS bidder_name, u.email AS bidder_email,
           b.amount, b.placed_at
    FROM bids b
    JOIN bidders u ON u.id = b.bidder_id
    WHERE b.book_id = $1
    ORDER BY b.placed_at ASC, b.id ASC
"#;

/// 멱등 키로 기존 입찰 조회
pub const FIND_BID_BY_KEY: &str =
    "SELECT * FROM bids WHERE book_id = $1 AND idempotency_key = $2";

/// 현재 가격 CAS 갱신
pub const CAS_UPDATE_PRICE: &str =
    "UPDATE antique_books SET current_price = $1 WHERE id = $2 AND current_price = $3";

/// 입찰 기록 추가
pub const INSERT_BID: &str = r#"
    INSERT INTO bids (book_id, bidder_id, amount, placed_at, idempotency_key)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING *
"#;
