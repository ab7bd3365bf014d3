/// 경매 전체 조회 (물품 제조사 오름차순)
pub const LIST_AUCTIONS: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.make, i.model, i.year, i.color, i.mileage, i.image_url
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    ORDER BY i.make ASC
"#;

/// 경매 단건 조회
pub const GET_AUCTION: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.make, i.model, i.year, i.color, i.mileage, i.image_url
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    WHERE a.id = $1
"#;

/// 경매 저장
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (id, reserve_price, seller, winner, sold_amount, current_high_bid,
                          created_at, updated_at, auction_end, status)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

/// 경매 물품 저장
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (auction_id, make, model, year, color, mileage, image_url)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

/// 경매 물품 수정
pub const UPDATE_ITEM: &str =
    "UPDATE items SET make = $2, model = $3, year = $4, color = $5, mileage = $6 WHERE auction_id = $1";

/// 경매 수정 시각 갱신
pub const TOUCH_AUCTION: &str = "UPDATE auctions SET updated_at = $2 WHERE id = $1";

/// 경매 삭제 (물품은 소유 관계에 따라 함께 삭제)
pub const DELETE_AUCTION: &str = "DELETE FROM auctions WHERE id = $1";
