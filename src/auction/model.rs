use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// region:    --- Status

/// 경매 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "FINISHED")]
    Finished,
    #[serde(rename = "RESERVE_NOT_MET")]
    ReserveNotMet,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "LIVE",
            Status::Finished => "FINISHED",
            Status::ReserveNotMet => "RESERVE_NOT_MET",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "LIVE" => Some(Status::Live),
            "FINISHED" => Some(Status::Finished),
            "RESERVE_NOT_MET" => Some(Status::ReserveNotMet),
            _ => None,
        }
    }
}

// endregion: --- Status

// region:    --- Models

// 경매 물품 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

// 경매 모델 (물품 포함)
#[derive(Debug, Clone, Serialize)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: Status,
    pub item: Item,
}

/// auctions ⋈ items 조인 결과 행
#[derive(Debug, FromRow)]
pub struct AuctionRow {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = sqlx::Error;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let status = Status::parse(&row.status)
            .ok_or_else(|| sqlx::Error::Protocol(format!("알 수 없는 경매 상태: {}", row.status)))?;

        Ok(Auction {
            id: row.id,
            reserve_price: row.reserve_price,
            seller: row.seller,
            winner: row.winner,
            sold_amount: row.sold_amount,
            current_high_bid: row.current_high_bid,
            created_at: row.created_at,
            updated_at: row.updated_at,
            auction_end: row.auction_end,
            status,
            item: Item {
                make: row.make,
                model: row.model,
                year: row.year,
                color: row.color,
                mileage: row.mileage,
                image_url: row.image_url,
            },
        })
    }
}

// endregion: --- Models
