/// 경매 생성/수정 요청 모델
// region:    --- Imports
use crate::auction::model::{Auction, Item, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Create

/// 경매 생성 명령
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuction {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    #[serde(default)]
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
}

impl CreateAuction {
    /// 새 경매 생성 (식별자 및 타임스탬프 부여, 상태는 LIVE)
    pub fn into_auction(self, seller: String) -> Auction {
        let now = Utc::now();
        Auction {
            id: Uuid::new_v4(),
            reserve_price: self.reserve_price,
            seller,
            winner: None,
            sold_amount: None,
            current_high_bid: None,
            created_at: now,
            updated_at: now,
            auction_end: self.auction_end,
            status: Status::Live,
            item: Item {
                make: self.make,
                model: self.model,
                year: self.year,
                color: self.color,
                mileage: self.mileage,
                image_url: self.image_url,
            },
        }
    }
}

// endregion: --- Create

// region:    --- Update

/// 경매 부분 수정 명령
/// 생략된 필드는 기존 값 유지
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAuction {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

impl UpdateAuction {
    /// 존재하는 필드만 물품에 반영
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(make) = &self.make {
            item.make = make.clone();
        }
        if let Some(model) = &self.model {
            item.model = model.clone();
        }
        if let Some(year) = self.year {
            item.year = year;
        }
        if let Some(color) = &self.color {
            item.color = color.clone();
        }
        if let Some(mileage) = self.mileage {
            item.mileage = mileage;
        }
    }
}

// endregion: --- Update
