/// 경매 저장소
/// 경매와 소유 물품에 대한 생성/조회/수정/삭제 단일 연산 제공
// region:    --- Imports
use crate::auction::dto::{CreateAuction, UpdateAuction};
use crate::auction::model::{Auction, AuctionRow};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub mod queries;

// endregion: --- Imports

// region:    --- Auction Store Trait

/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore {
    async fn list_all(&self) -> Result<Vec<Auction>, StoreError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Auction, StoreError>;
    async fn create(&self, input: CreateAuction) -> Result<Auction, StoreError>;
    async fn update(&self, id: Uuid, partial: UpdateAuction) -> Result<Auction, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

// endregion: --- Auction Store Trait

// region:    --- Postgres Auction Store

/// 경매 저장소 구현체
pub struct PgAuctionStore {
    db: Arc<DatabaseManager>,
    seller: String,
}

impl PgAuctionStore {
    /// 경매 저장소 생성
    /// seller: 경매 생성 시 기록되는 판매자 식별자
    /// TODO: 인증 서비스 연동 후 요청자 신원으로 대체
    pub fn new(db: Arc<DatabaseManager>, seller: String) -> Self {
        Self { db, seller }
    }
}

#[async_trait]
impl AuctionStore for PgAuctionStore {
    /// 경매 전체 조회 (물품 제조사 오름차순)
    async fn list_all(&self) -> Result<Vec<Auction>, StoreError> {
        info!("{:<12} --> 경매 전체 조회", "Store");
        let rows = sqlx::query_as::<_, AuctionRow>(queries::LIST_AUCTIONS)
            .fetch_all(self.db.pool())
            .await?;

        let mut auctions = Vec::with_capacity(rows.len());
        for row in rows {
            auctions.push(Auction::try_from(row)?);
        }
        Ok(auctions)
    }

    /// 경매 단건 조회
    async fn get_by_id(&self, id: Uuid) -> Result<Auction, StoreError> {
        info!("{:<12} --> 경매 조회 id: {}", "Store", id);
        let row = sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(Auction::try_from(row)?)
    }

    /// 경매 생성
    /// 경매와 물품을 하나의 트랜잭션으로 저장
    async fn create(&self, input: CreateAuction) -> Result<Auction, StoreError> {
        let auction = input.into_auction(self.seller.clone());
        info!("{:<12} --> 경매 생성 id: {}", "Store", auction.id);

        let a = auction.clone();
        self.db
            .transaction(|tx| {
                Box::pin(async move {
                    let result = sqlx::query(queries::INSERT_AUCTION)
                        .bind(a.id)
                        .bind(a.reserve_price)
                        .bind(&a.seller)
                        .bind(&a.winner)
                        .bind(a.sold_amount)
                        .bind(a.current_high_bid)
                        .bind(a.created_at)
                        .bind(a.updated_at)
                        .bind(a.auction_end)
                        .bind(a.status.as_str())
                        .execute(&mut **tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::PersistenceFailure);
                    }

                    let result = sqlx::query(queries::INSERT_ITEM)
                        .bind(a.id)
                        .bind(&a.item.make)
                        .bind(&a.item.model)
                        .bind(a.item.year)
                        .bind(&a.item.color)
                        .bind(a.item.mileage)
                        .bind(&a.item.image_url)
                        .execute(&mut **tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::PersistenceFailure);
                    }

                    Ok(())
                })
            })
            .await?;

        Ok(auction)
    }

    /// 경매 부분 수정
    /// 존재하는 필드만 반영하고 수정 시각을 갱신
    async fn update(&self, id: Uuid, partial: UpdateAuction) -> Result<Auction, StoreError> {
        info!("{:<12} --> 경매 수정 id: {}", "Store", id);
        let mut auction = self.get_by_id(id).await?;

        // TODO: 인증 연동 후 판매자 본인 확인 추가
        partial.apply_to(&mut auction.item);
        auction.updated_at = Utc::now();

        let a = auction.clone();
        self.db
            .transaction(|tx| {
                Box::pin(async move {
                    let result = sqlx::query(queries::UPDATE_ITEM)
                        .bind(a.id)
                        .bind(&a.item.make)
                        .bind(&a.item.model)
                        .bind(a.item.year)
                        .bind(&a.item.color)
                        .bind(a.item.mileage)
                        .execute(&mut **tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::PersistenceFailure);
                    }

                    let result = sqlx::query(queries::TOUCH_AUCTION)
                        .bind(a.id)
                        .bind(a.updated_at)
                        .execute(&mut **tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::PersistenceFailure);
                    }

                    Ok(())
                })
            })
            .await?;

        Ok(auction)
    }

    /// 경매 삭제 (물품은 소유 관계에 따라 함께 삭제)
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        info!("{:<12} --> 경매 삭제 id: {}", "Store", id);
        self.get_by_id(id).await?;

        let result = sqlx::query(queries::DELETE_AUCTION)
            .bind(id)
            .execute(self.db.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::PersistenceFailure);
        }

        Ok(())
    }
}

// endregion: --- Postgres Auction Store
