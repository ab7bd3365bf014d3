// region:    --- Imports
use crate::auction::dto::{CreateAuction, UpdateAuction};
use crate::store::{AuctionStore, PgAuctionStore};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Handlers

/// 경매 전체 조회
pub async fn handle_list_auctions(State(store): State<Arc<PgAuctionStore>>) -> impl IntoResponse {
    info!("{:<12} --> 경매 전체 조회", "Handler");
    match store.list_all().await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 경매 단건 조회
pub async fn handle_get_auction(
    State(store): State<Arc<PgAuctionStore>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    match store.get_by_id(id).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 경매 생성
pub async fn handle_create_auction(
    State(store): State<Arc<PgAuctionStore>>,
    Json(input): Json<CreateAuction>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 생성 요청: {:?}", "Handler", input);
    match store.create(input).await {
        Ok(auction) => {
            let location = format!("/api/auctions/{}", auction.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(auction),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// 경매 부분 수정
pub async fn handle_update_auction(
    State(store): State<Arc<PgAuctionStore>>,
    Path(id): Path<Uuid>,
    Json(partial): Json<UpdateAuction>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 수정 요청 id: {}: {:?}", "Handler", id, partial);
    match store.update(id, partial).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 경매 삭제
pub async fn handle_delete_auction(
    State(store): State<Arc<PgAuctionStore>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 삭제 요청 id: {}", "Handler", id);
    match store.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "경매가 삭제되었습니다.",
                "id": id,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Handlers
