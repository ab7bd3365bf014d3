// region:    --- Imports
use crate::database::DatabaseManager;
use crate::store::PgAuctionStore;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Modules
mod auction;
mod database;
mod error;
mod handlers;
mod store;

// endregion: --- Modules

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // DatabaseManager 생성
    let db_manager = match DatabaseManager::new().await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Main", e);
            return Err(e.into());
        }
    };

    // 데이터베이스 초기화 (AUCTION_RESET_DB=1 이면 기존 테이블 삭제 후 재생성)
    let reset = std::env::var("AUCTION_RESET_DB").map(|v| v == "1").unwrap_or(false);
    let init_result = if reset {
        db_manager.recreate_database().await
    } else {
        db_manager.initialize_database().await
    };
    if let Err(e) = init_result {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 판매자 식별자 설정
    // TODO: 인증 서비스 연동 후 요청자 신원으로 대체
    let seller = std::env::var("AUCTION_SELLER").unwrap_or_else(|_| "test".to_string());

    // 경매 저장소 생성
    let store = Arc::new(PgAuctionStore::new(Arc::clone(&db_manager), seller));

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = Router::new()
        .route(
            "/api/auctions",
            get(handlers::handle_list_auctions).post(handlers::handle_create_auction),
        )
        .route(
            "/api/auctions/:id",
            get(handlers::handle_get_auction)
                .put(handlers::handle_update_auction)
                .delete(handlers::handle_delete_auction),
        )
        .layer(cors)
        .with_state(store);

    // 리스너 생성
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
