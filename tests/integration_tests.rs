use auction_store::database::DatabaseManager;
use auction_store::store::{AuctionStore, PgAuctionStore};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// 데이터베이스 매니저 설정
async fn setup() -> Arc<DatabaseManager> {
    Arc::new(DatabaseManager::new().await.expect("데이터베이스 연결 실패"))
}

/// 테스트 서버 주소
fn base_url() -> String {
    std::env::var("TEST_SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// 테스트용 경매 생성 요청 본문
fn car_payload(make: &str, model: &str, color: &str, mileage: i32, year: i32) -> Value {
    json!({
        "make": make,
        "model": model,
        "year": year,
        "color": color,
        "mileage": mileage,
        "image_url": "https://example.com/car.jpg",
        "reserve_price": 20000,
        "auction_end": (Utc::now() + Duration::days(7)).to_rfc3339(),
    })
}

/// 경매 생성 후 응답 본문 반환
async fn create_auction(client: &Client, payload: &Value) -> Value {
    let response = client
        .post(format!("{}/api/auctions", base_url()))
        .json(payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    response.json().await.expect("응답 본문 파싱 실패")
}

/// 경매 생성 테스트
#[tokio::test]
async fn test_create_auction() {
    let client = Client::new();
    let payload = car_payload("Ford", "Mustang", "Red", 15000, 2020);

    let response = client
        .post(format!("{}/api/auctions", base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    // Location 헤더에 생성된 경매 경로가 있어야 한다
    let location = response
        .headers()
        .get("location")
        .expect("Location 헤더 없음")
        .to_str()
        .unwrap()
        .to_string();

    let body: Value = response.json().await.expect("응답 본문 파싱 실패");
    let id = body["id"].as_str().expect("생성된 id 없음");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(location, format!("/api/auctions/{}", id));

    assert_eq!(body["item"]["make"], "Ford");
    assert_eq!(body["item"]["model"], "Mustang");
    assert_eq!(body["item"]["color"], "Red");
    assert_eq!(body["item"]["mileage"], 15000);
    assert_eq!(body["item"]["year"], 2020);
    assert_eq!(body["status"], "LIVE");
    assert_eq!(body["reserve_price"], 20000);
}

/// 생성할 때마다 새로운 식별자가 부여된다
#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let client = Client::new();
    let payload = car_payload("Kia", "EV6", "White", 100, 2023);

    let first = create_auction(&client, &payload).await;
    let second = create_auction(&client, &payload).await;

    assert_ne!(first["id"], second["id"]);
}

/// 경매 단건 조회 테스트
#[tokio::test]
async fn test_get_auction_by_id() {
    let client = Client::new();
    let created = create_auction(&client, &car_payload("Bugatti", "Veyron", "Black", 1500, 2018)).await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .get(format!("{}/api/auctions/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("응답 본문 파싱 실패");

    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["item"]["make"], "Bugatti");
    assert_eq!(body["item"]["model"], "Veyron");
    assert_eq!(body["item"]["color"], "Black");
    assert_eq!(body["item"]["mileage"], 1500);
    assert_eq!(body["item"]["year"], 2018);
}

/// 존재하지 않는 경매 조회는 404
#[tokio::test]
async fn test_get_missing_auction_returns_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/auctions/{}", base_url(), Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

/// 부분 수정 테스트: 색상만 변경하면 나머지 필드는 유지된다
#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let client = Client::new();
    let created = create_auction(&client, &car_payload("Ford", "GT", "Red", 15000, 2020)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/api/auctions/{}", base_url(), id))
        .json(&json!({ "color": "Blue" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("응답 본문 파싱 실패");

    assert_eq!(body["item"]["make"], "Ford");
    assert_eq!(body["item"]["model"], "GT");
    assert_eq!(body["item"]["color"], "Blue");
    assert_eq!(body["item"]["mileage"], 15000);
    assert_eq!(body["item"]["year"], 2020);

    // 수정 시각이 갱신되어야 한다
    let created_at = DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap()).unwrap();
    let updated_at = DateTime::parse_from_rfc3339(body["updated_at"].as_str().unwrap()).unwrap();
    assert!(updated_at > created_at);
}

/// 모든 필드가 생략된 부분 수정은 물품을 변경하지 않는다
#[tokio::test]
async fn test_update_with_empty_body_changes_nothing() {
    let client = Client::new();
    let created = create_auction(&client, &car_payload("Mazda", "MX-5", "Silver", 30000, 2019)).await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .put(format!("{}/api/auctions/{}", base_url(), id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("응답 본문 파싱 실패");

    assert_eq!(body["item"], created["item"]);
}

/// 존재하지 않는 경매 수정은 404
#[tokio::test]
async fn test_update_missing_auction_returns_not_found() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/auctions/{}", base_url(), Uuid::new_v4()))
        .json(&json!({ "color": "Blue" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

/// 삭제 후 조회는 404, 물품도 함께 삭제된다
#[tokio::test]
async fn test_delete_then_get_returns_not_found() {
    let db_manager = setup().await;
    let client = Client::new();
    let created = create_auction(&client, &car_payload("Lada", "Niva", "Green", 80000, 1995)).await;
    let id = created["id"].as_str().unwrap().to_string();
    let auction_id = Uuid::parse_str(&id).unwrap();

    let response = client
        .delete(format!("{}/api/auctions/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .get(format!("{}/api/auctions/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    // 같은 경매를 다시 삭제하면 404
    let response = client
        .delete(format!("{}/api/auctions/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    // 소유 물품 행도 함께 삭제되었는지 확인
    let item_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE auction_id = $1")
            .bind(auction_id)
            .fetch_one(db_manager.pool())
            .await
            .unwrap();
    assert_eq!(item_count, 0);
}

/// 전체 조회는 물품 제조사 오름차순으로 정렬된다
#[tokio::test]
async fn test_list_sorted_by_make() {
    let client = Client::new();

    // 정렬 확인을 위해 제조사 순서를 뒤섞어 생성
    create_auction(&client, &car_payload("Porsche", "911", "Yellow", 5000, 2021)).await;
    create_auction(&client, &car_payload("Audi", "Q5", "Gray", 22000, 2019)).await;
    create_auction(&client, &car_payload("Mercedes", "C300", "Blue", 18000, 2020)).await;

    let response = client
        .get(format!("{}/api/auctions", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("응답 본문 파싱 실패");
    let auctions = body.as_array().expect("배열이 아님");
    assert!(auctions.len() >= 3);

    let makes: Vec<&str> = auctions
        .iter()
        .map(|a| a["item"]["make"].as_str().unwrap())
        .collect();
    assert!(makes.windows(2).all(|w| w[0] <= w[1]));
}

/// 저장소를 직접 사용하는 조회 테스트
#[tokio::test]
async fn test_store_get_by_id_matches_created() {
    let db_manager = setup().await;
    let store = PgAuctionStore::new(Arc::clone(&db_manager), "test".to_string());

    let client = Client::new();
    let created = create_auction(&client, &car_payload("Volvo", "XC90", "White", 41000, 2017)).await;
    let id = Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();

    let auction = store.get_by_id(id).await.expect("경매 조회 실패");
    assert_eq!(auction.item.make, "Volvo");
    assert_eq!(auction.item.model, "XC90");
    assert_eq!(auction.seller, "test");
}
