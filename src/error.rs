// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Store Error

/// 저장소 오류 타입
#[derive(Debug, Error)]
pub enum StoreError {
    /// 요청한 식별자와 일치하는 경매가 없음
    #[error("경매를 찾을 수 없습니다.")]
    NotFound,

    /// 쓰기 작업이 어떤 레코드에도 반영되지 않음
    #[error("데이터베이스에 변경 사항을 저장할 수 없습니다.")]
    PersistenceFailure,

    /// 그 외 저장소 계층 오류는 그대로 전파
    #[error("데이터베이스 오류: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound => "NOT_FOUND",
            StoreError::PersistenceFailure => "PERSISTENCE_FAILURE",
            StoreError::Database(_) => "DATABASE_ERROR",
        }
    }
}

/// 오류를 HTTP 응답으로 변환
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::PersistenceFailure => StatusCode::BAD_REQUEST,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(serde_json::json!({
                "error": self.to_string(),
                "code": self.code(),
            })),
        )
            .into_response()
    }
}

// endregion: --- Store Error
