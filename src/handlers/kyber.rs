//! Kyber OAuth HTTP Handlers
//!
//! 인가 코드 교환 엔드포인트입니다. 요청 본문을 원본 바이트로 받아
//! [`ExchangeService`](crate::services::kyber::ExchangeService) 에 넘기고,
//! 사용자 정보를 받은 그대로 응답합니다.
//!
//! # Endpoint
//!
//! - `POST /kyber` - 인가 코드 → 사용자 정보 (Rate Limit 적용, `/kyber` 하위 경로 포함)
//!
//! # Examples
//!
//! ```bash
//! curl -X POST http://localhost:3000/kyber \
//!   -H "Content-Type: application/json" \
//!   -d '{"code":"abc","redirect_uri":"https://app/cb","client_id":"id1"}'
//! ```

use actix_web::{http::header::ContentType, web, HttpResponse};
use crate::core::AppState;
use crate::errors::AppError;

/// 인가 코드를 Kyber 사용자 정보로 교환합니다
///
/// # Returns
///
/// * `200 OK` - Kyber 사용자 정보 (재인코딩 없음)
/// * `400 Bad Request` - 본문 디코딩/직렬화 실패
/// * `500 Internal Server Error` - Kyber 통신 또는 응답 디코딩 실패
pub async fn exchange(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user_info = state.exchange.exchange(&body).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(user_info))
}
