//! API 라우트 설정 모듈
//!
//! 엣지 서비스의 모든 엔드포인트를 한 곳에서 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/kyber` - Kyber 인가 코드 교환 (전역 Rate Limit 적용, 하위 경로와 모든 메서드 포함)
//! - 그 외 모든 경로 - UI 정적 파일 또는 설정이 주입된 `index.html`
//!
//! # Rate Limit Middleware Usage
//!
//! Rate Limit 은 `/kyber` 스코프에만 적용됩니다. 헬스체크와 UI 요청은
//! 토큰을 소비하지 않습니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/kyber")
//!         .wrap(RateLimitMiddleware::new(state.limiter.clone()))
//!         .route("", web::to(handlers::kyber::exchange))
//!         .default_service(web::to(handlers::kyber::exchange))
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let state = web::Data::new(AppState::build(&config, &network, &latest_commit)?);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, state.clone()));
//! ```

use crate::core::AppState;
use crate::handlers;
use crate::middlewares::RateLimitMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `state` - 핸들러에 주입될 애플리케이션 상태
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let limiter = state.limiter.clone();

    cfg.app_data(state);

    // Health check endpoint
    cfg.service(health_check);

    configure_kyber_routes(cfg, RateLimitMiddleware::new(limiter));

    // 나머지 경로는 전부 UI 가 처리
    cfg.default_service(web::to(handlers::ui::serve_ui));
}

/// Kyber OAuth 라우트를 설정합니다
///
/// `/kyber` 와 그 하위 경로의 요청은 메서드와 관계없이 리미터를 거쳐
/// 교환 핸들러로 갑니다. UI 폴백으로 빠지지 않습니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:3000/kyber \
///   -H "Content-Type: application/json" \
///   -d '{"code":"abc","redirect_uri":"https://app/cb","client_id":"id1"}'
/// ```
fn configure_kyber_routes(cfg: &mut web::ServiceConfig, rate_limit: RateLimitMiddleware) {
    cfg.service(
        web::scope("/kyber")
            .wrap(rate_limit)
            .route("", web::to(handlers::kyber::exchange))
            .default_service(web::to(handlers::kyber::exchange))
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "renex_edge",
///   "version": "0.1.0",
///   "network": "testnet",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "network": state.network,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
