//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. Rate Limit 미들웨어 (RateLimitMiddleware)
//! - 공유 `governor` 리미터 기반 Admission 판단
//! - 거부 시 `429 Too Many Requests` + `too many requests` 본문
//! - 대기열/지연 없음
//!
//! # 사용 방법
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let limiter = build_limiter(&RateLimitConfig::default())?;
//!
//! App::new()
//!     .service(
//!         web::scope("/kyber")
//!             .wrap(RateLimitMiddleware::new(limiter.clone()))
//!             .route("", web::post().to(handlers::kyber::exchange))
//!     )
//! ```

pub mod rate_limit_middleware;
mod rate_limit_inner;

// 미들웨어 재export
pub use rate_limit_middleware::RateLimitMiddleware;
