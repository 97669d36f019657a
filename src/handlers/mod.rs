//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<AppState>` 로 주입된 서비스에 작업을 위임하고,
//! 실패는 [`AppError`](crate::errors::AppError) 로 돌려 HTTP 응답으로 변환되게 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, UI)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - RateLimitMiddleware (/kyber)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - ExchangeService, UiRenderer
//! ├─────────────────────────────────────────────┤
//!   Kyber API / UI 파일 시스템
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`kyber`] - `POST /kyber` 인가 코드 교환
//! - [`ui`] - 정적 파일 및 `index.html` 폴백

pub mod kyber;
pub mod ui;
