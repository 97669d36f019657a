//! RenEx 엣지 서비스
//!
//! 브라우저 UI 를 제공하고, Kyber OAuth 인가 코드 교환을 대행하는
//! Rust 기반 HTTP 서비스입니다. 서버 시크릿은 이 서비스만 알고 있으며
//! 브라우저에는 절대 노출되지 않습니다.
//!
//! # Features
//!
//! - **OAuth 교환 프록시**: 인가 코드 → 액세스 토큰 → 사용자 정보
//! - **Rate Limiting**: `/kyber` 전역 `governor` 리미터 (초당 3, 버스트 20)
//! - **UI 제공**: 정적 파일 + 런타임 설정이 주입된 `index.html`
//! - **명시적 DI**: `web::Data<AppState>` 로 컴포넌트 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /kyber, UI
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← Rate Limit (/kyber)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 교환 절차, Rate Limiter, UI 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Kyber API / FS  │ ← 외부 의존성
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use renex_edge::config::{AppConfig, NetworkConfig};
//! use renex_edge::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let network = NetworkConfig::load(&config.server.network_config_path())?;
//! let state = AppState::build(&config, &network, "deadbeef")?;
//!
//! let user_info = state.exchange.exchange(br#"{"code":"abc"}"#).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
