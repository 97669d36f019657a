//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 설정 값으로 한 번 생성되고 `AppState` 를 통해 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - Kyber OAuth 인가 코드 → 액세스 토큰 → 사용자 정보 교환
//! - `/kyber` 엔드포인트용 공유 Rate Limiter (`governor`)
//! - UI 정적 자산 해석 및 런타임 설정 주입
//!
//! # Examples
//!
//! ```rust,ignore
//! use renex_edge::services::kyber::{ExchangeService, KyberClient};
//!
//! let client = KyberClient::new(&config.kyber)?;
//! let exchange = ExchangeService::new(client, config.kyber.secret.clone());
//! let user_info = exchange.exchange(&raw_body).await?;
//! ```

pub mod kyber;
pub mod rate_limit;
pub mod ui;
