//! Kyber OAuth 교환 서비스
//!
//! - [`kyber_client`] - 토큰 교환/사용자 정보 업스트림 호출
//! - [`exchange_service`] - 요청 단위 교환 오케스트레이션

pub mod kyber_client;
pub mod exchange_service;

pub use kyber_client::KyberClient;
pub use exchange_service::{ExchangeFailure, ExchangeService, ExchangeStage};
