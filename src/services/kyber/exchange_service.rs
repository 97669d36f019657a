//! # Kyber 인가 코드 교환 서비스
//!
//! 요청 단위 오케스트레이터입니다. 호출자 본문을 디코딩하고, 서버 시크릿을 첨부한 뒤
//! [`KyberClient`] 로 토큰 교환과 사용자 정보 조회를 순서대로 수행합니다.
//!
//! ## 요청 상태 흐름
//!
//! ```text
//! Received → Decoded → SecretAttached → TokenRequested → TokenReceived
//!          → UserInfoRequested → Completed
//!
//! (모든 비종료 상태에서) → Failed(reason)   // 즉시 종료, 재시도 없음
//! ```
//!
//! ## 실패 매핑
//!
//! | 단계 | 에러 | 상태 코드 |
//! |------|------|-----------|
//! | 본문 디코딩 | `DecodeError` | 400 |
//! | 재직렬화 | `SerializeError` | 400 |
//! | 토큰 요청 전송 | `UpstreamUnavailable` | 500 |
//! | 토큰 응답 읽기/디코딩 | `UpstreamDecodeError` | 500 |
//! | 사용자 정보 요청 전송 | `UpstreamUnavailable` | 500 |
//! | 사용자 정보 읽기 | `UpstreamDecodeError` | 500 |

use std::fmt;
use actix_web::web::Bytes;
use crate::config::ServerSecret;
use crate::domain::{AuthorizationGrant, UpstreamGrant};
use crate::errors::AppError;
use super::KyberClient;

/// 교환 요청의 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeStage {
    Received,
    Decoded,
    SecretAttached,
    TokenRequested,
    TokenReceived,
    UserInfoRequested,
    Completed,
}

impl fmt::Display for ExchangeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExchangeStage::Received => "received",
            ExchangeStage::Decoded => "decoded",
            ExchangeStage::SecretAttached => "secret_attached",
            ExchangeStage::TokenRequested => "token_requested",
            ExchangeStage::TokenReceived => "token_received",
            ExchangeStage::UserInfoRequested => "user_info_requested",
            ExchangeStage::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// 교환 실패 정보 (실패한 시점의 단계 포함)
#[derive(Debug)]
pub struct ExchangeFailure {
    pub stage: ExchangeStage,
    pub error: AppError,
}

/// Kyber 인가 코드 교환 서비스
#[derive(Debug, Clone)]
pub struct ExchangeService {
    client: KyberClient,
    secret: ServerSecret,
}

impl ExchangeService {
    pub fn new(client: KyberClient, secret: ServerSecret) -> Self {
        Self { client, secret }
    }

    /// 원본 요청 본문을 받아 사용자 정보 바이트를 반환합니다
    ///
    /// 반환되는 에러 메시지에는 서버 시크릿이 포함되지 않습니다.
    pub async fn exchange(&self, raw_body: &[u8]) -> Result<Bytes, AppError> {
        match self.exchange_traced(raw_body).await {
            Ok(user_info) => Ok(user_info),
            Err(failure) => Err(failure.error),
        }
    }

    /// [`ExchangeService::exchange`] 와 같지만 실패 단계를 함께 반환합니다
    pub async fn exchange_traced(&self, raw_body: &[u8]) -> Result<Bytes, ExchangeFailure> {
        let mut stage = ExchangeStage::Received;

        match self.run(raw_body, &mut stage).await {
            Ok(user_info) => {
                log::info!("✅ Kyber 사용자 정보 교환 완료 ({} bytes)", user_info.len());
                Ok(user_info)
            }
            Err(error) => {
                let error = error.redact(self.secret.expose());
                log::warn!("❌ Kyber 교환 실패 [단계: {}]: {}", stage, error);
                Err(ExchangeFailure { stage, error })
            }
        }
    }

    async fn run(&self, raw_body: &[u8], stage: &mut ExchangeStage) -> Result<Bytes, AppError> {
        let grant: AuthorizationGrant = serde_json::from_slice(raw_body)
            .map_err(|e| AppError::DecodeError(format!("cannot decode data: {}", e)))?;
        *stage = ExchangeStage::Decoded;

        // 시크릿은 디코딩 이후, 직렬화 이전에 정확히 한 번 첨부
        let payload = serde_json::to_vec(&UpstreamGrant::new(&grant, &self.secret))
            .map_err(|e| AppError::SerializeError(format!("cannot marshal data: {}", e)))?;
        *stage = ExchangeStage::SecretAttached;
        log::debug!("Kyber 토큰 교환 요청 준비 완료 (client_id: {})", grant.client_id);

        *stage = ExchangeStage::TokenRequested;
        let token = self.client.exchange_token(payload).await?;
        *stage = ExchangeStage::TokenReceived;
        log::debug!("Kyber 액세스 토큰 수신 (expires_in: {}s)", token.expires_in.unwrap_or_default());

        *stage = ExchangeStage::UserInfoRequested;
        let user_info = self.client.fetch_user_info(&token.access_token).await?;
        *stage = ExchangeStage::Completed;

        Ok(user_info)
    }
}
