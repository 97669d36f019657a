//! # Kyber OAuth Configuration Module
//!
//! Kyber 인증 코드 교환에 필요한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export KYBER_SECRET="your-kyber-client-secret"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export KYBER_BASE_URL="https://kyber.network"   # 테스트 시 스텁 서버 주소
//! export KYBER_TIMEOUT_SECS="10"                  # 외부 호출 1회당 타임아웃
//! export KYBER_RATE_LIMIT_PER_SECOND="3"          # 초당 토큰 충전량
//! export KYBER_RATE_LIMIT_BURST_SIZE="20"         # 버스트 허용량
//! ```

use std::fmt;
use std::time::Duration;
use super::{parse_var_or, required_var, ConfigError};

/// 서버가 보관하는 Kyber 클라이언트 시크릿
///
/// 로그나 에러 메시지에 노출되지 않도록 `Debug`/`Display` 출력은 가려집니다.
/// 실제 값은 [`ServerSecret::expose`] 로만 꺼낼 수 있습니다.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerSecret(String);

impl ServerSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 원본 시크릿 값. 호출자는 이 값을 로그로 남기면 안 됩니다.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServerSecret").field(&"<redacted>").finish()
    }
}

impl fmt::Display for ServerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// `/kyber` Rate Limit 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 충전되는 토큰 수
    pub per_second: f64,
    /// 최대 버스트 크기
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 3.0,
            burst_size: 20,
        }
    }
}

impl RateLimitConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            per_second: parse_var_or(lookup, "KYBER_RATE_LIMIT_PER_SECOND", defaults.per_second),
            burst_size: parse_var_or(lookup, "KYBER_RATE_LIMIT_BURST_SIZE", defaults.burst_size),
        };

        if !(config.per_second.is_finite() && config.per_second > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "KYBER_RATE_LIMIT_PER_SECOND",
                reason: format!("must be a positive number, got {}", config.per_second),
            });
        }
        if config.burst_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "KYBER_RATE_LIMIT_BURST_SIZE",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(config)
    }
}

/// Kyber 업스트림 설정
#[derive(Debug, Clone)]
pub struct KyberConfig {
    /// 업스트림 기본 URL (끝의 `/` 제거됨)
    pub base_url: String,
    /// 토큰 교환 요청에 첨부되는 서버 시크릿
    pub secret: ServerSecret,
    /// 외부 호출 1회당 타임아웃
    pub timeout: Duration,
    pub rate_limit: RateLimitConfig,
}

impl KyberConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://kyber.network";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = ServerSecret::new(required_var(lookup, "KYBER_SECRET")?);
        let base_url = lookup("KYBER_BASE_URL")
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_var_or(lookup, "KYBER_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS);

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "KYBER_TIMEOUT_SECS",
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret,
            timeout: Duration::from_secs(timeout_secs),
            rate_limit: RateLimitConfig::from_lookup(lookup)?,
        })
    }

    /// 기본값 기반 설정 (테스트 및 임베딩용)
    pub fn new(base_url: impl Into<String>, secret: ServerSecret) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            rate_limit: RateLimitConfig::default(),
        }
    }

    /// 토큰 교환 엔드포인트
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base_url)
    }

    /// 사용자 정보 엔드포인트
    pub fn user_info_url(&self) -> String {
        format!("{}/api/user_info", self.base_url)
    }
}
