//! # Configuration Module
//!
//! 엣지 서버의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수와 네트워크별 JSON 설정 파일을 시작 시점에 한 번만 읽어
//! 불변(immutable) 설정 값으로 만들고, 이후에는 이 값을 각 컴포넌트에 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 바인딩 주소, 네트워크 이름, UI/환경 디렉터리
//! - [`kyber_config`] - Kyber OAuth 엔드포인트, 서버 시크릿, 타임아웃, Rate Limit
//! - [`network_config`] - `env/<network>/config.json` 및 커밋 해시 로딩
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export NETWORK="testnet"
//! export KYBER_SECRET="your-kyber-client-secret"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export INFURA_KEY="your-infura-key"
//! export KYBER_BASE_URL="https://kyber.network"
//! export KYBER_TIMEOUT_SECS="10"
//! export KYBER_RATE_LIMIT_PER_SECOND="3"
//! export KYBER_RATE_LIMIT_BURST_SIZE="20"
//! export UI_DIR="./ui"
//! export ENV_DIR="./env"
//! ```
//!
//! ## 설계 원칙
//!
//! 설정 값은 전역 상태로 두지 않습니다. [`AppConfig::from_env`] 로 한 번 만들고
//! 이후에는 `AppState` 를 통해 핸들러와 서비스에 전달합니다.
//! 테스트에서는 [`AppConfig::from_lookup`] 에 `HashMap` 기반 조회 함수를 넘겨
//! 프로세스 환경 변수를 건드리지 않고 설정을 구성할 수 있습니다.

pub mod server_config;
pub mod kyber_config;
pub mod network_config;

pub use server_config::*;
pub use kyber_config::*;
pub use network_config::*;

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// 시작 시점 설정 오류
///
/// 모든 변형은 프로세스 시작 단계에서만 발생하며, `main` 에서 로그를 남긴 뒤
/// 0이 아닌 종료 코드로 프로세스를 종료시킵니다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("cannot read {0} environment")]
    MissingVar(&'static str),

    /// 환경 변수 값이 허용 범위를 벗어남
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    /// 설정 파일 읽기 실패
    #[error("cannot load {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 설정 파일 JSON 파싱 실패
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// UI 템플릿용 네트워크 데이터 직렬화 실패
    #[error("cannot marshal network data: {0}")]
    Marshal(#[from] serde_json::Error),

    /// HTTP 클라이언트 생성 실패
    #[error("cannot build kyber http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// 애플리케이션 전체 설정
///
/// 서버 설정과 Kyber 설정을 묶은 불변 값입니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub kyber: KyberConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 로드합니다
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVar` - `NETWORK` 또는 `KYBER_SECRET` 누락
    /// * `ConfigError::InvalidValue` - Rate Limit 값이 0 이하
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            kyber: KyberConfig::from_lookup(&lookup)?,
        })
    }
}

/// 필수 환경 변수를 읽습니다. 빈 문자열도 누락으로 취급합니다.
pub(crate) fn required_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

/// 선택적 환경 변수를 파싱합니다
///
/// 값이 없으면 기본값을 사용하고, 파싱에 실패하면 경고 로그를 남긴 뒤 기본값을 사용합니다.
pub(crate) fn parse_var_or<F, T>(lookup: &F, key: &'static str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}
