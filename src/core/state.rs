//! # Application State
//!
//! 시작 시점에 한 번 조립되어 모든 워커가 공유하는 불변 컴포넌트 묶음입니다.
//! `web::Data<AppState>` 로 등록되며, 유일한 가변 상태는 Rate Limiter 내부 상태입니다.
//!
//! ```text
//! AppConfig ──┬─► KyberClient ──► ExchangeService ─┐
//!             ├─► KyberRateLimiter ────────────────┼─► AppState
//! NetworkConfig ─► UiRenderer ─────────────────────┘
//! ```

use std::sync::Arc;
use crate::config::{AppConfig, ConfigError, NetworkConfig};
use crate::services::kyber::{ExchangeService, KyberClient};
use crate::services::rate_limit::{build_limiter, KyberRateLimiter};
use crate::services::ui::UiRenderer;

/// 핸들러와 미들웨어에 주입되는 애플리케이션 상태
#[derive(Debug, Clone)]
pub struct AppState {
    /// 현재 네트워크 환경 이름
    pub network: String,
    pub exchange: ExchangeService,
    /// `/kyber` 스코프 전용 공유 리미터
    pub limiter: Arc<KyberRateLimiter>,
    pub ui: UiRenderer,
}

impl AppState {
    /// 설정 값으로부터 모든 컴포넌트를 생성합니다
    ///
    /// # Errors
    ///
    /// * `ConfigError::HttpClient` - Kyber HTTP 클라이언트 생성 실패
    /// * `ConfigError::InvalidValue` - Rate Limit 값으로 Quota 를 만들 수 없음
    /// * `ConfigError::Marshal` - UI 설정 스크립트 생성 실패
    pub fn build(
        config: &AppConfig,
        network: &NetworkConfig,
        latest_commit: &str,
    ) -> Result<Self, ConfigError> {
        let client = KyberClient::new(&config.kyber)?;
        let ui = UiRenderer::new(
            config.server.ui_dir.clone(),
            network,
            &config.server.infura_key,
            latest_commit,
        )?;

        Ok(Self {
            network: config.server.network.clone(),
            exchange: ExchangeService::new(client, config.kyber.secret.clone()),
            limiter: build_limiter(&config.kyber.rate_limit)?,
            ui,
        })
    }
}
