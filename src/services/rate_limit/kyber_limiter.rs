//! `/kyber` 전역 Rate Limiter
//!
//! 모든 호출자가 공유하는 하나의 `governor` 직접(비키) 리미터입니다.
//! 용량은 `burst_size`, 충전 간격은 `1 / per_second` 초이며 시작 시 가득 찬 상태입니다.
//! 거부된 요청은 토큰을 소비하지 않고, 동시 요청도 같은 토큰을 두 번 얻지 못합니다 (GCRA).

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use crate::config::{ConfigError, RateLimitConfig};

/// 프로세스 전체에서 공유되는 Kyber Rate Limiter
pub type KyberRateLimiter = DefaultDirectRateLimiter;

/// Rate Limit 설정을 `governor` Quota 로 변환합니다
///
/// # Errors
///
/// * `ConfigError::InvalidValue` - 버스트가 0 이거나 충전 속도를 간격으로 표현할 수 없음
pub fn quota_for(config: &RateLimitConfig) -> Result<Quota, ConfigError> {
    let burst = NonZeroU32::new(config.burst_size).ok_or_else(|| ConfigError::InvalidValue {
        key: "KYBER_RATE_LIMIT_BURST_SIZE",
        reason: "must be at least 1".to_string(),
    })?;

    let invalid_rate = || ConfigError::InvalidValue {
        key: "KYBER_RATE_LIMIT_PER_SECOND",
        reason: format!("cannot build a refill interval from {}", config.per_second),
    };

    if !(config.per_second.is_finite() && config.per_second > 0.0) {
        return Err(invalid_rate());
    }
    let period = Duration::try_from_secs_f64(1.0 / config.per_second).map_err(|_| invalid_rate())?;
    let quota = Quota::with_period(period).ok_or_else(invalid_rate)?;

    Ok(quota.allow_burst(burst))
}

/// 설정 값으로 공유 리미터를 생성합니다
pub fn build_limiter(config: &RateLimitConfig) -> Result<Arc<KyberRateLimiter>, ConfigError> {
    Ok(Arc::new(RateLimiter::direct(quota_for(config)?)))
}
