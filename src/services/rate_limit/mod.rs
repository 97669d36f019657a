//! Rate Limiting 서비스
//!
//! `/kyber` 엔드포인트 보호용 전역 리미터를 제공합니다.
//! 리미터 상태는 [`KyberRateLimiter::check`] 로만 변경됩니다.

pub mod kyber_limiter;

pub use kyber_limiter::{build_limiter, quota_for, KyberRateLimiter};
