//! Rate Limit 미들웨어
//!
//! 감싼 스코프로 들어오는 모든 요청을 공유 [`KyberRateLimiter`] 로 먼저 검사합니다.
//! 토큰이 없으면 내부 핸들러를 호출하지 않고 즉시 `429 Too Many Requests` 로 응답합니다.
//! 요청을 대기열에 넣거나 지연시키지 않습니다.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::rate_limit_inner::RateLimitMiddlewareService;
use crate::services::rate_limit::KyberRateLimiter;

/// 전역 리미터 기반 Admission 미들웨어
#[derive(Clone)]
pub struct RateLimitMiddleware {
    limiter: Arc<KyberRateLimiter>,
}

impl RateLimitMiddleware {
    /// 공유 리미터로 미들웨어 생성
    ///
    /// 워커마다 `App` 이 새로 만들어지므로 리미터는 반드시 `Arc` 로 공유해야 합니다.
    pub fn new(limiter: Arc<KyberRateLimiter>) -> Self {
        Self { limiter }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            limiter: Arc::clone(&self.limiter),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::config::RateLimitConfig;
    use crate::services::rate_limit::build_limiter;

    /// 테스트 시간 동안 사실상 충전되지 않는 리미터
    fn limiter_with_burst(burst_size: u32) -> Arc<KyberRateLimiter> {
        build_limiter(&RateLimitConfig { per_second: 0.000_001, burst_size }).unwrap()
    }

    #[actix_web::test]
    async fn test_denied_requests_skip_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let limiter = limiter_with_burst(2);
        let handler_calls = Arc::clone(&calls);

        let app = test::init_service(
            App::new().service(
                web::scope("/kyber")
                    .wrap(RateLimitMiddleware::new(limiter))
                    .route(
                        "",
                        web::post().to(move || {
                            let handler_calls = Arc::clone(&handler_calls);
                            async move {
                                handler_calls.fetch_add(1, Ordering::SeqCst);
                                HttpResponse::Ok().body("ok")
                            }
                        }),
                    ),
            ),
        )
        .await;

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::post().uri("/kyber").to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }

        assert_eq!(statuses, vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_denied_body_is_plain_text() {
        let limiter = limiter_with_burst(1);
        assert!(limiter.check().is_ok());

        let app = test::init_service(
            App::new().service(
                web::scope("/kyber")
                    .wrap(RateLimitMiddleware::new(limiter))
                    .route("", web::post().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let req = test::TestRequest::post().uri("/kyber").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body.as_ref(), b"too many requests");
    }
}
