//! RateLimitMiddleware Admission 로직의 핵심적인 기능
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::errors::AppError;
use crate::services::rate_limit::KyberRateLimiter;

/// 실제 Admission 판단을 수행하는 서비스
pub struct RateLimitMiddlewareService<S> {
    pub service: S,
    pub limiter: Arc<KyberRateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 판단은 핸들러 호출 전에 동기적으로 끝남
        if self.limiter.check().is_err() {
            log::warn!("🛡️ Rate Limit 초과: {} {}", req.method(), req.path());
            let response = AppError::AdmissionDenied.error_response();
            let (req, _) = req.into_parts();
            let res = ServiceResponse::new(req, response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
