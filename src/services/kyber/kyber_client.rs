//! # Kyber 업스트림 클라이언트
//!
//! Kyber OAuth 서버에 대한 두 번의 순차 호출을 담당합니다.
//!
//! ```text
//! ┌─────────────┐   1. POST /oauth/token (grant + client_secret)   ┌─────────────┐
//! │  우리 서버   ├─────────────────────────────────────────────────►│    Kyber    │
//! │             │◄─────────────────────────────────────────────────┤             │
//! │             │   { token_type, access_token, expires_in, ... }  │             │
//! │             │                                                  │             │
//! │             │   2. GET /api/user_info?access_token=...         │             │
//! │             ├─────────────────────────────────────────────────►│             │
//! │             │◄─────────────────────────────────────────────────┤             │
//! └─────────────┘   사용자 정보 JSON (그대로 전달)                     └─────────────┘
//! ```
//!
//! 하나의 `reqwest::Client` 를 프로세스 전체에서 재사용하며(커넥션 풀),
//! 호출마다 설정된 타임아웃이 적용됩니다. 재시도는 하지 않습니다.

use actix_web::web::Bytes;
use reqwest::header::CONTENT_TYPE;
use crate::config::{ConfigError, KyberConfig};
use crate::domain::TokenResponse;
use crate::errors::AppError;

/// Kyber OAuth 업스트림 클라이언트
#[derive(Debug, Clone)]
pub struct KyberClient {
    http: reqwest::Client,
    token_url: String,
    user_info_url: String,
}

impl KyberClient {
    /// 설정된 타임아웃을 가진 HTTP 클라이언트를 생성합니다
    ///
    /// # Errors
    ///
    /// * `ConfigError::HttpClient` - TLS 백엔드 초기화 실패 등
    pub fn new(config: &KyberConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            token_url: config.token_url(),
            user_info_url: config.user_info_url(),
        })
    }

    /// 직렬화된 인가 요청을 토큰 엔드포인트로 전달하고 응답을 디코딩합니다
    ///
    /// 업스트림 HTTP 상태 코드로 에러를 분류하지 않습니다. 2xx 가 아닌 응답은
    /// 경고 로그만 남기고 그대로 디코딩을 시도하며, 에러 형태의 본문은
    /// `UpstreamDecodeError` 가 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamUnavailable` - 연결/전송 실패, 타임아웃
    /// * `AppError::UpstreamDecodeError` - 본문 읽기 실패 또는 `TokenResponse` 디코딩 실패
    pub async fn exchange_token(&self, payload: Vec<u8>) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("unable to forward request: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Kyber 토큰 엔드포인트 비정상 응답: {}", status);
        }

        let body = response.bytes().await.map_err(|e| {
            AppError::UpstreamDecodeError(format!("unable to read kyber response: {}", e.without_url()))
        })?;

        serde_json::from_slice::<TokenResponse>(&body).map_err(|e| {
            AppError::UpstreamDecodeError(format!("unable to read kyber response: {}", e))
        })
    }

    /// 액세스 토큰으로 사용자 정보를 조회하고 응답 바이트를 그대로 반환합니다
    ///
    /// 액세스 토큰은 쿼리 파라미터로 전달되므로 에러 메시지에서 URL 을 제거합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamUnavailable` - 연결/전송 실패, 타임아웃
    /// * `AppError::UpstreamDecodeError` - 본문 읽기 실패
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<Bytes, AppError> {
        let response = self
            .http
            .get(&self.user_info_url)
            .query(&[("access_token", access_token)])
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("unable to retrieve user info: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Kyber 사용자 정보 엔드포인트 비정상 응답: {}", status);
        }

        response.bytes().await.map_err(|e| {
            AppError::UpstreamDecodeError(format!("unable to read kyber response: {}", e.without_url()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerSecret;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(base_url: &str) -> KyberClient {
        KyberClient::new(&KyberConfig::new(base_url, ServerSecret::new("s3cr3t"))).unwrap()
    }

    #[actix_web::test]
    async fn test_exchange_token_posts_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .header("content-type", "application/json")
                    .json_body(json!({"code": "abc"}));
                then.status(200).json_body(json!({
                    "token_type": "bearer",
                    "access_token": "tok",
                    "expires_in": 3600,
                    "refresh_token": "ref"
                }));
            })
            .await;

        let client = client_for(&server.base_url());
        let token = client
            .exchange_token(br#"{"code":"abc"}"#.to_vec())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[actix_web::test]
    async fn test_exchange_token_error_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(401).json_body(json!({"error": "invalid_client"}));
            })
            .await;

        let client = client_for(&server.base_url());
        let err = client.exchange_token(b"{}".to_vec()).await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamDecodeError(_)));
        assert!(err.to_string().starts_with("unable to read kyber response"));
    }

    #[actix_web::test]
    async fn test_fetch_user_info_passes_token_as_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/user_info")
                    .query_param("access_token", "tok");
                then.status(200).body(r#"{"id":"u1"}"#);
            })
            .await;

        let client = client_for(&server.base_url());
        let body = client.fetch_user_info("tok").await.unwrap();

        mock.assert_async().await;
        assert_eq!(body.as_ref(), br#"{"id":"u1"}"#);
    }

    #[actix_web::test]
    async fn test_transport_failure_hides_url() {
        // 127.0.0.1:1 은 열려있지 않은 포트
        let client = client_for("http://127.0.0.1:1");
        let err = client.fetch_user_info("secret-token").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
        assert!(err.to_string().starts_with("unable to retrieve user info"));
        assert!(!err.to_string().contains("secret-token"));
    }
}
