//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 요청 단위 에러를
//! 상태 코드와 짧은 plain-text 진단 메시지로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `DecodeError` | 400 Bad Request | 요청 본문 JSON 디코딩 실패 |
//! | `SerializeError` | 400 Bad Request | 시크릿 첨부 후 재직렬화 실패 |
//! | `UpstreamUnavailable` | 500 Internal Server Error | Kyber 연결/전송 실패 |
//! | `UpstreamDecodeError` | 500 Internal Server Error | Kyber 응답 읽기/파싱 실패 |
//! | `AdmissionDenied` | 429 Too Many Requests | Rate Limit 초과 |
//! | `TemplateError` | 500 Internal Server Error | UI 템플릿 처리 실패 |
//! | `NotFound` | 404 Not Found | 정적 자산 없음 |
//!
//! 모든 에러는 해당 요청에서만 종결되며 재시도되지 않고, 프로세스를 종료시키지 않습니다.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 시크릿 값이 에러 메시지에 섞여 들어왔을 때 대체되는 문자열
pub const REDACTED: &str = "<redacted>";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 호출자 입력 디코딩 실패 (400)
    #[error("{0}")]
    DecodeError(String),

    /// 업스트림 요청 직렬화 실패 (400)
    #[error("{0}")]
    SerializeError(String),

    /// 업스트림 연결/전송 실패 (500)
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// 업스트림 응답 읽기/디코딩 실패 (500)
    #[error("{0}")]
    UpstreamDecodeError(String),

    /// Rate Limit 에 의해 거부됨 (429)
    ///
    /// 업스트림 I/O 이전에 결정되므로 부수 효과가 없습니다.
    #[error("too many requests")]
    AdmissionDenied,

    /// UI 템플릿 처리 실패 (500)
    #[error("{0}")]
    TemplateError(String),

    /// 리소스 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// 메시지 안의 `secret` 문자열을 모두 가립니다
    ///
    /// 업스트림이 요청 내용을 응답에 되돌려 보내는 경우에도
    /// 서버 시크릿이 호출자에게 노출되지 않도록 합니다.
    pub fn redact(self, secret: &str) -> Self {
        if secret.is_empty() {
            return self;
        }

        let scrub = |msg: String| msg.replace(secret, REDACTED);
        match self {
            AppError::DecodeError(msg) => AppError::DecodeError(scrub(msg)),
            AppError::SerializeError(msg) => AppError::SerializeError(scrub(msg)),
            AppError::UpstreamUnavailable(msg) => AppError::UpstreamUnavailable(scrub(msg)),
            AppError::UpstreamDecodeError(msg) => AppError::UpstreamDecodeError(scrub(msg)),
            AppError::TemplateError(msg) => AppError::TemplateError(scrub(msg)),
            AppError::NotFound(msg) => AppError::NotFound(scrub(msg)),
            AppError::AdmissionDenied => AppError::AdmissionDenied,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DecodeError(_) | AppError::SerializeError(_) => StatusCode::BAD_REQUEST,
            AppError::AdmissionDenied => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_)
            | AppError::UpstreamDecodeError(_)
            | AppError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 상태 코드와 plain-text 진단 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_decode_error_response() {
        let error = AppError::DecodeError("cannot decode data: EOF".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialize_error_response() {
        let error = AppError::SerializeError("cannot marshal data".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_responses() {
        let unavailable = AppError::UpstreamUnavailable("unable to forward request".to_string());
        let decode = AppError::UpstreamDecodeError("unable to read kyber response".to_string());

        assert_eq!(unavailable.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(decode.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("/missing.js".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_admission_denied_is_plain_text() {
        let response = AppError::AdmissionDenied.error_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"too many requests");
    }

    #[test]
    fn test_redact_scrubs_secret() {
        let error = AppError::UpstreamDecodeError(
            "unable to read kyber response: unknown variant `s3cr3t`".to_string(),
        )
        .redact("s3cr3t");

        assert_eq!(
            error.to_string(),
            "unable to read kyber response: unknown variant `<redacted>`"
        );
    }

    #[test]
    fn test_redact_with_empty_secret_is_noop() {
        let error = AppError::DecodeError("cannot decode data".to_string()).redact("");
        assert_eq!(error.to_string(), "cannot decode data");
    }
}
