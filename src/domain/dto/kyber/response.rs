use std::fmt;
use serde::Deserialize;

/// Kyber 토큰 교환 응답
///
/// `access_token` 은 필수입니다. 에러 형태의 응답(`{"error": ...}`)은
/// 디코딩 실패로 처리됩니다. 응답은 사용자 정보 요청에만 쓰이고 저장되지 않습니다.
/// 나머지 필드는 없거나 `null` 이어도 됩니다.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token_type: Option<String>,
    pub access_token: String,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
