use serde::{Deserialize, Serialize};
use crate::config::ServerSecret;

/// 인가 코드 교환 요청 DTO (클라이언트 → 서버)
///
/// 구조적 디코딩만 수행합니다. 누락된 필드는 빈 문자열이 되고,
/// 알 수 없는 필드(호출자가 보낸 `client_secret` 포함)는 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorizationGrant {
    #[serde(default)]
    pub grant_type: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub client_id: String,
}

/// Kyber 토큰 엔드포인트로 전달되는 요청 본문 (서버 → Kyber)
///
/// 디코딩된 [`AuthorizationGrant`] 에 서버 시크릿을 한 번 첨부한 형태입니다.
/// 시크릿이 로그에 남지 않도록 `Debug` 를 구현하지 않습니다.
#[derive(Serialize)]
pub struct UpstreamGrant<'a> {
    pub grant_type: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> UpstreamGrant<'a> {
    pub fn new(grant: &'a AuthorizationGrant, secret: &'a ServerSecret) -> Self {
        Self {
            grant_type: &grant.grant_type,
            code: &grant.code,
            redirect_uri: &grant.redirect_uri,
            client_id: &grant.client_id,
            client_secret: secret.expose(),
        }
    }
}
