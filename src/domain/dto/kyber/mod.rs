//! Kyber OAuth 교환 DTO
//!
//! - [`request`] - 호출자가 보내는 인가 코드와 Kyber 로 전달되는 요청 본문
//! - [`response`] - Kyber 토큰 엔드포인트 응답

pub mod request;
pub mod response;

pub use request::{AuthorizationGrant, UpstreamGrant};
pub use response::TokenResponse;
