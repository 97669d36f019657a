//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── kyber/
//!     ├── request.rs    # AuthorizationGrant (호출자 → 서버), UpstreamGrant (서버 → Kyber)
//!     └── response.rs   # TokenResponse (Kyber → 서버)
//! ```
//!
//! 사용자 정보 응답은 Kyber 가 돌려준 바이트를 그대로 전달하므로 DTO 가 없습니다.

pub mod kyber;

pub use kyber::*;
