//! # Domain Module
//!
//! 요청/응답 경계의 데이터 계약을 정의합니다.

pub mod dto;

pub use dto::*;
