//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 서버 시작 과정의 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! print_boxed_title("RENEX EDGE SERVICE");
//! ```

pub mod display_terminal;
