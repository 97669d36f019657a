//! UI 자산 서비스
//!
//! 정적 자산 경로 해석과 `index.html` 런타임 설정 주입을 담당합니다.

pub mod ui_renderer;

pub use ui_renderer::{inject_env, UiRenderer, ENV_PLACEHOLDER};
