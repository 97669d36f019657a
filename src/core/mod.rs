//! # Core Module
//!
//! 애플리케이션 컴포넌트의 조립과 주입을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`state`] - 의존성 주입 컨테이너
//! - **AppState**: 설정 값으로 생성된 서비스 묶음
//! - **명시적 주입**: `web::Data<AppState>` 로 핸들러에 전달
//! - **전역 상태 없음**: 테스트는 원하는 설정으로 `AppState` 를 직접 만들어 사용
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use renex_edge::core::AppState;
//! use renex_edge::routes::configure_all_routes;
//!
//! let state = web::Data::new(AppState::build(&config, &network, &latest_commit)?);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, state.clone()));
//! ```

pub mod state;

pub use state::AppState;
