//! UI HTTP Handlers
//!
//! 다른 라우트에 매칭되지 않은 모든 요청을 처리합니다.
//! 요청 경로가 UI 디렉터리의 파일이면 정적 파일로 응답하고,
//! 아니면 런타임 설정이 주입된 `index.html` 로 응답합니다 (SPA 클라이언트 라우팅).

use actix_files::NamedFile;
use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use crate::core::AppState;
use crate::errors::AppError;

pub async fn serve_ui(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if let Some(path) = state.ui.resolve_asset(req.path()) {
        let file = NamedFile::open_async(&path)
            .await
            .map_err(|e| AppError::NotFound(format!("{}: {}", req.path(), e)))?;
        return Ok(file.into_response(&req));
    }

    let html = state.ui.render_index().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use actix_web::{http::StatusCode, test, web, App};
    use crate::config::{KyberConfig, NetworkConfig, RateLimitConfig, ServerSecret};
    use crate::core::AppState;
    use crate::routes::configure_all_routes;
    use crate::services::kyber::{ExchangeService, KyberClient};
    use crate::services::rate_limit::build_limiter;
    use crate::services::ui::UiRenderer;

    fn state_for(ui_dir: &std::path::Path) -> web::Data<AppState> {
        let config = KyberConfig::new("http://127.0.0.1:1", ServerSecret::new("s3cr3t"));
        let network = NetworkConfig {
            eth_network: "mainnet".to_string(),
            ..NetworkConfig::default()
        };

        web::Data::new(AppState {
            network: "mainnet".to_string(),
            exchange: ExchangeService::new(KyberClient::new(&config).unwrap(), config.secret.clone()),
            limiter: build_limiter(&RateLimitConfig::default()).unwrap(),
            ui: UiRenderer::new(ui_dir, &network, "infura", "deadbeef").unwrap(),
        })
    }

    #[actix_web::test]
    async fn test_serves_static_file_and_template_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html><head></head><body></body></html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();

        let state = state_for(dir.path());
        let app = test::init_service(
            App::new().configure(|cfg| configure_all_routes(cfg, state.clone())),
        )
        .await;

        let req = test::TestRequest::get().uri("/app.js").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body.as_ref(), b"console.log('app')");

        let req = test::TestRequest::get().uri("/orders/42").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(html.contains(r#"window.INFURA_KEY="infura";"#));
        assert!(html.contains("deadbeef"));
        assert!(html.find("window.NETWORK").unwrap() < html.find("</head>").unwrap());
    }

    #[actix_web::test]
    async fn test_missing_layout_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let app = test::init_service(
            App::new().configure(|cfg| configure_all_routes(cfg, state.clone())),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
