//! RenEx 엣지 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정을 읽어 컴포넌트를 조립한 뒤 Kyber OAuth 교환 API 와 UI 를 제공합니다.

use std::io;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use renex_edge::config::{load_latest_commit, AppConfig, NetworkConfig};
use renex_edge::core::AppState;
use renex_edge::routes::configure_all_routes;
use renex_edge::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 RenEx 엣지 서비스 시작중...");

    let (config, state) = match initialize_state() {
        Ok(initialized) => initialized,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(io::Error::other(e));
        }
    };

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, state).await
}

/// 설정을 읽고 애플리케이션 상태를 조립합니다
///
/// 설정 값 누락이나 파일 오류는 모두 시작 실패로 이어집니다.
fn initialize_state() -> Result<(AppConfig, web::Data<AppState>), renex_edge::config::ConfigError> {
    print_boxed_title("RENEX EDGE SERVICE");

    print_step_start(1, "Loading configuration");
    let config = AppConfig::from_env()?;
    print_sub_task("Network", &config.server.network);
    print_sub_task("Kyber", &config.kyber.base_url);
    print_sub_task("Secret", &config.kyber.secret.to_string());
    print_step_complete(1, "Configuration loaded", 2);

    print_step_start(2, "Reading network files");
    let network_path = config.server.network_config_path();
    let network = NetworkConfig::load(&network_path)?;
    print_sub_task("Network config", &network_path.display().to_string());
    let latest_commit = load_latest_commit(&config.server.latest_commit_path())?;
    print_sub_task("Latest commit", &latest_commit);
    print_step_complete(2, "Network files loaded", 2);

    print_step_start(3, "Assembling components");
    let state = AppState::build(&config, &network, &latest_commit)?;
    print_sub_task("ExchangeService", "OK");
    print_sub_task("KyberRateLimiter", &format!(
        "burst {}, {}/s",
        config.kyber.rate_limit.burst_size,
        config.kyber.rate_limit.per_second
    ));
    print_sub_task("UiRenderer", &state.ui.ui_dir().display().to_string());
    print_step_complete(3, "Components assembled", 3);

    print_startup_summary(&config.server.bind_address(), &config.server.network);

    Ok((config, web::Data::new(state)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// Rate Limiting 은 `/kyber` 스코프에서만 적용됩니다 ([`configure_all_routes`]).
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Kyber OAuth: http://{}/kyber", bind_address);

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.kyber.rate_limit.per_second,
        config.kyber.rate_limit.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정 (모든 워커가 같은 AppState 를 공유)
            .configure(|cfg| configure_all_routes(cfg, state.clone()))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=renex_edge::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// UI 는 여러 도메인에서 서비스될 수 있으므로 모든 Origin 을 허용하고
/// 요청 Origin 을 그대로 돌려줍니다.
///
/// # Allowed
///
/// * Methods - `GET`, `POST`
/// * Headers - `Content-Type`
/// * 자격 증명(쿠키 등) 지원
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
