//! # UI 템플릿 렌더러
//!
//! 빌드된 SPA 자산 디렉터리에서 정적 파일 경로를 해석하고,
//! `index.html` 에 런타임 설정 스크립트를 주입합니다.
//!
//! ## 주입 규칙
//!
//! 1. 레이아웃에 `{{env}}` 플레이스홀더가 있으면 모두 스크립트로 치환
//! 2. 없으면 첫 번째 `</head>` 바로 앞에 삽입
//! 3. 둘 다 없으면 `TemplateError`
//!
//! 스크립트는 시작 시점에 한 번 만들어지고, `index.html` 은 요청마다 다시 읽습니다.

use std::path::{Path, PathBuf};
use actix_web::web;
use crate::config::{ConfigError, NetworkConfig};
use crate::errors::AppError;

/// 레이아웃 안의 설정 스크립트 자리
pub const ENV_PLACEHOLDER: &str = "{{env}}";

const HEAD_CLOSE: &str = "</head>";

/// UI 자산 해석 및 템플릿 렌더링
#[derive(Debug, Clone)]
pub struct UiRenderer {
    ui_dir: PathBuf,
    env_script: String,
}

impl UiRenderer {
    /// 네트워크 설정, Infura 키, 커밋 해시로 설정 스크립트를 만듭니다
    pub fn new(
        ui_dir: impl Into<PathBuf>,
        network: &NetworkConfig,
        infura_key: &str,
        latest_commit: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            ui_dir: ui_dir.into(),
            env_script: build_env_script(network, infura_key, latest_commit)?,
        })
    }

    pub fn ui_dir(&self) -> &Path {
        &self.ui_dir
    }

    pub fn env_script(&self) -> &str {
        &self.env_script
    }

    /// 요청 경로가 UI 디렉터리 안의 일반 파일이면 그 경로를 반환합니다
    ///
    /// `.`/`..` 세그먼트나 역슬래시가 포함된 경로는 디스크에서 해석하지 않습니다.
    pub fn resolve_asset(&self, request_path: &str) -> Option<PathBuf> {
        let mut path = self.ui_dir.clone();
        let mut segments = 0;

        for segment in request_path.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." || segment.contains('\\') {
                return None;
            }
            path.push(segment);
            segments += 1;
        }

        if segments == 0 {
            return None;
        }

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Some(path),
            _ => None,
        }
    }

    /// `index.html` 을 읽어 설정 스크립트를 주입한 HTML 을 반환합니다
    ///
    /// # Errors
    ///
    /// * `AppError::TemplateError` - 레이아웃 파일 읽기 실패 또는 주입 위치 없음
    pub async fn render_index(&self) -> Result<String, AppError> {
        let layout_path = self.ui_dir.join("index.html");
        let layout = web::block(move || std::fs::read_to_string(layout_path))
            .await
            .map_err(|e| AppError::TemplateError(format!("cannot parse layout template: {}", e)))?
            .map_err(|e| AppError::TemplateError(format!("cannot parse layout template: {}", e)))?;

        inject_env(&layout, &self.env_script)
    }
}

/// 레이아웃에 설정 스크립트를 주입합니다
pub fn inject_env(layout: &str, env_script: &str) -> Result<String, AppError> {
    if layout.contains(ENV_PLACEHOLDER) {
        return Ok(layout.replace(ENV_PLACEHOLDER, env_script));
    }

    match layout.find(HEAD_CLOSE) {
        Some(index) => {
            let mut html = String::with_capacity(layout.len() + env_script.len());
            html.push_str(&layout[..index]);
            html.push_str(env_script);
            html.push_str(&layout[index..]);
            Ok(html)
        }
        None => Err(AppError::TemplateError(format!(
            "cannot execute template: layout has neither {} nor {}",
            ENV_PLACEHOLDER, HEAD_CLOSE
        ))),
    }
}

/// 스크립트 태그 안에 안전하게 넣을 수 있는 JSON 문자열
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn build_env_script(
    network: &NetworkConfig,
    infura_key: &str,
    latest_commit: &str,
) -> Result<String, ConfigError> {
    let network_json = script_json(network)?;
    let infura_json = script_json(infura_key)?;
    let commit_json = script_json(latest_commit.trim())?;

    Ok(format!(
        r#"<script type="text/javascript">
    console.log('renex-js commit hash: ' + {commit});
    window.INFURA_KEY={infura};
    window.NETWORK={network};
    if (window.NETWORK.ethNetwork !== 'mainnet') {{
        document.title = 'RenEx Beta (' + window.NETWORK.ethNetworkLabel + ' Test Network)';
    }}
</script>"#,
        commit = commit_json,
        infura = infura_json,
        network = network_json,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn network() -> NetworkConfig {
        NetworkConfig {
            network: "testnet".to_string(),
            eth_network: "kovan".to_string(),
            eth_network_label: "Kovan".to_string(),
            ..NetworkConfig::default()
        }
    }

    #[test]
    fn test_env_script_contents() {
        let renderer = UiRenderer::new("./ui", &network(), "infura-key", "abc123\n").unwrap();
        let script = renderer.env_script();

        assert!(script.starts_with(r#"<script type="text/javascript">"#));
        assert!(script.contains(r#"window.INFURA_KEY="infura-key";"#));
        assert!(script.contains(r#"'renex-js commit hash: ' + "abc123""#));
        assert!(script.contains(r#""ethNetwork":"kovan""#));
        assert!(script.ends_with("</script>"));
    }

    #[test]
    fn test_env_script_escapes_script_breakout() {
        let renderer =
            UiRenderer::new("./ui", &network(), "</script><script>alert(1)", "abc").unwrap();

        assert_eq!(renderer.env_script().matches("</script>").count(), 1);
    }

    #[test]
    fn test_inject_env_placeholder() {
        let html = inject_env("<head>{{env}}</head><body></body>", "<script></script>").unwrap();
        assert_eq!(html, "<head><script></script></head><body></body>");
    }

    #[test]
    fn test_inject_env_before_head_close() {
        let html = inject_env("<html><head><title>x</title></head></html>", "<s/>").unwrap();
        assert_eq!(html, "<html><head><title>x</title><s/></head></html>");
    }

    #[test]
    fn test_inject_env_without_anchor() {
        let err = inject_env("<html></html>", "<s/>").unwrap_err();
        assert!(matches!(err, AppError::TemplateError(_)));
        assert!(err.to_string().starts_with("cannot execute template"));
    }

    #[test]
    fn test_resolve_asset() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("static")).unwrap();
        fs::write(dir.path().join("static/app.js"), "console.log(1)").unwrap();
        let renderer = UiRenderer::new(dir.path(), &network(), "", "").unwrap();

        assert_eq!(
            renderer.resolve_asset("/static/app.js"),
            Some(dir.path().join("static").join("app.js"))
        );
        assert_eq!(renderer.resolve_asset("/static"), None);
        assert_eq!(renderer.resolve_asset("/"), None);
        assert_eq!(renderer.resolve_asset("/orders/42"), None);
        assert_eq!(renderer.resolve_asset("/static/../static/app.js"), None);
    }

    #[actix_web::test]
    async fn test_render_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html><head>{{env}}</head></html>").unwrap();
        let renderer = UiRenderer::new(dir.path(), &network(), "key", "abc").unwrap();

        let html = renderer.render_index().await.unwrap();

        assert!(html.contains("window.NETWORK="));
        assert!(!html.contains(ENV_PLACEHOLDER));
    }

    #[actix_web::test]
    async fn test_render_index_missing_layout() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = UiRenderer::new(dir.path(), &network(), "key", "abc").unwrap();

        let err = renderer.render_index().await.unwrap_err();
        assert!(err.to_string().starts_with("cannot parse layout template"));
    }
}
