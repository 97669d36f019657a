//! 서버 및 배포 환경 설정 모듈
//!
//! 바인딩 주소, 네트워크 환경 이름, UI 자산과 네트워크 설정 파일의 위치를 관리합니다.

use std::path::PathBuf;
use super::{parse_var_or, required_var, ConfigError};

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트 (`HOST`, 기본값 `0.0.0.0`)
    pub host: String,
    /// 바인딩 포트 (`PORT`, 기본값 `3000`)
    pub port: u16,
    /// 네트워크 환경 이름 (`NETWORK`, 필수)
    ///
    /// `env/<network>/config.json` 파일 경로를 결정합니다.
    pub network: String,
    /// UI 템플릿에 주입되는 Infura API 키 (`INFURA_KEY`)
    pub infura_key: String,
    /// 정적 UI 자산 디렉터리 (`UI_DIR`, 기본값 `./ui`)
    pub ui_dir: PathBuf,
    /// 네트워크 설정 디렉터리 (`ENV_DIR`, 기본값 `./env`)
    pub env_dir: PathBuf,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = required_var(lookup, "NETWORK")?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_var_or(lookup, "PORT", Self::DEFAULT_PORT),
            network,
            infura_key: lookup("INFURA_KEY").unwrap_or_default(),
            ui_dir: lookup("UI_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./ui")),
            env_dir: lookup("ENV_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./env")),
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 네트워크별 JSON 설정 파일 경로
    pub fn network_config_path(&self) -> PathBuf {
        self.env_dir.join(&self.network).join("config.json")
    }

    /// 최신 커밋 해시 파일 경로
    pub fn latest_commit_path(&self) -> PathBuf {
        self.env_dir.join("latest_commit.txt")
    }
}
