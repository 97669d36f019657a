//! 네트워크 설정 파일 모듈
//!
//! `env/<network>/config.json` 에 정의된 네트워크 엔드포인트, 컨트랙트 주소,
//! 토큰 주소를 타입이 있는 구조체로 로드합니다.
//! 구조체에 정의되지 않은 키도 보존되어 UI 에 그대로 전달됩니다.

use std::path::Path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use super::ConfigError;

/// 네트워크 설정
///
/// UI 템플릿에서 `window.NETWORK` 로 주입되는 값입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub ingress: String,
    #[serde(default)]
    pub infura: String,
    #[serde(default)]
    pub etherscan: String,
    #[serde(default)]
    pub eth_network: String,
    #[serde(default)]
    pub eth_network_label: String,
    #[serde(default, rename = "ledgerNetworkId")]
    pub ledger_network_id: String,
    #[serde(default, rename = "Contracts")]
    pub contracts: Vec<ContractAddresses>,
    #[serde(default, rename = "Tokens")]
    pub tokens: TokenAddresses,
    /// 구조체에 정의되지 않은 나머지 키
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 배포된 컨트랙트 주소 묶음
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    #[serde(default)]
    pub darknode_registry: String,
    #[serde(default)]
    pub orderbook: String,
    #[serde(default, rename = "renExTokens")]
    pub ren_ex_tokens: String,
    #[serde(default, rename = "renExBalances")]
    pub ren_ex_balances: String,
    #[serde(default, rename = "renExSettlement")]
    pub ren_ex_settlement: String,
    #[serde(default)]
    pub wyre: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 거래 가능한 ERC20 토큰 주소
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenAddresses {
    #[serde(default, rename = "TUSD")]
    pub tusd: String,
    #[serde(default, rename = "DGX")]
    pub dgx: String,
    #[serde(default, rename = "REN")]
    pub ren: String,
    #[serde(default, rename = "OMG")]
    pub omg: String,
    #[serde(default, rename = "ZRX")]
    pub zrx: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NetworkConfig {
    /// JSON 설정 파일을 읽어 파싱합니다
    ///
    /// # Errors
    ///
    /// * `ConfigError::Io` - 파일이 없거나 읽을 수 없음
    /// * `ConfigError::Parse` - JSON 형식 오류
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_slice(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// 최신 커밋 해시를 읽어 앞뒤 공백을 제거합니다
pub fn load_latest_commit(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map(|raw| raw.trim().to_string())
        .map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
}
