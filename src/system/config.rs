// Configuration - 설정 로드
//
// 우선순위: 명령줄 인자 > 환경변수 > 설정 파일 > 기본값

use crate::system::api_client::parse_base_url;
use crate::ui::theme::ThemeName;
use crate::ui::Language;
use crate::utils::error::{NyayaError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "NYAYASATHI_CONFIG";
pub const API_URL_ENV: &str = "NYAYASATHI_API_URL";

/// 앱 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 모든 요청의 베이스 엔드포인트
    pub api_base_url: String,
    /// 요청 타임아웃 (밀리초)
    pub request_timeout_ms: u64,
    /// 음성 입력 시뮬레이션 지연 (밀리초, 기본 2초). 0은 허용하지 않는다.
    pub voice_capture_delay_ms: u64,
    /// 시작 언어 ("en" / "hi")
    pub language: Language,
    /// 색상 테마 ("dark" / "light")
    pub theme: ThemeName,
    /// 로그 파일 경로 (없으면 캐시 디렉토리)
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8002".to_string(),
            request_timeout_ms: 10_000,
            voice_capture_delay_ms: 2_000,
            language: Language::English,
            theme: ThemeName::Dark,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// 설정 파일 경로 결정
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("nyayasathi").join("config.toml"))
    }

    /// 파일에서 로드. 파일이 없으면 기본값.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| NyayaError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| NyayaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 환경변수 덮어쓰기
    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                self.api_base_url = trimmed.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.api_base_url)?;
        if self.request_timeout_ms == 0 {
            return Err(NyayaError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.voice_capture_delay_ms == 0 {
            return Err(NyayaError::Config(
                "voice_capture_delay_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn voice_capture_delay(&self) -> Duration {
        Duration::from_millis(self.voice_capture_delay_ms)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        dirs::cache_dir().map(|dir| dir.join("nyayasathi").join("nyayasathi.log"))
    }
}
