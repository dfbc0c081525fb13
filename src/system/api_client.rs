// Service client - 원격 자문/디렉토리 서비스 경계
//
// 모델은 트레이트에만 의존하고, 실제 HTTP 구현은 HttpServiceClient가 담당한다.

use crate::models::{AdviceResponse, EmergencyDirectory, LegalAidCenter, Query};
use crate::utils::error::{NyayaError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const TEXT_QUERY_PATH: &str = "/text-query";
pub const LEGAL_AID_CENTERS_PATH: &str = "/legal-aid-centers";
pub const EMERGENCY_CONTACTS_PATH: &str = "/emergency-contacts";
pub const HEALTH_PATH: &str = "/health";

/// 자유 텍스트 → 구조화된 법률 안내
pub trait AdviceService: Send + Sync {
    fn classify(&self, query: &Query) -> Result<AdviceResponse>;
}

/// 법률 지원 센터 / 긴급 연락처 목록
pub trait DirectoryService: Send + Sync {
    fn legal_aid_centers(&self) -> Result<Vec<LegalAidCenter>>;
    fn emergency_contacts(&self) -> Result<EmergencyDirectory>;
}

/// 서비스 상태 확인
pub trait HealthService: Send + Sync {
    fn health(&self) -> Result<ServiceHealth>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// 고정 베이스 엔드포인트를 사용하는 HTTP 클라이언트
#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    base_url: Url,
    client: Client,
}

impl HttpServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NyayaError::Config(format!("HTTP client: {}", e)))?;
        info!(base_url = %base_url, "service client configured");
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        decode_response(&url, response)
    }
}

/// 베이스 URL 검증 (http/https만 허용)
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| NyayaError::Config(format!("invalid API base URL '{}': {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NyayaError::Config(format!(
            "unsupported API scheme '{}' (expected http or https)",
            other
        ))),
    }
}

fn decode_response<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "request failed");
        return Err(NyayaError::Service {
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    let parsed = serde_json::from_str(&body)?;
    debug!(%url, bytes = body.len(), "response decoded");
    Ok(parsed)
}

impl AdviceService for HttpServiceClient {
    fn classify(&self, query: &Query) -> Result<AdviceResponse> {
        let url = self.endpoint(TEXT_QUERY_PATH);
        info!(%url, language = query.language.code(), "sending text query");
        let response = self.client.post(&url).json(query).send()?;
        let advice: AdviceResponse = decode_response(&url, response)?;
        Ok(advice.normalized())
    }
}

impl DirectoryService for HttpServiceClient {
    fn legal_aid_centers(&self) -> Result<Vec<LegalAidCenter>> {
        info!("fetching legal aid centers");
        self.get_json(LEGAL_AID_CENTERS_PATH)
    }

    fn emergency_contacts(&self) -> Result<EmergencyDirectory> {
        info!("fetching emergency contacts");
        self.get_json(EMERGENCY_CONTACTS_PATH)
    }
}

impl HealthService for HttpServiceClient {
    fn health(&self) -> Result<ServiceHealth> {
        self.get_json(HEALTH_PATH)
    }
}
