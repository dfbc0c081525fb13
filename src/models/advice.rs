use crate::ui::Language;
use serde::{Deserialize, Serialize};

/// 어시스턴트로 보내는 질문. 전송 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub text: String,
    pub language: Language,
}

impl Query {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }
}

/// 응답에 포함된 긴급 연락처 (이름 + 번호)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    pub name: String,
    pub number: String,
}

/// 자문 서비스의 구조화된 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub issue_type: String,
    pub advice: String,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<Vec<Helpline>>,
    pub language: Language,
}

impl AdviceResponse {
    /// 빈 연락처 목록은 "없음"으로 정규화한다.
    pub fn normalized(mut self) -> Self {
        if self
            .emergency_contacts
            .as_ref()
            .is_some_and(|contacts| contacts.is_empty())
        {
            self.emergency_contacts = None;
        }
        self
    }

    pub fn has_emergency_contacts(&self) -> bool {
        self.emergency_contacts
            .as_ref()
            .is_some_and(|contacts| !contacts.is_empty())
    }
}
