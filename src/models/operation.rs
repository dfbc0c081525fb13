use crate::ui::{I18n, MessageKey, TextKey};
use crate::utils::error::NyayaError;

/// 사용자에게 알릴 수 있는 작업 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ProcessQuery,
    LoadCenters,
    LoadContacts,
    Dial,
}

impl Operation {
    pub fn label_key(self) -> TextKey {
        match self {
            Operation::ProcessQuery => TextKey::OpProcessQuery,
            Operation::LoadCenters => TextKey::OpLoadCenters,
            Operation::LoadContacts => TextKey::OpLoadContacts,
            Operation::Dial => TextKey::OpDial,
        }
    }

    /// 로그용 고정 이름
    pub fn id(self) -> &'static str {
        match self {
            Operation::ProcessQuery => "text_query",
            Operation::LoadCenters => "legal_aid_centers",
            Operation::LoadContacts => "emergency_contacts",
            Operation::Dial => "dial",
        }
    }
}

/// 작업 실패 알림. 전송/서비스 오류를 구분하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    pub operation: Operation,
    pub message: String,
}

impl OperationError {
    pub fn new(operation: Operation, error: &NyayaError) -> Self {
        Self {
            operation,
            message: error.to_string(),
        }
    }

    /// 현재 언어로 렌더링한 알림 본문
    pub fn render(&self, i18n: I18n) -> String {
        i18n.fmt(
            MessageKey::OperationFailed,
            &[
                ("operation", i18n.tr(self.operation.label_key()).to_string()),
                ("reason", self.message.clone()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Language;

    #[test]
    fn test_error_render_contains_operation_and_reason() {
        let err = OperationError::new(
            Operation::LoadCenters,
            &NyayaError::Service { status: 502 },
        );
        let text = err.render(I18n::new(Language::English));
        assert!(text.contains("Loading legal aid centers failed."));
        assert!(text.contains("HTTP error! status: 502"));
    }

    #[test]
    fn test_error_render_hindi() {
        let err = OperationError::new(
            Operation::ProcessQuery,
            &NyayaError::Transport("connection refused".into()),
        );
        let text = err.render(I18n::new(Language::Hindi));
        assert!(text.contains("प्रश्न संसाधित करना"));
        assert!(text.contains("connection refused"));
    }
}
