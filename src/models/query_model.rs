// Query model - 어시스턴트 질문 수명주기
//
// Idle → Submitting → Idle (성공/실패 모두 다시 제출 가능 상태로 복귀)

use crate::models::advice::{AdviceResponse, Query};
use crate::models::operation::{Operation, OperationError};
use crate::models::text_input::TextInput;
use crate::models::voice_capture::VoiceCapture;
use crate::system::{AdviceService, PendingRequest};
use crate::ui::Language;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Submitting,
}

/// 제출 거부 사유. 네트워크 호출은 발생하지 않는다.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryRejection {
    #[error("query text is empty")]
    EmptyText,
    #[error("a query is already in flight")]
    InFlight,
}

/// 마지막으로 받은 응답 + 수신 시각
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedAdvice {
    pub response: AdviceResponse,
    pub received_at: DateTime<Local>,
}

pub struct QueryModel {
    service: Arc<dyn AdviceService>,
    input: TextInput,
    state: QueryState,
    pending: Option<PendingRequest<AdviceResponse>>,
    advice: Option<ReceivedAdvice>,
    error: Option<OperationError>,
    voice: VoiceCapture,
    /// 응답 영역 스크롤 (줄 단위)
    pub scroll: u16,
}

impl QueryModel {
    pub fn new(service: Arc<dyn AdviceService>, voice: VoiceCapture) -> Self {
        Self {
            service,
            input: TextInput::new(),
            state: QueryState::Idle,
            pending: None,
            advice: None,
            error: None,
            voice,
            scroll: 0,
        }
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == QueryState::Submitting
    }

    pub fn is_recording(&self) -> bool {
        self.voice.is_recording()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn advice(&self) -> Option<&ReceivedAdvice> {
        self.advice.as_ref()
    }

    pub fn response(&self) -> Option<&AdviceResponse> {
        self.advice.as_ref().map(|a| &a.response)
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    /// 보고되지 않은 에러를 꺼낸다 (다이얼로그 표시용)
    pub fn take_error(&mut self) -> Option<OperationError> {
        self.error.take()
    }

    /// 전송 버튼 활성화 조건
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.input.is_blank()
    }

    /// 음성 버튼 활성화 조건
    pub fn can_capture(&self) -> bool {
        !self.is_submitting() && !self.is_recording()
    }

    // === 입력 편집 (전송 중에는 무시) ===

    pub fn edit(&mut self, f: impl FnOnce(&mut TextInput)) {
        if self.is_submitting() {
            return;
        }
        f(&mut self.input);
    }

    #[cfg(test)]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit(|input| input.set(text));
    }

    // === 제출 ===

    /// 현재 입력으로 질문 제출
    pub fn submit(&mut self, language: Language) -> Result<(), QueryRejection> {
        if self.is_submitting() {
            debug!("submit ignored: already in flight");
            return Err(QueryRejection::InFlight);
        }
        if self.input.is_blank() {
            return Err(QueryRejection::EmptyText);
        }

        let query = Query::new(self.input.value(), language);
        info!(
            language = language.code(),
            chars = query.text.chars().count(),
            "submitting query"
        );

        let service = Arc::clone(&self.service);
        self.pending = Some(PendingRequest::spawn("text-query", move || {
            service.classify(&query)
        }));
        self.state = QueryState::Submitting;
        Ok(())
    }

    /// 진행 중인 요청/녹음 상태 갱신. 상태가 바뀌면 true.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(phrase) = self.voice.poll_at(now) {
            info!(phrase, "voice capture finished");
            self.input.set(phrase);
            changed = true;
        }

        let Some(result) = self.pending.as_ref().and_then(|p| p.poll()) else {
            return changed;
        };
        let elapsed = self.pending.as_ref().map(|p| p.elapsed());
        self.pending = None;
        self.state = QueryState::Idle;

        match result {
            Ok(response) => {
                info!(
                    issue_type = %response.issue_type,
                    steps = response.next_steps.len(),
                    elapsed_ms = elapsed.map(|d| d.as_millis() as u64),
                    "query answered"
                );
                self.advice = Some(ReceivedAdvice {
                    response,
                    received_at: Local::now(),
                });
                self.error = None;
                self.scroll = 0;
            }
            Err(err) => {
                // 이전 응답은 그대로 유지
                warn!(error = %err, "query failed");
                self.error = Some(OperationError::new(Operation::ProcessQuery, &err));
            }
        }
        true
    }

    // === 음성 입력 시뮬레이션 ===

    /// 녹음 시작. 녹음/전송 중이면 무시.
    pub fn simulate_voice_capture(&mut self) -> bool {
        self.simulate_voice_capture_at(Instant::now())
    }

    pub fn simulate_voice_capture_at(&mut self, now: Instant) -> bool {
        if self.is_submitting() {
            return false;
        }
        let started = self.voice.start_at(now);
        if started {
            info!(delay_ms = self.voice.delay().as_millis() as u64, "voice capture started");
        }
        started
    }

    /// 응답 아래로 스크롤. 마지막 줄이 맨 위에 올 때까지만 내려간다.
    pub fn scroll_down(&mut self, line_count: usize) {
        let max = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
