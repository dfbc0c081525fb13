use super::*;
use crate::models::QueryRejection;

impl App {
    // === 어시스턴트 입력 ===

    /// 입력창에 문자 삽입 (전송 중에는 무시)
    pub fn insert_char(&mut self, c: char) {
        self.assistant.edit(|input| input.insert_char(c));
    }

    /// 현재 입력을 세션 언어로 제출. 빈 입력/중복 제출은 조용히 거부.
    pub fn submit_query(&mut self) {
        match self.assistant.submit(self.language()) {
            Ok(()) => {}
            Err(QueryRejection::EmptyText) => debug!("submit rejected: empty text"),
            Err(QueryRejection::InFlight) => debug!("submit rejected: already in flight"),
        }
    }

    pub fn start_voice_capture(&mut self) {
        if !self.assistant.simulate_voice_capture() {
            debug!("voice capture ignored");
        }
    }
}
