use super::*;
use crate::models::Operation;
use crate::ui::MessageKey;

impl App {
    // === 목록 작업 ===

    /// 선택된 항목의 번호로 전화 걸기
    pub fn dial_selected(&mut self) {
        let Some(number) = self.selected_number() else {
            debug!(view = ?self.active_view(), "dial ignored: nothing selected");
            return;
        };

        match self.dialer.dial(&number) {
            Ok(()) => {
                info!(%number, "call started");
                let message = self
                    .i18n()
                    .fmt(MessageKey::Calling, &[("number", number)]);
                self.set_toast(&message);
            }
            Err(err) => {
                let err = OperationError::new(Operation::Dial, &err);
                self.show_operation_error(&err);
            }
        }
    }

    /// 실패한 목록 다시 불러오기 (명시적 요청만)
    pub fn retry_active_list(&mut self) {
        let started = match self.active_view() {
            ViewTab::Voice => false,
            ViewTab::Aid => self.legal_aid.retry(),
            ViewTab::Emergency => self.emergency.retry(),
        };
        if !started {
            debug!(view = ?self.active_view(), "retry ignored");
        }
    }

    /// 지역 필터 순환 (로드된 센터 기준, 다시 요청하지 않음)
    pub fn cycle_district(&mut self) {
        let Some(centers) = self.legal_aid.data() else {
            return;
        };
        self.aid_filter.cycle(centers);
        self.aid_selection.reset();
        debug!(district = ?self.aid_filter.district(), "district filter changed");
    }
}
