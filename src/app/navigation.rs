use super::controllers;
use super::*;
use crate::core::actions::find_action;
use crate::ui::MessageKey;
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    /// 키 입력 처리: 다이얼로그 → 액션 레지스트리 → (어시스턴트) 문자 입력
    pub fn handle_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        if self.is_dialog_active() {
            self.handle_dialog_key(modifiers, code);
            return;
        }

        if let Some(action) = find_action(self.active_view(), modifiers, code) {
            self.execute_action(action);
            return;
        }

        if self.active_view() == ViewTab::Voice {
            if let KeyCode::Char(c) = code {
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    self.insert_char(c);
                }
            }
        }
    }

    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        debug!(action = action.def().map_or("unknown", |d| d.id), "execute action");
        match action {
            Action::Quit => self.quit(),
            Action::ShowVoice => self.select_view(ViewTab::Voice),
            Action::ShowAid => self.select_view(ViewTab::Aid),
            Action::ShowEmergency => self.select_view(ViewTab::Emergency),
            Action::NextView => {
                let (tab, first) = self.tabs.next();
                self.on_view_activated(tab, first);
            }
            Action::PrevView => {
                let (tab, first) = self.tabs.prev();
                self.on_view_activated(tab, first);
            }
            Action::ToggleLanguage => {
                self.locale.toggle();
                self.on_language_changed();
            }
            Action::LanguageEnglish => self.set_language(Language::English),
            Action::LanguageHindi => self.set_language(Language::Hindi),
            Action::ShowHelp => self.show_help(),
            Action::Submit
            | Action::StartVoice
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::CursorLeft
            | Action::CursorRight
            | Action::CursorHome
            | Action::CursorEnd
            | Action::DeleteBack
            | Action::DeleteForward
            | Action::DeleteWord
            | Action::ClearInput => controllers::assistant_controller::execute(self, action),
            Action::MoveUp
            | Action::MoveDown
            | Action::Dial
            | Action::Retry
            | Action::CycleDistrict => controllers::list_controller::execute(self, action),
        }
    }

    // === 뷰 전환 ===

    pub fn select_view(&mut self, tab: ViewTab) {
        let first = self.tabs.select(tab);
        self.on_view_activated(tab, first);
    }

    /// 뷰 활성화 시 목록 로드 (이미 로드했거나 실패했으면 아무것도 하지 않음)
    fn on_view_activated(&mut self, tab: ViewTab, first: bool) {
        debug!(view = ?tab, first, "view activated");
        match tab {
            ViewTab::Voice => {}
            ViewTab::Aid => {
                self.legal_aid.mount();
            }
            ViewTab::Emergency => {
                self.emergency.mount();
            }
        }
    }

    // === 언어 ===

    pub fn set_language(&mut self, language: Language) {
        if self.language() == language {
            return;
        }
        self.locale.set(language);
        self.on_language_changed();
    }

    fn on_language_changed(&mut self) {
        info!(language = self.language().code(), "language changed");
        let i18n = self.i18n();
        self.set_toast(i18n.msg(MessageKey::LanguageChanged));
    }

    // === 목록 선택 ===

    /// 활성 목록의 항목 수
    pub(super) fn active_list_len(&self) -> usize {
        match self.active_view() {
            ViewTab::Voice => 0,
            ViewTab::Aid => self.visible_centers().len(),
            ViewTab::Emergency => self
                .emergency
                .data()
                .map(|d| d.contact_count())
                .unwrap_or(0),
        }
    }

    fn active_selection_mut(&mut self) -> Option<&mut ListSelection> {
        match self.active_view() {
            ViewTab::Voice => None,
            ViewTab::Aid => Some(&mut self.aid_selection),
            ViewTab::Emergency => Some(&mut self.emergency_selection),
        }
    }

    pub fn move_selection_up(&mut self) {
        if let Some(selection) = self.active_selection_mut() {
            selection.move_up();
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.active_list_len();
        if let Some(selection) = self.active_selection_mut() {
            selection.move_down(len);
        }
    }

    /// 선택된 항목의 전화번호
    pub fn selected_number(&self) -> Option<String> {
        match self.active_view() {
            ViewTab::Voice => None,
            ViewTab::Aid => self
                .visible_centers()
                .get(self.aid_selection.selected_index)
                .map(|center| center.phone.clone()),
            ViewTab::Emergency => self
                .emergency
                .data()
                .and_then(|d| d.contact_at(self.emergency_selection.selected_index))
                .map(|contact| contact.number.clone()),
        }
    }

    // === 토스트 ===

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= TOAST_SECS {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < TOAST_SECS {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}
