use super::*;
use crate::core::actions::generate_help_entries;
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    // === 다이얼로그 ===

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 도움말 표시 (F9)
    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    /// 도움말 전체 줄 수 (범위 제목 + 항목 + 빈 줄)
    fn help_line_count(&self) -> usize {
        generate_help_entries(self.i18n())
            .iter()
            .map(|(_, entries)| entries.len() + 2)
            .sum()
    }

    pub fn dialog_help_scroll_down(&mut self) {
        let max = self.help_line_count().saturating_sub(1);
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = (*scroll_offset + 1).min(max);
        }
    }

    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    /// 다이얼로그 모드 키 처리
    pub(super) fn handle_dialog_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.dialog {
            Some(DialogKind::Error { .. }) | Some(DialogKind::Message { .. }) => match code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.close_dialog(),
                _ => {}
            },
            Some(DialogKind::Help { .. }) => match code {
                KeyCode::Up | KeyCode::Char('k') => self.dialog_help_scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.dialog_help_scroll_down(),
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(9) | KeyCode::Char('q') => {
                    self.close_dialog()
                }
                _ => {}
            },
            None => {}
        }
    }
}
