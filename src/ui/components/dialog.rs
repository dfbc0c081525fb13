//! 다이얼로그 시스템
//!
//! 작업 실패 알림, 정보 메시지, 단축키 도움말을 화면 중앙에 띄운다.

use crate::core::actions::generate_help_entries;
use crate::ui::{I18n, Language, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 에러 다이얼로그
    Error { title: String, message: String },
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
    /// 단축키 도움말
    Help { scroll_offset: usize },
}

impl DialogKind {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DialogKind::Error { .. })
    }
}

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    error_color: Color,
    muted_color: Color,
    language: Language,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(30, 41, 59),
            fg_color: Color::Rgb(226, 232, 240),
            border_color: Color::Rgb(37, 99, 235),
            title_color: Color::Rgb(37, 99, 235),
            button_bg: Color::Rgb(37, 99, 235),
            button_fg: Color::White,
            error_color: Color::Rgb(248, 113, 113),
            muted_color: Color::Rgb(148, 163, 184),
            language: Language::English,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.tab_active_bg.to_color();
        self.title_color = theme.heading.to_color();
        self.button_bg = theme.tab_active_bg.to_color();
        self.button_fg = theme.tab_active_fg.to_color();
        self.error_color = theme.error.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Error { message, .. } | DialogKind::Message { message, .. } => {
                let w = 56u16.min(sw.saturating_sub(4)).max(30);
                let inner = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                // 줄바꿈까지 고려한 대략의 줄 수
                let lines: usize = message
                    .lines()
                    .map(|l| l.width().div_ceil(inner).max(1))
                    .sum::<usize>()
                    .max(1);
                let h = (5 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(6).max(10);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_button(&self, buf: &mut Buffer, x: u16, y: u16, label: &str) {
        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        let style = Style::default().fg(self.button_fg).bg(self.button_bg);

        buf.set_string(x, y, &padded_label, style);

        // 넓은 문자 continuation cell 배경색 보정
        for i in 0..width {
            if let Some(cell) = buf.cell_mut((x + i, y)) {
                cell.set_bg(self.button_bg);
            }
        }
    }

    /// 에러/메시지 다이얼로그 렌더링
    fn render_message(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str, is_error: bool) {
        let accent = if is_error {
            self.error_color
        } else {
            self.title_color
        };
        let border = if is_error {
            self.error_color
        } else {
            self.border_color
        };

        Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
        };

        Paragraph::new(message.to_string())
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        // OK 버튼
        let button_y = area.y + area.height.saturating_sub(2);
        let ok_label = self.i18n().tr(TextKey::Ok);
        let button_width = format!(" {} ", ok_label).width() as u16;
        let button_x = area.x + (area.width.saturating_sub(button_width)) / 2;
        self.render_button(buf, button_x, button_y, ok_label);
    }

    fn help_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (scope, entries) in generate_help_entries(self.i18n()) {
            lines.push(Line::from(Span::styled(
                scope,
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, label) in entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<14}", keys), Style::default().fg(self.fg_color)),
                    Span::styled(label, Style::default().fg(self.muted_color)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        Block::default()
            .title(" ? ")
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 1),
        };
        let lines: Vec<Line> = self.help_lines().into_iter().skip(scroll_offset).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);

        // 배경 클리어
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Error { title, message } | DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message, self.kind.is_error())
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_error_dialog_renders_title_message_and_ok() {
        let kind = DialogKind::error("Error", "Processing query failed.\nReason: HTTP error! status: 500");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(" Error "));
        assert!(text.contains("Processing query failed."));
        assert!(text.contains("status: 500"));
        assert!(text.contains(" OK "));
    }

    #[test]
    fn test_dialog_area_centered_and_bounded() {
        let kind = DialogKind::message("Info", "hello");
        let dialog = Dialog::new(&kind);
        let area = dialog.calculate_area(Rect::new(0, 0, 100, 30));
        assert_eq!(area.width, 56);
        assert_eq!(area.x, 22);
        let small = dialog.calculate_area(Rect::new(0, 0, 34, 12));
        assert!(small.width <= 30);
        assert!(small.height <= 8);
    }

    #[test]
    fn test_help_lists_bindings() {
        let kind = DialogKind::help();
        let dialog = Dialog::new(&kind);
        let text: Vec<String> = dialog.help_lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("F10")));
        assert!(text.iter().any(|l| l.contains("Enter")));
    }

    #[test]
    fn test_is_error() {
        assert!(DialogKind::error("t", "m").is_error());
        assert!(!DialogKind::message("t", "m").is_error());
        assert!(!DialogKind::help().is_error());
    }
}
