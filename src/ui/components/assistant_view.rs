// Assistant view - 질문 입력 + 응답 표시
//
// 줄 빌더는 순수 함수로 두고, 위젯은 모델 상태를 읽어 배치만 한다.

use crate::models::query_model::{QueryModel, ReceivedAdvice};
use crate::models::TextInput;
use crate::ui::theme::ViewColors;
use crate::ui::{I18n, MessageKey, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

/// 응답 본문 줄 목록
///
/// 분류/수신 시각 → 법률 조언 → 다음 단계(받은 순서 그대로) → 긴급 연락처(있을 때만)
pub fn response_lines(advice: &ReceivedAdvice, i18n: I18n, colors: &ViewColors) -> Vec<Line<'static>> {
    let response = &advice.response;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("⚖️ {}", response.issue_type),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", response.language.toggle_label()),
            Style::default().fg(colors.muted),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        i18n.fmt(
            MessageKey::AnsweredAt,
            &[
                ("time", advice.received_at.format("%H:%M:%S").to_string()),
                ("language", response.language.toggle_label().to_string()),
            ],
        ),
        Style::default().fg(colors.muted),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        i18n.tr(TextKey::LegalAdvice),
        colors.heading_style(),
    )));
    for paragraph in response.advice.lines() {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(colors.fg),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        i18n.tr(TextKey::NextSteps),
        colors.heading_style(),
    )));
    for (i, step) in response.next_steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(colors.accent)),
            Span::styled(step.clone(), Style::default().fg(colors.fg)),
        ]));
    }

    if response.has_emergency_contacts() {
        if let Some(contacts) = response.emergency_contacts.as_deref() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                i18n.tr(TextKey::ResponseEmergencyContacts),
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            )));
            for contact in contacts {
                lines.push(Line::from(vec![
                    Span::styled(format!("📞 {}: ", contact.name), Style::default().fg(colors.fg)),
                    Span::styled(
                        contact.number.clone(),
                        Style::default()
                            .fg(colors.phone)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }
    }

    lines
}

/// 전송/음성 버튼 줄 (상태에 따라 아이콘과 활성 여부가 바뀐다)
pub fn button_line(model: &QueryModel, i18n: I18n, colors: &ViewColors) -> Line<'static> {
    let enabled = |on: bool| {
        if on {
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        }
    };

    let send_icon = if model.is_submitting() { "⏳" } else { "📝" };
    let send = format!("[ {} {} ]", send_icon, i18n.tr(TextKey::SendText));

    let voice = if model.is_recording() {
        format!("[ 🔴 {} ]", i18n.tr(TextKey::Listening))
    } else {
        format!("[ 🎤 {} ]", i18n.tr(TextKey::Voice))
    };

    Line::from(vec![
        Span::styled(send, enabled(model.can_submit())),
        Span::raw("  "),
        Span::styled(voice, enabled(model.can_capture() || model.is_recording())),
    ])
}

/// 입력창 내용 줄. 비어 있으면 placeholder, 커서 위치는 반전 표시.
pub fn input_line(
    input: &TextInput,
    i18n: I18n,
    width: usize,
    show_cursor: bool,
    colors: &ViewColors,
) -> Line<'static> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    if input.value().is_empty() {
        let mut spans = Vec::new();
        if show_cursor {
            spans.push(Span::styled(" ", cursor_style));
        }
        spans.push(Span::styled(
            i18n.tr(TextKey::InputPlaceholder),
            Style::default().fg(colors.muted),
        ));
        return Line::from(spans);
    }

    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor_chars();

    // 커서가 보이도록 앞쪽 문자 생략
    let mut start = 0;
    let width = width.max(1);
    let cursor_width = |from: usize| -> usize {
        chars[from..cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum::<usize>()
            + 1
    };
    while start < cursor && cursor_width(start) > width {
        start += 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
    let after: String = chars.iter().skip(cursor + 1).collect();

    let text_style = Style::default().fg(colors.fg);
    let mut spans = vec![Span::styled(before, text_style)];
    if show_cursor {
        spans.push(Span::styled(at, cursor_style));
    } else if cursor < chars.len() {
        spans.push(Span::styled(at, text_style));
    }
    spans.push(Span::styled(after, text_style));
    Line::from(spans)
}

pub struct AssistantView<'a> {
    model: &'a QueryModel,
    i18n: I18n,
    colors: ViewColors,
}

impl<'a> AssistantView<'a> {
    pub fn new(model: &'a QueryModel, i18n: I18n) -> Self {
        Self {
            model,
            i18n,
            colors: ViewColors::default(),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.colors = ViewColors::from_theme(theme);
        self
    }
}

impl Widget for AssistantView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 제목 | 입력창 | 버튼 | 응답
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            format!("🎤 {}", self.i18n.tr(TextKey::AskQuestion)),
            self.colors.heading_style(),
        )))
        .render(chunks[0], buf);

        let editable = !self.model.is_submitting();
        let border_color = if editable {
            self.colors.selected_border
        } else {
            self.colors.border
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner_width = input_block.inner(chunks[1]).width as usize;
        Paragraph::new(input_line(
            self.model.input(),
            self.i18n,
            inner_width,
            editable,
            &self.colors,
        ))
        .block(input_block)
        .render(chunks[1], buf);

        Paragraph::new(button_line(self.model, self.i18n, &self.colors)).render(chunks[2], buf);

        if let Some(advice) = self.model.advice() {
            let block = Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(self.colors.border));
            Paragraph::new(response_lines(advice, self.i18n, &self.colors))
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.model.scroll, 0))
                .render(chunks[3], buf);
        }
    }
}
