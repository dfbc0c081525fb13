use super::*;
use crate::core::actions::generate_command_bar_items;
use crate::models::LoadState;
use crate::ui::components::{
    AssistantView, CommandBar, Dialog, EmergencyView, Footer, Header, LegalAidView, StatusBar,
    TabBar, WarningScreen,
};
use crate::ui::components::assistant_view::response_lines;
use crate::ui::theme::ViewColors;
use crate::ui::MessageKey;
use ratatui::widgets::Block;
use ratatui::Frame;

impl App {
    /// 한 프레임 그리기
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();
        self.layout.update(size);
        let i18n = self.i18n();

        frame.render_widget(Block::default().style(self.theme.base()), size);

        if self.layout.is_too_small() {
            let (width, height) = self.layout.terminal_size();
            let warning = WarningScreen::new()
                .current_size(width, height)
                .i18n(i18n)
                .theme(&self.theme);
            frame.render_widget(warning, size);
            return;
        }

        let areas = self.layout.areas().clone();
        let compact = self.layout.is_compact();

        frame.render_widget(
            Header::new()
                .i18n(i18n)
                .show_tagline(!compact)
                .theme(&self.theme),
            areas.header,
        );
        frame.render_widget(
            TabBar::new(self.active_view())
                .i18n(i18n)
                .icons_only(compact)
                .theme(&self.theme),
            areas.tab_bar,
        );

        match self.active_view() {
            ViewTab::Voice => frame.render_widget(
                AssistantView::new(&self.assistant, i18n).theme(&self.theme),
                areas.content,
            ),
            ViewTab::Aid => frame.render_widget(
                LegalAidView::new(
                    self.legal_aid.state(),
                    self.legal_aid.data().map(Vec::as_slice),
                    &self.aid_filter,
                    i18n,
                )
                .selected(self.aid_selection.selected_index)
                .theme(&self.theme),
                areas.content,
            ),
            ViewTab::Emergency => frame.render_widget(
                EmergencyView::new(self.emergency.state(), self.emergency.data(), i18n)
                    .selected(self.emergency_selection.selected_index)
                    .theme(&self.theme),
                areas.content,
            ),
        }

        if areas.footer.height > 0 {
            frame.render_widget(Footer::new(i18n).theme(&self.theme), areas.footer);
        }

        let summary = self.status_summary();
        frame.render_widget(
            StatusBar::new()
                .summary(&summary)
                .toast(self.toast_display())
                .service(self.service_status)
                .i18n(i18n)
                .theme(&self.theme),
            areas.status_bar,
        );
        frame.render_widget(
            CommandBar::new()
                .commands(generate_command_bar_items(self.active_view(), i18n))
                .theme(&self.theme),
            areas.command_bar,
        );

        if let Some(kind) = &self.dialog {
            frame.render_widget(
                Dialog::new(kind).theme(&self.theme).language(self.language()),
                size,
            );
        }
    }

    /// 현재 언어로 그린 응답 줄 수 (응답이 없으면 0)
    pub(crate) fn response_line_count(&self) -> usize {
        self.assistant.advice().map_or(0, |advice| {
            response_lines(advice, self.i18n(), &ViewColors::default()).len()
        })
    }

    /// 상태바 왼쪽 요약: 활성 뷰 이름 + 뷰별 상태
    pub fn status_summary(&self) -> String {
        let i18n = self.i18n();
        let view = i18n.tr(self.active_view().label_key());
        let detail = match self.active_view() {
            ViewTab::Voice => self.assistant.response().map(|r| r.issue_type.clone()),
            ViewTab::Aid => (self.legal_aid.state() == LoadState::Loaded).then(|| {
                i18n.fmt(
                    MessageKey::CentersCount,
                    &[("count", self.visible_centers().len().to_string())],
                )
            }),
            ViewTab::Emergency => self
                .emergency
                .data()
                .map(|d| d.contact_count().to_string()),
        };
        match detail {
            Some(detail) => format!("{} · {}", view, detail),
            None => view.to_string(),
        }
    }
}
