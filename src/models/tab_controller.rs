use crate::ui::TextKey;

/// 화면에 표시할 세 가지 뷰
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTab {
    Voice,
    Aid,
    Emergency,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Voice, ViewTab::Aid, ViewTab::Emergency];

    pub fn index(self) -> usize {
        match self {
            ViewTab::Voice => 0,
            ViewTab::Aid => 1,
            ViewTab::Emergency => 2,
        }
    }

    pub fn label_key(self) -> TextKey {
        match self {
            ViewTab::Voice => TextKey::TabVoice,
            ViewTab::Aid => TextKey::TabAid,
            ViewTab::Emergency => TextKey::TabEmergency,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewTab::Voice => "🎤",
            ViewTab::Aid => "⚖️",
            ViewTab::Emergency => "🚨",
        }
    }
}

/// 활성 뷰와 최초 활성화 여부 추적
#[derive(Debug, Clone)]
pub struct TabController {
    active: ViewTab,
    activated: [bool; 3],
}

impl TabController {
    /// 시작 뷰는 Voice (이미 활성화된 것으로 간주)
    pub fn new() -> Self {
        let mut activated = [false; 3];
        activated[ViewTab::Voice.index()] = true;
        Self {
            active: ViewTab::Voice,
            activated,
        }
    }

    pub fn active(&self) -> ViewTab {
        self.active
    }

    pub fn was_activated(&self, tab: ViewTab) -> bool {
        self.activated[tab.index()]
    }

    /// 뷰 전환. 이번이 처음 활성화라면 true.
    pub fn select(&mut self, tab: ViewTab) -> bool {
        self.active = tab;
        let first = !self.was_activated(tab);
        self.activated[tab.index()] = true;
        first
    }

    /// 다음 뷰로 순환
    pub fn next(&mut self) -> (ViewTab, bool) {
        let tab = ViewTab::ALL[(self.active.index() + 1) % ViewTab::ALL.len()];
        (tab, self.select(tab))
    }

    /// 이전 뷰로 순환
    pub fn prev(&mut self) -> (ViewTab, bool) {
        let len = ViewTab::ALL.len();
        let tab = ViewTab::ALL[(self.active.index() + len - 1) % len];
        (tab, self.select(tab))
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}
