//! 액션 시스템: 키 바인딩, 커맨드바 항목, 도움말 내용의 단일 원천
//!
//! 키 입력은 활성 뷰의 범위(scope)에 따라 해석된다. 질문 입력 중에는
//! 일반 문자가 입력창으로 들어가야 하므로 `j`/`k`/`r`/`d` 같은 한 글자
//! 단축키는 목록 뷰에서만 동작한다.

use crate::models::ViewTab;
use crate::ui::components::command_bar::CommandItem;
use crate::ui::{I18n, TextKey};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Views
    ShowVoice,
    ShowAid,
    ShowEmergency,
    NextView,
    PrevView,
    // Language
    ToggleLanguage,
    LanguageEnglish,
    LanguageHindi,
    // System
    ShowHelp,
    Quit,
    // Assistant
    Submit,
    StartVoice,
    ScrollUp,
    ScrollDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteBack,
    DeleteForward,
    DeleteWord,
    ClearInput,
    // Lists
    MoveUp,
    MoveDown,
    Dial,
    Retry,
    CycleDistrict,
}

/// 바인딩이 유효한 뷰 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    Global,
    Assistant,
    /// 법률 지원 + 긴급 연락처
    Lists,
    /// 법률 지원 전용
    LegalAid,
}

impl KeyScope {
    pub fn applies_to(self, view: ViewTab) -> bool {
        match self {
            KeyScope::Global => true,
            KeyScope::Assistant => view == ViewTab::Voice,
            KeyScope::Lists => view != ViewTab::Voice,
            KeyScope::LegalAid => view == ViewTab::Aid,
        }
    }

    fn help_title(self) -> TextKey {
        match self {
            KeyScope::Global => TextKey::HelpGlobal,
            KeyScope::Assistant => TextKey::HelpAssistant,
            KeyScope::Lists | KeyScope::LegalAid => TextKey::HelpLists,
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: TextKey,
    pub scope: KeyScope,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub scope: KeyScope,
    pub action: Action,
}

pub static ACTION_DEFS: &[ActionDef] = &[
    // Views
    ActionDef {
        action: Action::ShowVoice,
        id: "show_voice",
        label: TextKey::TabVoice,
        scope: KeyScope::Global,
        shortcut_display: Some("F1"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ShowAid,
        id: "show_aid",
        label: TextKey::TabAid,
        scope: KeyScope::Global,
        shortcut_display: Some("F2"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ShowEmergency,
        id: "show_emergency",
        label: TextKey::TabEmergency,
        scope: KeyScope::Global,
        shortcut_display: Some("F3"),
        command_bar: None,
    },
    ActionDef {
        action: Action::NextView,
        id: "next_view",
        label: TextKey::CmdViews,
        scope: KeyScope::Global,
        shortcut_display: Some("Tab / S-Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::PrevView,
        id: "prev_view",
        label: TextKey::CmdViews,
        scope: KeyScope::Global,
        shortcut_display: None,
        command_bar: None,
    },
    // Language
    ActionDef {
        action: Action::ToggleLanguage,
        id: "toggle_language",
        label: TextKey::CmdLanguage,
        scope: KeyScope::Global,
        shortcut_display: Some("F5"),
        command_bar: Some(CommandBarEntry {
            key: "F5",
            priority: 80,
        }),
    },
    ActionDef {
        action: Action::LanguageEnglish,
        id: "language_en",
        label: TextKey::LangEnglish,
        scope: KeyScope::Global,
        shortcut_display: Some("F6"),
        command_bar: None,
    },
    ActionDef {
        action: Action::LanguageHindi,
        id: "language_hi",
        label: TextKey::LangHindi,
        scope: KeyScope::Global,
        shortcut_display: Some("F7"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: TextKey::CmdHelp,
        scope: KeyScope::Global,
        shortcut_display: Some("F9"),
        command_bar: Some(CommandBarEntry {
            key: "F9",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: TextKey::CmdQuit,
        scope: KeyScope::Global,
        shortcut_display: Some("F10 / Ctrl+C"),
        command_bar: Some(CommandBarEntry {
            key: "F10",
            priority: 99,
        }),
    },
    // Assistant
    ActionDef {
        action: Action::Submit,
        id: "submit",
        label: TextKey::CmdSend,
        scope: KeyScope::Assistant,
        shortcut_display: Some("Enter"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::StartVoice,
        id: "voice",
        label: TextKey::CmdVoice,
        scope: KeyScope::Assistant,
        shortcut_display: Some("F4 / Ctrl+R"),
        command_bar: Some(CommandBarEntry {
            key: "F4",
            priority: 21,
        }),
    },
    ActionDef {
        action: Action::ScrollUp,
        id: "scroll_up",
        label: TextKey::CmdScroll,
        scope: KeyScope::Assistant,
        shortcut_display: Some("↑ / ↓"),
        command_bar: Some(CommandBarEntry {
            key: "↑↓",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::ScrollDown,
        id: "scroll_down",
        label: TextKey::CmdScroll,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::CursorLeft,
        id: "cursor_left",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: Some("← → Home End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::CursorRight,
        id: "cursor_right",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::CursorHome,
        id: "cursor_home",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::CursorEnd,
        id: "cursor_end",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::DeleteBack,
        id: "delete_back",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: Some("Bksp / Del"),
        command_bar: None,
    },
    ActionDef {
        action: Action::DeleteForward,
        id: "delete_forward",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::DeleteWord,
        id: "delete_word",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: Some("Ctrl+W / Ctrl+U"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ClearInput,
        id: "clear_input",
        label: TextKey::EditInput,
        scope: KeyScope::Assistant,
        shortcut_display: None,
        command_bar: None,
    },
    // Lists
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: TextKey::CmdSelect,
        scope: KeyScope::Lists,
        shortcut_display: Some("↑↓ / j k"),
        command_bar: Some(CommandBarEntry {
            key: "↑↓",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: TextKey::CmdSelect,
        scope: KeyScope::Lists,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::Dial,
        id: "dial",
        label: TextKey::CmdCall,
        scope: KeyScope::Lists,
        shortcut_display: Some("Enter / c"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::Retry,
        id: "retry",
        label: TextKey::CmdRetry,
        scope: KeyScope::Lists,
        shortcut_display: Some("r"),
        command_bar: Some(CommandBarEntry {
            key: "r",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::CycleDistrict,
        id: "cycle_district",
        label: TextKey::CmdDistrict,
        scope: KeyScope::LegalAid,
        shortcut_display: Some("d"),
        command_bar: Some(CommandBarEntry {
            key: "d",
            priority: 41,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, scope: KeyScope, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        scope,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    use KeyScope::*;
    let none = Some(KeyModifiers::NONE);
    let ctrl = Some(KeyModifiers::CONTROL);

    vec![
        // 종료
        bind(KeyCode::F(10), None, Global, Action::Quit),
        bind(KeyCode::Char('c'), ctrl, Global, Action::Quit),
        bind(KeyCode::Char('q'), none, Lists, Action::Quit),
        // 뷰 전환
        bind(KeyCode::F(1), None, Global, Action::ShowVoice),
        bind(KeyCode::F(2), None, Global, Action::ShowAid),
        bind(KeyCode::F(3), None, Global, Action::ShowEmergency),
        bind(KeyCode::Tab, None, Global, Action::NextView),
        bind(KeyCode::BackTab, None, Global, Action::PrevView),
        // 언어
        bind(KeyCode::F(5), None, Global, Action::ToggleLanguage),
        bind(KeyCode::F(6), None, Global, Action::LanguageEnglish),
        bind(KeyCode::F(7), None, Global, Action::LanguageHindi),
        bind(KeyCode::F(9), None, Global, Action::ShowHelp),
        // 질문 입력
        bind(KeyCode::Enter, None, Assistant, Action::Submit),
        bind(KeyCode::F(4), None, Assistant, Action::StartVoice),
        bind(KeyCode::Char('r'), ctrl, Assistant, Action::StartVoice),
        bind(KeyCode::Up, None, Assistant, Action::ScrollUp),
        bind(KeyCode::PageUp, None, Assistant, Action::ScrollUp),
        bind(KeyCode::Down, None, Assistant, Action::ScrollDown),
        bind(KeyCode::PageDown, None, Assistant, Action::ScrollDown),
        bind(KeyCode::Left, None, Assistant, Action::CursorLeft),
        bind(KeyCode::Right, None, Assistant, Action::CursorRight),
        bind(KeyCode::Home, None, Assistant, Action::CursorHome),
        bind(KeyCode::End, None, Assistant, Action::CursorEnd),
        bind(KeyCode::Backspace, None, Assistant, Action::DeleteBack),
        bind(KeyCode::Delete, None, Assistant, Action::DeleteForward),
        bind(KeyCode::Char('w'), ctrl, Assistant, Action::DeleteWord),
        bind(KeyCode::Char('u'), ctrl, Assistant, Action::ClearInput),
        // 목록: 화살표 + Vim
        bind(KeyCode::Up, None, Lists, Action::MoveUp),
        bind(KeyCode::Char('k'), none, Lists, Action::MoveUp),
        bind(KeyCode::Down, None, Lists, Action::MoveDown),
        bind(KeyCode::Char('j'), none, Lists, Action::MoveDown),
        bind(KeyCode::Enter, None, Lists, Action::Dial),
        bind(KeyCode::Char('c'), none, Lists, Action::Dial),
        bind(KeyCode::Char('r'), none, Lists, Action::Retry),
        bind(KeyCode::Char('d'), none, LegalAid, Action::CycleDistrict),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 활성 뷰에서 키 입력에 대응하는 액션 조회
pub fn find_action(view: ViewTab, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches && binding.scope.applies_to(view)
        })
        .map(|binding| binding.action)
}

impl Action {
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 활성 뷰용 커맨드바 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items(view: ViewTab, i18n: I18n) -> Vec<CommandItem> {
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter(|def| def.scope.applies_to(view))
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| CommandItem::new(cb.key, i18n.tr(def.label)))
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (범위 제목, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries(
    i18n: I18n,
) -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let mut groups: Vec<(&'static str, Vec<(&'static str, &'static str)>)> = Vec::new();
    for def in ACTION_DEFS {
        let Some(keys) = def.shortcut_display else {
            continue;
        };
        let title = i18n.tr(def.scope.help_title());
        let entry = (keys, i18n.tr(def.label));
        match groups.iter_mut().find(|(t, _)| *t == title) {
            Some((_, entries)) => entries.push(entry),
            None => groups.push((title, vec![entry])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Language;

    #[test]
    fn test_every_action_has_def() {
        let bound: Vec<Action> = key_bindings().iter().map(|b| b.action).collect();
        for action in bound {
            assert!(action.def().is_some(), "{:?} has no definition", action);
        }
    }

    #[test]
    fn test_enter_depends_on_view() {
        assert_eq!(
            find_action(ViewTab::Voice, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::Submit)
        );
        assert_eq!(
            find_action(ViewTab::Emergency, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::Dial)
        );
    }

    #[test]
    fn test_letters_are_not_shortcuts_in_assistant() {
        for c in ['j', 'k', 'q', 'r', 'd', 'c'] {
            assert_eq!(
                find_action(ViewTab::Voice, KeyModifiers::NONE, KeyCode::Char(c)),
                None,
                "'{}' must reach the input",
                c
            );
        }
    }

    #[test]
    fn test_list_vim_keys() {
        assert_eq!(
            find_action(ViewTab::Aid, KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(ViewTab::Emergency, KeyModifiers::NONE, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(ViewTab::Aid, KeyModifiers::NONE, KeyCode::Char('r')),
            Some(Action::Retry)
        );
    }

    #[test]
    fn test_district_only_in_legal_aid() {
        assert_eq!(
            find_action(ViewTab::Aid, KeyModifiers::NONE, KeyCode::Char('d')),
            Some(Action::CycleDistrict)
        );
        assert_eq!(
            find_action(ViewTab::Emergency, KeyModifiers::NONE, KeyCode::Char('d')),
            None
        );
    }

    #[test]
    fn test_global_keys_everywhere() {
        for view in ViewTab::ALL {
            assert_eq!(
                find_action(view, KeyModifiers::NONE, KeyCode::F(5)),
                Some(Action::ToggleLanguage)
            );
            assert_eq!(
                find_action(view, KeyModifiers::CONTROL, KeyCode::Char('c')),
                Some(Action::Quit)
            );
            assert_eq!(
                find_action(view, KeyModifiers::SHIFT, KeyCode::BackTab),
                Some(Action::PrevView)
            );
        }
    }

    #[test]
    fn test_ctrl_r_is_voice_not_retry() {
        assert_eq!(
            find_action(ViewTab::Voice, KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::StartVoice)
        );
        assert_eq!(
            find_action(ViewTab::Aid, KeyModifiers::CONTROL, KeyCode::Char('r')),
            None
        );
    }

    #[test]
    fn test_generate_command_bar_items() {
        let i18n = I18n::new(Language::English);
        let voice: Vec<String> = generate_command_bar_items(ViewTab::Voice, i18n)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(voice.first().map(String::as_str), Some("Views"));
        assert!(voice.contains(&"Send".to_string()));
        assert!(!voice.contains(&"Call".to_string()));

        let aid = generate_command_bar_items(ViewTab::Aid, i18n);
        assert!(aid.iter().any(|c| c.label == "District"));
        let emergency = generate_command_bar_items(ViewTab::Emergency, i18n);
        assert!(!emergency.iter().any(|c| c.label == "District"));
        assert_eq!(emergency.last().map(|c| c.key.as_str()), Some("F10"));
    }

    #[test]
    fn test_generate_help_entries_grouped() {
        let entries = generate_help_entries(I18n::new(Language::English));
        let titles: Vec<&str> = entries.iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, vec!["General", "Voice Assistant", "Legal Aid / Emergency"]);
        let hindi = generate_help_entries(I18n::new(Language::Hindi));
        assert_eq!(hindi[0].0, "सामान्य");
    }
}
