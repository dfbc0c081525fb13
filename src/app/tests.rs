use super::*;
use crate::models::query_model::tests::{tenant_response, MockAdvice};
use crate::models::voice_capture::SAMPLE_PHRASES;
use crate::models::{AdviceResponse, ContactGroup, EmergencyContact, LoadState, Operation};
use crate::utils::error::{NyayaError, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

struct MockDirectory {
    centers: Vec<LegalAidCenter>,
    contacts: EmergencyDirectory,
    fail: AtomicBool,
    center_calls: AtomicUsize,
    contact_calls: AtomicUsize,
}

impl MockDirectory {
    fn new(centers: Vec<LegalAidCenter>, contacts: EmergencyDirectory) -> Self {
        Self {
            centers,
            contacts,
            fail: AtomicBool::new(false),
            center_calls: AtomicUsize::new(0),
            contact_calls: AtomicUsize::new(0),
        }
    }

    fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }
}

impl DirectoryService for MockDirectory {
    fn legal_aid_centers(&self) -> Result<Vec<LegalAidCenter>> {
        self.center_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(NyayaError::Service { status: 503 });
        }
        Ok(self.centers.clone())
    }

    fn emergency_contacts(&self) -> Result<EmergencyDirectory> {
        self.contact_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(NyayaError::Transport("connection refused".into()));
        }
        Ok(self.contacts.clone())
    }
}

struct MockHealth;

impl HealthService for MockHealth {
    fn health(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth {
            status: "healthy".to_string(),
            service: Some("NyayaSathi Legal Aid API".to_string()),
            version: Some("1.0.0".to_string()),
        })
    }
}

struct RecordingDialer {
    dialed: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl Dialer for RecordingDialer {
    fn dial(&self, number: &str) -> Result<()> {
        if self.fail {
            return Err(NyayaError::Dial {
                number: number.to_string(),
                reason: "no handler".to_string(),
            });
        }
        self.dialed.borrow_mut().push(number.to_string());
        Ok(())
    }
}

struct Harness {
    app: App,
    advice: Arc<MockAdvice>,
    replies: Sender<Result<AdviceResponse>>,
    directory: Arc<MockDirectory>,
    dialed: Rc<RefCell<Vec<String>>>,
}

fn center(id: u32, name: &str, phone: &str, district: &str) -> LegalAidCenter {
    LegalAidCenter {
        id,
        name: name.to_string(),
        address: "Civil Court Campus".to_string(),
        phone: phone.to_string(),
        services: vec!["Free legal aid".to_string()],
        latitude: 28.6,
        longitude: 77.2,
        district: district.to_string(),
    }
}

fn contact(name: &str, number: &str, category: &str) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        number: number.to_string(),
        description: format!("{} helpline", name),
        category: category.to_string(),
    }
}

fn sample_centers() -> Vec<LegalAidCenter> {
    vec![
        center(1, "Delhi State Legal Services", "011-23385321", "Delhi"),
        center(2, "Pune District Legal Services", "020-26124419", "Pune"),
        center(3, "Saket Court Legal Aid", "011-29561352", "Delhi"),
    ]
}

fn sample_contacts() -> EmergencyDirectory {
    EmergencyDirectory::new(vec![
        ContactGroup {
            category: "police".to_string(),
            contacts: vec![contact("Police", "100", "police")],
        },
        ContactGroup {
            category: "women".to_string(),
            contacts: vec![contact("Women Helpline", "1091", "women")],
        },
    ])
}

fn harness_with(directory: MockDirectory, dial_fails: bool) -> Harness {
    let (advice, replies) = MockAdvice::new();
    let directory = Arc::new(directory);
    let dialed = Rc::new(RefCell::new(Vec::new()));

    let config = AppConfig {
        voice_capture_delay_ms: 0,
        ..AppConfig::default()
    };
    let services = Services {
        advice: advice.clone(),
        directory: directory.clone(),
        health: Arc::new(MockHealth),
        dialer: Box::new(RecordingDialer {
            dialed: Rc::clone(&dialed),
            fail: dial_fails,
        }),
    };

    Harness {
        app: App::new(&config, services),
        advice,
        replies,
        directory,
        dialed,
    }
}

fn harness() -> Harness {
    harness_with(MockDirectory::new(sample_centers(), sample_contacts()), false)
}

fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
    for _ in 0..2000 {
        app.tick();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    panic!("app did not settle");
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyModifiers::NONE, code);
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buf = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_landlord_query_end_to_end() {
    let mut h = harness();
    type_text(&mut h.app, "My landlord is threatening me");
    press(&mut h.app, KeyCode::Enter);
    assert!(h.app.assistant.is_submitting());

    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());

    let calls = h.advice.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "My landlord is threatening me");
    assert_eq!(calls[0].language, Language::English);

    let response = h.app.assistant.response().unwrap();
    assert_eq!(response.issue_type, "Tenant Harassment");
    assert_eq!(
        response.next_steps,
        vec!["Document incidents", "Contact housing authority"]
    );
    assert!(response.emergency_contacts.is_none());
    assert!(h.app.dialog.is_none());

    let screen = render(&mut h.app, 80, 30);
    let step_one = screen
        .iter()
        .position(|row| row.contains("1. Document incidents"))
        .unwrap();
    let step_two = screen
        .iter()
        .position(|row| row.contains("2. Contact housing authority"))
        .unwrap();
    assert!(step_one < step_two);
    assert!(screen.iter().any(|row| row.contains("Tenant Harassment")));
    assert!(!screen.iter().any(|row| row.contains("Emergency Contacts:")));
}

#[test]
fn test_response_scroll_is_bounded() {
    let mut h = harness();
    type_text(&mut h.app, "My landlord is threatening me");
    press(&mut h.app, KeyCode::Enter);
    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());

    let lines = h.app.response_line_count();
    assert!(lines > 1);
    for _ in 0..(lines + 20) {
        press(&mut h.app, KeyCode::PageDown);
    }
    assert_eq!(h.app.assistant.scroll as usize, lines - 1);

    let screen = render(&mut h.app, 80, 30);
    assert!(screen.iter().any(|row| row.contains("2. Contact housing authority")));

    press(&mut h.app, KeyCode::Up);
    assert_eq!(h.app.assistant.scroll as usize, lines - 2);
}

#[test]
fn test_empty_submit_makes_no_call() {
    let mut h = harness();
    press(&mut h.app, KeyCode::Enter);
    type_text(&mut h.app, "   ");
    press(&mut h.app, KeyCode::Enter);

    assert!(!h.app.assistant.is_submitting());
    assert_eq!(h.advice.call_count(), 0);
    assert!(h.app.dialog.is_none());
}

#[test]
fn test_failed_query_shows_dialog_and_keeps_previous_response() {
    let mut h = harness();
    type_text(&mut h.app, "My landlord is threatening me");
    press(&mut h.app, KeyCode::Enter);
    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());

    press(&mut h.app, KeyCode::Enter);
    h.replies
        .send(Err(NyayaError::Service { status: 500 }))
        .unwrap();
    settle(&mut h.app, |app| app.dialog.is_some());

    match h.app.dialog.as_ref().unwrap() {
        DialogKind::Error { title, message } => {
            assert_eq!(title, "Error");
            assert!(message.contains("Processing query"));
            assert!(message.contains("500"));
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
    assert_eq!(
        h.app.assistant.response().unwrap().issue_type,
        "Tenant Harassment"
    );
    assert!(!h.app.assistant.is_submitting());

    press(&mut h.app, KeyCode::Esc);
    assert!(h.app.dialog.is_none());
}

#[test]
fn test_input_ignored_while_submitting() {
    let mut h = harness();
    type_text(&mut h.app, "help");
    press(&mut h.app, KeyCode::Enter);
    type_text(&mut h.app, "xyz");
    press(&mut h.app, KeyCode::Enter);
    assert_eq!(h.app.assistant.text(), "help");

    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());
    assert_eq!(h.advice.call_count(), 1);
}

#[test]
fn test_views_load_once_on_first_activation() {
    let mut h = harness();
    assert_eq!(h.app.legal_aid.state(), LoadState::Idle);
    assert_eq!(h.app.emergency.state(), LoadState::Idle);

    press(&mut h.app, KeyCode::F(2));
    settle(&mut h.app, |app| app.legal_aid.state() == LoadState::Loaded);
    assert_eq!(h.app.emergency.state(), LoadState::Idle);

    press(&mut h.app, KeyCode::F(1));
    press(&mut h.app, KeyCode::F(2));
    press(&mut h.app, KeyCode::Tab);
    assert_eq!(h.app.active_view(), ViewTab::Emergency);
    settle(&mut h.app, |app| app.emergency.state() == LoadState::Loaded);
    press(&mut h.app, KeyCode::BackTab);
    press(&mut h.app, KeyCode::F(3));
    settle(&mut h.app, |_| true);

    assert_eq!(h.directory.center_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.directory.contact_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_switching_views_keeps_assistant_state() {
    let mut h = harness();
    type_text(&mut h.app, "My husband beats me");
    press(&mut h.app, KeyCode::F(3));
    press(&mut h.app, KeyCode::F(2));
    press(&mut h.app, KeyCode::F(1));
    assert_eq!(h.app.assistant.text(), "My husband beats me");
}

#[test]
fn test_emergency_groups_render_in_received_order() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(3));
    settle(&mut h.app, |app| app.emergency.state() == LoadState::Loaded);

    let screen = render(&mut h.app, 80, 30);
    let police = screen.iter().position(|row| row.trim() == "Police").unwrap();
    let women = screen.iter().position(|row| row.trim() == "Women").unwrap();
    assert!(police < women);
}

#[test]
fn test_language_switch_keeps_data_and_tags_next_query() {
    let mut h = harness();
    type_text(&mut h.app, "My landlord is threatening me");
    press(&mut h.app, KeyCode::Enter);
    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());

    press(&mut h.app, KeyCode::F(5));
    assert_eq!(h.app.language(), Language::Hindi);
    assert_eq!(h.app.toast_display(), Some("भाषा: हिंदी"));

    let response = h.app.assistant.response().unwrap();
    assert_eq!(response.issue_type, "Tenant Harassment");
    assert_eq!(response.language, Language::English);

    press(&mut h.app, KeyCode::Enter);
    h.replies.send(Ok(tenant_response())).unwrap();
    settle(&mut h.app, |app| !app.assistant.is_submitting());
    let calls = h.advice.calls.lock().unwrap().clone();
    assert_eq!(calls[1].language, Language::Hindi);

    press(&mut h.app, KeyCode::F(6));
    assert_eq!(h.app.language(), Language::English);
}

#[test]
fn test_directory_failure_then_explicit_retry() {
    let mut h = harness_with(
        MockDirectory::new(sample_centers(), sample_contacts()).failing(),
        false,
    );
    press(&mut h.app, KeyCode::F(2));
    settle(&mut h.app, |app| app.dialog.is_some());

    assert_eq!(h.app.legal_aid.state(), LoadState::Failed);
    match h.app.dialog.as_ref().unwrap() {
        DialogKind::Error { message, .. } => {
            assert!(message.contains("Loading legal aid centers"));
            assert!(message.contains("503"));
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
    press(&mut h.app, KeyCode::Enter);
    assert!(h.app.dialog.is_none());

    let screen = render(&mut h.app, 80, 30);
    assert!(screen.iter().any(|row| row.contains("Press r to retry")));

    // 재활성화는 다시 요청하지 않는다
    press(&mut h.app, KeyCode::F(1));
    press(&mut h.app, KeyCode::F(2));
    assert_eq!(h.directory.center_calls.load(Ordering::SeqCst), 1);

    h.directory.fail.store(false, Ordering::SeqCst);
    press(&mut h.app, KeyCode::Char('r'));
    settle(&mut h.app, |app| app.legal_aid.state() == LoadState::Loaded);
    assert_eq!(h.directory.center_calls.load(Ordering::SeqCst), 2);
    assert_eq!(h.app.visible_centers().len(), 3);
}

#[test]
fn test_dial_selected_emergency_contact() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(3));
    settle(&mut h.app, |app| app.emergency.state() == LoadState::Loaded);

    press(&mut h.app, KeyCode::Char('j'));
    press(&mut h.app, KeyCode::Enter);
    assert_eq!(*h.dialed.borrow(), vec!["1091".to_string()]);
    assert_eq!(h.app.toast_display(), Some("Calling 1091"));

    // 목록 끝에서 더 내려가지 않는다
    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Char('c'));
    assert_eq!(h.dialed.borrow().len(), 2);
    assert_eq!(h.dialed.borrow()[1], "1091");
}

#[test]
fn test_dial_failure_shows_error_dialog() {
    let mut h = harness_with(MockDirectory::new(sample_centers(), sample_contacts()), true);
    press(&mut h.app, KeyCode::F(3));
    settle(&mut h.app, |app| app.emergency.state() == LoadState::Loaded);

    press(&mut h.app, KeyCode::Enter);
    match h.app.dialog.as_ref().unwrap() {
        DialogKind::Error { message, .. } => {
            assert!(message.contains("Placing call"));
            assert!(message.contains("100"));
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
}

#[test]
fn test_district_filter_narrows_centers_without_refetch() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(2));
    settle(&mut h.app, |app| app.legal_aid.state() == LoadState::Loaded);

    press(&mut h.app, KeyCode::Char('d'));
    assert_eq!(h.app.aid_filter.district(), Some("Delhi"));
    let names: Vec<&str> = h
        .app
        .visible_centers()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Delhi State Legal Services", "Saket Court Legal Aid"]);

    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Enter);
    assert_eq!(*h.dialed.borrow(), vec!["011-29561352".to_string()]);

    press(&mut h.app, KeyCode::Char('d'));
    press(&mut h.app, KeyCode::Char('d'));
    assert_eq!(h.app.aid_filter.district(), None);
    assert_eq!(h.directory.center_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_voice_capture_fills_input_without_submitting() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(4));
    settle(&mut h.app, |app| !app.assistant.is_recording());

    assert!(SAMPLE_PHRASES
        .iter()
        .any(|phrase| *phrase == h.app.assistant.text()));
    assert_eq!(h.advice.call_count(), 0);
    assert!(!h.app.assistant.is_submitting());
}

#[test]
fn test_letters_in_list_views_do_not_edit_input() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(2));
    type_text(&mut h.app, "xyz");
    press(&mut h.app, KeyCode::F(1));
    assert_eq!(h.app.assistant.text(), "");
}

#[test]
fn test_health_check_sets_online() {
    let mut h = harness();
    settle(&mut h.app, |app| app.service_status != ServiceStatus::Checking);
    assert_eq!(h.app.service_status, ServiceStatus::Online);
}

#[test]
fn test_help_dialog_scrolls_and_closes() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(9));
    assert_eq!(h.app.dialog, Some(DialogKind::Help { scroll_offset: 0 }));

    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Up);
    assert_eq!(h.app.dialog, Some(DialogKind::Help { scroll_offset: 1 }));

    // 다이얼로그가 열려 있는 동안 문자는 입력창으로 가지 않는다
    press(&mut h.app, KeyCode::Char('a'));
    press(&mut h.app, KeyCode::Esc);
    assert!(h.app.dialog.is_none());
    assert_eq!(h.app.assistant.text(), "");
}

#[test]
fn test_quit_keys() {
    let mut h = harness();
    press(&mut h.app, KeyCode::F(10));
    assert!(h.app.should_quit());

    let mut h = harness();
    h.app.handle_key(KeyModifiers::CONTROL, KeyCode::Char('c'));
    assert!(h.app.should_quit());

    let mut h = harness();
    press(&mut h.app, KeyCode::F(3));
    press(&mut h.app, KeyCode::Char('q'));
    assert!(h.app.should_quit());
}

#[test]
fn test_too_small_terminal_shows_warning() {
    let mut h = harness();
    let screen = render(&mut h.app, 30, 10);
    assert!(screen.iter().any(|row| row.contains("Terminal Too Small")));
}

#[test]
fn test_status_summary_per_view() {
    let mut h = harness();
    assert_eq!(h.app.status_summary(), "Voice Assistant");

    press(&mut h.app, KeyCode::F(2));
    settle(&mut h.app, |app| app.legal_aid.state() == LoadState::Loaded);
    assert_eq!(h.app.status_summary(), "Legal Aid · 3 centers");

    let screen = render(&mut h.app, 80, 24);
    assert!(screen[22].contains("3 centers"));
}

#[test]
fn test_operation_error_uses_current_language() {
    let mut h = harness();
    h.app.set_language(Language::Hindi);
    let err = OperationError {
        operation: Operation::LoadContacts,
        message: "HTTP error! status: 404".to_string(),
    };
    h.app.show_operation_error(&err);
    match h.app.dialog.as_ref().unwrap() {
        DialogKind::Error { title, message } => {
            assert_eq!(title, "त्रुटि");
            assert!(message.contains("404"));
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
}
