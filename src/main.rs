mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::{App, Services};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use system::config::API_URL_ENV;
use system::{AppConfig, HttpServiceClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::Language;

/// 이벤트 대기 간격 (진행 중인 요청 결과를 반영하는 주기)
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "nyayasathi", version, about = "Bilingual legal guidance in the terminal")]
struct Cli {
    /// Backend base URL (overrides config file and NYAYASATHI_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start-up language: en or hi
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unsupported language '{}' (use en or hi)", value))
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = AppConfig::config_path(cli.config.as_deref());
    let mut config = AppConfig::load_from(path.as_deref()).context("failed to load config")?;

    config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    config.apply_api_url_override(cli.api_url.clone());
    if let Some(language) = cli.lang {
        config.language = language;
    }
    if let Some(timeout) = cli.timeout_ms {
        config.request_timeout_ms = timeout;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// 파일 로거 초기화 (터미널은 TUI가 점유)
fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nyayasathi=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config)?;

    let client = HttpServiceClient::new(&config.api_base_url, config.request_timeout())
        .context("failed to create HTTP client")?;
    info!(
        api = %client.base_url(),
        timeout_ms = config.request_timeout_ms,
        "starting nyayasathi"
    );

    // Create app
    let mut app = App::new(&config, Services::http(client));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }
    info!("exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Windows는 Release 이벤트도 보낸다
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.modifiers, key.code);
                }
            }
        }

        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
