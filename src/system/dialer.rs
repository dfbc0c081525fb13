use crate::utils::error::{NyayaError, Result};
use std::process::{Command, Stdio};

/// 전화 걸기 (플랫폼 `tel:` 핸들러 호출)
pub trait Dialer {
    fn dial(&self, number: &str) -> Result<()>;
}

/// 전화번호를 `tel:` URI로 변환. 숫자, `+`, `-` 이외 문자는 제거한다.
pub fn tel_uri(number: &str) -> Option<String> {
    let cleaned: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect();
    if cleaned.chars().any(|c| c.is_ascii_digit()) {
        Some(format!("tel:{}", cleaned))
    } else {
        None
    }
}

/// OS 기본 핸들러로 `tel:` URI 열기.
///
/// 핸들러 출력은 캡처한다 (TUI 화면에 섞이지 않도록).
#[derive(Debug, Clone)]
pub struct SystemDialer {
    program: String,
    args: Vec<String>,
}

impl SystemDialer {
    pub fn new() -> Self {
        let (program, args) = platform_opener();
        Self::with_opener(program, args)
    }

    /// 지정한 명령으로 URI 열기 (URI는 마지막 인자로 붙는다)
    pub fn with_opener(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn command(&self, uri: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(uri).stdin(Stdio::null());
        cmd
    }
}

impl Default for SystemDialer {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

impl Dialer for SystemDialer {
    fn dial(&self, number: &str) -> Result<()> {
        let uri = tel_uri(number).ok_or_else(|| NyayaError::Dial {
            number: number.to_string(),
            reason: "not a phone number".to_string(),
        })?;

        tracing::info!(%uri, opener = %self.program, "initiating call");
        let output = self.command(&uri).output().map_err(|e| NyayaError::Dial {
            number: number.to_string(),
            reason: e.to_string(),
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::warn!(status = %output.status, %stderr, "call handler failed");
        let reason = if stderr.is_empty() {
            format!("handler exited with status {}", output.status)
        } else {
            stderr
        };
        Err(NyayaError::Dial {
            number: number.to_string(),
            reason,
        })
    }
}
