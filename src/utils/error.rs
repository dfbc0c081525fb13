use thiserror::Error;

#[derive(Error, Debug)]
pub enum NyayaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// 상태 코드를 받기 전에 실패 (연결 불가, 타임아웃 등)
    #[error("Network error: {0}")]
    Transport(String),

    /// 2xx 이외의 응답
    #[error("HTTP error! status: {status}")]
    Service { status: u16 },

    /// 응답 본문이 기대한 형식이 아님
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("Call to {number} failed: {reason}")]
    Dial { number: String, reason: String },
}

impl From<reqwest::Error> for NyayaError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            NyayaError::Service {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            NyayaError::Decode(err.to_string())
        } else {
            NyayaError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NyayaError {
    fn from(err: serde_json::Error) -> Self {
        NyayaError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NyayaError>;
