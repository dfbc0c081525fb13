// System Layer
pub mod api_client;
pub mod config;
pub mod dialer;
pub mod worker;

pub use api_client::{
    AdviceService, DirectoryService, HealthService, HttpServiceClient, ServiceHealth,
};
pub use config::AppConfig;
pub use dialer::{Dialer, SystemDialer};
pub use worker::PendingRequest;
