// UI Components
pub mod assistant_view;
pub mod command_bar;
pub mod dialog;
pub mod emergency_view;
pub mod header;
pub mod legal_aid_view;
pub mod status_bar;
pub mod tab_bar;
pub mod warning;

// Re-export components for convenience
pub use assistant_view::AssistantView;
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, DialogKind};
pub use emergency_view::EmergencyView;
pub use header::{Footer, Header};
pub use legal_aid_view::LegalAidView;
pub use status_bar::{ServiceStatus, StatusBar};
pub use tab_bar::TabBar;
pub use warning::WarningScreen;
