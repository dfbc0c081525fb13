// Data Models
pub mod advice;
pub mod directory;
pub mod directory_model;
pub mod operation;
pub mod query_model;
pub mod selection;
pub mod tab_controller;
pub mod text_input;
pub mod voice_capture;

pub use advice::{AdviceResponse, Query};
pub use directory::{ContactGroup, EmergencyContact, EmergencyDirectory, LegalAidCenter};
pub use directory_model::{DirectoryModel, LoadState};
pub use operation::{Operation, OperationError};
pub use query_model::{QueryModel, QueryRejection};
pub use selection::{CenterFilter, ListSelection};
pub use tab_controller::{TabController, ViewTab};
pub use text_input::TextInput;
pub use voice_capture::VoiceCapture;
