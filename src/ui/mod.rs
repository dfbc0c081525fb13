// UI Layer
pub mod components;
pub mod i18n;
pub mod layout;
pub mod theme;

pub use i18n::{I18n, Language, LocalizationProvider, MessageKey, TextKey};
pub use layout::LayoutManager;
pub use theme::Theme;
