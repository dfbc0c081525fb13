pub(super) mod assistant_controller;
pub(super) mod list_controller;
