pub mod format;
pub mod modal;
pub mod notify;
