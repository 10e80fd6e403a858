//! UI layer for desktop GUI: app shell and directory widgets.

pub mod app;
pub mod widgets;

pub use app::DirectoryApp;
