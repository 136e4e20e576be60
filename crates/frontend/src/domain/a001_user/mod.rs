//! a001 User: список пользователей из внешнего хранилища

pub mod api;
pub mod demo_data;
pub mod format;
pub mod hooks;
pub mod ui;
