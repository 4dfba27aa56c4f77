pub mod app_root;
pub mod app_header;
pub mod app_logs;
