pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod memory;
pub mod reader;
pub mod services;
pub mod types;
pub mod utils;
pub mod view;
pub mod writer;

#[cfg(test)]
mod testing;
