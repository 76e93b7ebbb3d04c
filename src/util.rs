#![allow(dead_code)]

use tracing::Level;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub fn init_log() {
    tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::INFO)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();
}
