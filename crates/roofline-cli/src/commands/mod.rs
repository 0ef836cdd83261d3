pub mod config;
pub mod crawl;
pub mod crop;
pub mod detect;
