#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod model;
pub mod random;
pub mod scoring;
pub mod time;

pub use config::GameConfig;
pub use time::Clock;
