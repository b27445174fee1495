pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod ops;
pub mod platform;
pub mod resolve;
