pub mod board;
pub mod config;
pub mod insight;
pub mod shell;
