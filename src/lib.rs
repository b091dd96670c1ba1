pub mod board;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod insight;
pub mod logging;
pub mod models;
pub mod seed;
pub mod store;
pub mod view;

/// Banner shown when the interactive shell starts
pub const LOGO: &str = "\
  ┬  ┌─┐┌─┐┌┬┐┌┐ ┌─┐┌─┐┬─┐┌┬┐
  │  ├┤ ├─┤ ││├┴┐│ │├─┤├┬┘ ││
  ┴─┘└─┘┴ ┴─┴┘└─┘└─┘┴ ┴┴└──┴┘";
