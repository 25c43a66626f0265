//! Terminal front end for the storefront.
//!
//! A line-oriented REPL stands in for the browser page: it lists and searches the
//! catalog, and drives the cart store through a [`Terminal`] presenter.

pub mod config;
pub mod repl;
pub mod terminal;

pub use config::{Config, ConfigError};
pub use repl::{Command, CommandError, Flow};
pub use terminal::Terminal;
