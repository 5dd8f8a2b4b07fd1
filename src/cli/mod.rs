//! Command-line interface module.

mod args;
pub mod backdrop;
pub mod common;
pub mod dedup;
pub mod sort;
pub mod sprite;
pub mod theme;

pub use args::{Cli, Commands};
