//! Iconsmith - normalize, deduplicate, theme and merge SVG icon sets.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod logger;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Sprite { args } => cli::sprite::run_sprite(args, &config),
        Commands::Dedup { args } => cli::dedup::run_dedup(args, &config),
        Commands::Theme { args } => cli::theme::run_theme(args, &config),
        Commands::Sort { args } => cli::sort::run_sort(args, &config),
        Commands::Backdrop { args } => cli::backdrop::run_backdrop(args, &config),
    }
}
