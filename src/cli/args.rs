//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::svg::sprite::CollisionPolicy;

/// Icon asset toolkit: deduplicate, theme and merge SVG icons into sprites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: iconsmith.toml, optional)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge every icon under a directory tree into one sprite plus metadata
    #[command(visible_alias = "s")]
    Sprite {
        #[command(flatten)]
        args: SpriteArgs,
    },

    /// Move content-identical icons into a duplicates folder
    #[command(visible_alias = "d")]
    Dedup {
        #[command(flatten)]
        args: DedupArgs,
    },

    /// Rewrite fills and strokes so icons follow a color token
    #[command(visible_alias = "t")]
    Theme {
        #[command(flatten)]
        args: ThemeArgs,
    },

    /// Split icons into stroked and fill-only folders
    Sort {
        #[command(flatten)]
        args: SortArgs,
    },

    /// Place each icon on a wide outlined background canvas
    #[command(visible_alias = "b")]
    Backdrop {
        #[command(flatten)]
        args: BackdropArgs,
    },
}

/// Sprite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SpriteArgs {
    /// Directory to scan recursively; a `backgrounds` folder holds backgrounds
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    /// Sprite base name (writes `<name>.svg` and `<name>-config.json`)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// How to handle two icons deriving the same id (suffix, reject, shadow)
    #[arg(long, value_parser = parse_collision)]
    pub collision: Option<CollisionPolicy>,
}

/// Dedup command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DedupArgs {
    /// Directory holding the icons
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    /// Include subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Report duplicates without moving anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Rewrite mode of the theme command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Per value: white/none become `none`, colors become the token
    #[default]
    Theme,
    /// Per document: everything stroked, or everything filled
    Unified,
    /// Solid strokes for CSS mask images, no fixed size
    Mask,
    /// Fixed stroke width that ignores scaling
    NonScaling,
    /// Drop the root's fixed width/height, paint untouched
    Strip,
}

/// Theme command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ThemeArgs {
    /// Directory holding the icons
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value_t)]
    pub mode: ThemeMode,

    /// Color token, e.g. `currentColor`, `var(--icon)` or a palette name
    #[arg(short, long)]
    pub token: Option<String>,

    /// Stroke width forced on rewritten strokes
    #[arg(short = 'w', long)]
    pub stroke_width: Option<String>,

    /// Output directory (relative paths resolve against the input directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

/// Sort command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SortArgs {
    /// Directory holding the icons
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    /// Output directory (relative paths resolve against the input directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

/// Backdrop command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BackdropArgs {
    /// Directory holding the icons
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    /// Output directory (relative paths resolve against the input directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

fn parse_collision(value: &str) -> Result<CollisionPolicy, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sprite() {
        let cli = Cli::parse_from([
            "iconsmith", "sprite", "svg", "--name", "hs-icons", "--collision", "reject",
        ]);
        let Commands::Sprite { args } = cli.command else {
            panic!("expected sprite command");
        };
        assert_eq!(args.input, PathBuf::from("svg"));
        assert_eq!(args.name.as_deref(), Some("hs-icons"));
        assert_eq!(args.collision, Some(CollisionPolicy::Reject));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_theme_mode() {
        let cli = Cli::parse_from(["iconsmith", "-v", "theme", "icons", "-m", "non-scaling"]);
        let Commands::Theme { args } = cli.command else {
            panic!("expected theme command");
        };
        assert_eq!(args.mode, ThemeMode::NonScaling);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["iconsmith", "theme", "icons", "--mode", "strip"]);
        let Commands::Theme { args } = cli.command else {
            panic!("expected theme command");
        };
        assert_eq!(args.mode, ThemeMode::Strip);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["iconsmith", "dedup", ".", "-r", "-C", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        let Commands::Dedup { args } = cli.command else {
            panic!("expected dedup command");
        };
        assert!(args.recursive);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_bad_collision_policy_is_rejected() {
        let result = Cli::try_parse_from(["iconsmith", "sprite", "svg", "--collision", "merge"]);
        assert!(result.is_err());
    }
}
