//! Tool configuration from `iconsmith.toml`.
//!
//! The file is optional. Every section and field has a default, and command
//! line flags override whatever the file says.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[sprite]`   | Sprite name, output location, collision policy  |
//! | `[theme]`    | Color token, stroke width, mask color           |
//! | `[dedup]`    | Folder duplicates are moved to                  |
//! | `[backdrop]` | Canvas size and icon placement                  |
//! | `[sort]`     | Stroked / fill-only folder names                |
//!
//! # Example
//!
//! ```toml
//! [sprite]
//! name = "hs-icons"
//! collision = "reject"
//!
//! [theme]
//! token = "var(--icon-color)"
//! ```

mod error;

pub use error::ConfigError;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    catalog::palette,
    cli::{Cli, Commands},
    log,
    svg::{
        geometry::{BackdropLayout, OutlineStyle},
        rewrite::{MaskPolicy, ThemePolicy},
        sprite::{CollisionPolicy, ComposeOptions},
    },
};

/// Config file looked up in the working directory when `-C` is not given.
pub const DEFAULT_CONFIG: &str = "iconsmith.toml";

// ============================================================================
// Sections
// ============================================================================

/// `[sprite]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Base name of `<name>.svg` and `<name>-config.json`.
    pub name: String,
    pub output_dir: PathBuf,
    /// Prefix of the sprite URL written into the metadata.
    pub url_prefix: String,
    pub collision: CollisionPolicy,
    /// Folder name (at any depth) whose files are backgrounds.
    pub background_dir: String,
    pub background_path_prefix: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            name: "icons".to_string(),
            output_dir: PathBuf::from("dist"),
            url_prefix: "./dist/".to_string(),
            collision: CollisionPolicy::default(),
            background_dir: "backgrounds".to_string(),
            background_path_prefix: "./svg/backgrounds/".to_string(),
        }
    }
}

/// `[theme]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// CSS color, custom property reference or palette token name.
    pub token: String,
    pub stroke_width: String,
    pub mask_color: String,
    pub output_dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            token: "currentColor".to_string(),
            stroke_width: "1.5".to_string(),
            mask_color: "black".to_string(),
            output_dir: PathBuf::from("themed"),
        }
    }
}

/// `[dedup]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub output_dir: PathBuf,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("duplicates"),
        }
    }
}

/// `[backdrop]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub icon_height: f64,
    pub anchor_x: f64,
    pub stroke: String,
    pub stroke_width: String,
    pub output_dir: PathBuf,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        let layout = BackdropLayout::default();
        Self {
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            icon_height: layout.icon_height,
            anchor_x: layout.anchor_x,
            stroke: layout.outline.color,
            stroke_width: layout.outline.width,
            output_dir: PathBuf::from("processed_backgrounds"),
        }
    }
}

/// `[sort]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub stroke_dir: String,
    pub fill_dir: String,
    pub output_dir: PathBuf,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            stroke_dir: "Has_Strokes".to_string(),
            fill_dir: "Fill_Only".to_string(),
            output_dir: PathBuf::from("sorted"),
        }
    }
}

// ============================================================================
// Root configuration
// ============================================================================

/// Root configuration structure representing iconsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sprite: SpriteConfig,
    pub theme: ThemeConfig,
    pub dedup: DedupConfig,
    pub backdrop: BackdropConfig,
    pub sort: SortConfig,
}

impl Config {
    /// Load configuration for a CLI invocation.
    ///
    /// A missing default file yields the defaults; a missing file named with
    /// `-C` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

        let mut config = if cli.config.is_some() || path.exists() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };

        config.apply_command_options(&cli.command);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warn"; "unknown fields in {} are ignored: {}", path.display(), ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Command line flags win over file values.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Sprite { args } => {
                if let Some(name) = &args.name {
                    self.sprite.name.clone_from(name);
                }
                if let Some(output) = &args.output {
                    self.sprite.output_dir.clone_from(output);
                }
                if let Some(collision) = args.collision {
                    self.sprite.collision = collision;
                }
            }
            Commands::Theme { args } => {
                if let Some(token) = &args.token {
                    self.theme.token.clone_from(token);
                }
                if let Some(width) = &args.stroke_width {
                    self.theme.stroke_width.clone_from(width);
                }
                if let Some(output) = &args.output {
                    self.theme.output_dir.clone_from(output);
                }
            }
            Commands::Sort { args } => {
                if let Some(output) = &args.output {
                    self.sort.output_dir.clone_from(output);
                }
            }
            Commands::Backdrop { args } => {
                if let Some(output) = &args.output {
                    self.backdrop.output_dir.clone_from(output);
                }
            }
            Commands::Dedup { .. } => {}
        }
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_empty = [
            ("sprite.name", self.sprite.name.as_str()),
            ("sprite.background_dir", self.sprite.background_dir.as_str()),
            ("theme.token", self.theme.token.as_str()),
            ("theme.stroke_width", self.theme.stroke_width.as_str()),
            ("theme.mask_color", self.theme.mask_color.as_str()),
            ("backdrop.stroke", self.backdrop.stroke.as_str()),
            ("backdrop.stroke_width", self.backdrop.stroke_width.as_str()),
            ("sort.stroke_dir", self.sort.stroke_dir.as_str()),
            ("sort.fill_dir", self.sort.fill_dir.as_str()),
        ];
        for (field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }
        if self.sprite.name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "sprite.name `{}` must be a file name, not a path",
                self.sprite.name
            )));
        }
        if self.sort.stroke_dir == self.sort.fill_dir {
            return Err(ConfigError::Validation(
                "sort.stroke_dir and sort.fill_dir must differ".to_string(),
            ));
        }

        let positive = [
            ("backdrop.canvas_width", self.backdrop.canvas_width),
            ("backdrop.canvas_height", self.backdrop.canvas_height),
            ("backdrop.icon_height", self.backdrop.icon_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Validation(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Policies handed to the core
    // ------------------------------------------------------------------------

    /// Theme policy, with palette token names resolved to their hex value.
    pub fn theme_policy(&self) -> ThemePolicy {
        let token = palette::lookup(&self.theme.token)
            .map_or_else(|| self.theme.token.clone(), str::to_string);
        ThemePolicy {
            token,
            stroke_width: self.theme.stroke_width.clone(),
        }
    }

    pub fn mask_policy(&self) -> MaskPolicy {
        MaskPolicy {
            color: self.theme.mask_color.clone(),
            stroke_width: self.theme.stroke_width.clone(),
        }
    }

    pub fn backdrop_layout(&self) -> BackdropLayout {
        BackdropLayout {
            canvas_width: self.backdrop.canvas_width,
            canvas_height: self.backdrop.canvas_height,
            icon_height: self.backdrop.icon_height,
            anchor_x: self.backdrop.anchor_x,
            outline: OutlineStyle {
                color: self.backdrop.stroke.clone(),
                width: self.backdrop.stroke_width.clone(),
            },
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            collision: self.sprite.collision,
            background_path_prefix: self.sprite.background_path_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sprite.name, "icons");
        assert_eq!(config.sprite.output_dir, PathBuf::from("dist"));
        assert_eq!(config.sprite.collision, CollisionPolicy::Suffix);
        assert_eq!(config.theme.token, "currentColor");
        assert_eq!(config.dedup.output_dir, PathBuf::from("duplicates"));
        assert_eq!(config.backdrop.canvas_width, 1920.0);
        assert_eq!(config.backdrop.stroke, "#000000");
        assert_eq!(config.sort.fill_dir, "Fill_Only");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_str(
            r#"
            [sprite]
            name = "hs-icons"
            collision = "shadow"

            [backdrop]
            canvas_width = 1280
            "#,
        )
        .unwrap();
        assert_eq!(config.sprite.name, "hs-icons");
        assert_eq!(config.sprite.collision, CollisionPolicy::Shadow);
        assert_eq!(config.sprite.url_prefix, "./dist/");
        assert_eq!(config.backdrop.canvas_width, 1280.0);
        assert_eq!(config.backdrop.canvas_height, 400.0);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_unknown_collision_policy_fails() {
        let result = Config::from_str("[sprite]\ncollision = \"merge\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) =
            Config::parse_with_ignored("[theme]\ntoken = \"red\"\ncolour = \"blue\"\n").unwrap();
        assert_eq!(config.theme.token, "red");
        assert_eq!(ignored, ["theme.colour"]);
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.theme.token = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(m)) if m.contains("theme.token")));

        let mut config = Config::default();
        config.backdrop.icon_height = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sprite.name = "a/b".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sort.fill_dir = config.sort.stroke_dir.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sprite]\nname = \"from-file\"\noutput_dir = \"out\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from(["iconsmith", "-C", path.as_str(), "sprite", "svg", "--name", "from-cli"]);
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.sprite.name, "from-cli");
        assert_eq!(config.sprite.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = Cli::parse_from(["iconsmith", "-C", missing.to_str().unwrap(), "sort", "x"]);
        let err = Config::load(&cli).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Io(..))));
    }

    #[test]
    fn test_palette_token_resolves() {
        let mut config = Config::default();
        config.theme.token = "icon-red".to_string();
        assert_eq!(config.theme_policy().token, "#ED1C24");

        config.theme.token = "var(--icon)".to_string();
        assert_eq!(config.theme_policy().token, "var(--icon)");
    }

    #[test]
    fn test_backdrop_layout_from_config() {
        let mut config = Config::default();
        config.backdrop.stroke = "#0072BC".to_string();
        let layout = config.backdrop_layout();
        assert_eq!(layout.outline.color, "#0072BC");
        assert_eq!(layout.anchor_x, 1440.0);
    }
}
