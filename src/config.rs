//! Project configuration (cardpress.yaml) parsing.
//!
//! The config file sets defaults for a deck directory: output location,
//! theme, page size and font search paths. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::font::{default_candidates, scan_font_dirs};
use crate::types::{PageSize, Theme};

/// File name looked up next to the deck and in the working directory.
pub const CONFIG_FILENAME: &str = "cardpress.yaml";

/// Project configuration loaded from cardpress.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory for page images.
    pub output: PathBuf,

    /// Builtin theme name or path to a theme YAML file.
    pub theme: String,

    /// Page file prefix: `<prefix>_<n>.png`.
    pub prefix: String,

    /// Page size, overriding the theme's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSize>,

    /// Font files to try, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<PathBuf>,

    /// Directories scanned for .ttf/.otf files after `fonts`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub font_dirs: Vec<PathBuf>,

    /// Abort on the first card that fails to render.
    pub strict: bool,

    /// Also write `<prefix>.json` describing every page.
    pub manifest: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            theme: "full-bleed".to_string(),
            prefix: "card_grid".to_string(),
            page: None,
            fonts: vec![],
            font_dirs: vec![],
            strict: false,
            manifest: false,
        }
    }
}

/// Values given on the command line. `None`/empty leaves the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub theme: Option<String>,
    pub page: Option<PageSize>,
    pub fonts: Vec<PathBuf>,
    pub prefix: Option<String>,
    pub strict: bool,
    pub manifest: bool,
}

impl Config {
    /// Load config from a cardpress.yaml file.
    ///
    /// Relative paths in the file resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let config = Self::parse(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CardError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Find and load the config for a deck.
    ///
    /// An explicit path must exist. Otherwise cardpress.yaml is looked up
    /// next to the deck, then in the working directory; no file gives the
    /// defaults.
    pub fn discover(explicit: Option<&Path>, deck_dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for dir in [deck_dir, Path::new(".")] {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                log::debug!("using config {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Apply command-line overrides.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(page) = overrides.page {
            self.page = Some(page);
        }
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if !overrides.fonts.is_empty() {
            let mut fonts = overrides.fonts;
            fonts.append(&mut self.fonts);
            self.fonts = fonts;
        }
        self.strict |= overrides.strict;
        self.manifest |= overrides.manifest;
        self
    }

    /// Resolve the configured theme, with the page size override applied.
    pub fn resolve_theme(&self) -> Result<Theme> {
        let theme = resolve_theme(&self.theme)?;
        let theme = match self.page {
            Some(page) => theme.with_page(page),
            None => theme,
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Font files to try, in priority order.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = self.fonts.clone();
        candidates.extend(scan_font_dirs(&self.font_dirs));
        candidates.extend(default_candidates());
        candidates
    }

    /// Serialise to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| CardError::Config {
            message: format!("Failed to serialise config: {}", e),
            help: None,
        })
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };

        self.output = join(&self.output);
        self.fonts = self.fonts.iter().map(join).collect();
        self.font_dirs = self.font_dirs.iter().map(join).collect();
        if Theme::builtin(&self.theme).is_none() {
            self.theme = join(&PathBuf::from(&self.theme)).to_string_lossy().into_owned();
        }
        self
    }
}

/// A builtin theme by name, or a theme YAML file by path.
pub fn resolve_theme(name_or_path: &str) -> Result<Theme> {
    if let Some(theme) = Theme::builtin(name_or_path) {
        return Ok(theme);
    }

    let path = Path::new(name_or_path);
    if path.is_file() {
        return Theme::load(path);
    }

    Err(CardError::Config {
        message: format!("Unknown theme `{}`", name_or_path),
        help: Some(format!(
            "Use one of: {}, or a path to a theme YAML file",
            Theme::BUILTIN.join(", ")
        )),
    })
}
