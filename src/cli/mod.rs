pub mod build;
pub mod completions;
pub mod init;
pub mod themes;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, Overrides};
use crate::error::Result;
use crate::types::PageSize;

/// cardpress - Trading card renderer and print sheet composer
#[derive(Parser, Debug)]
#[command(name = "cardpress")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a CSV deck into 3x3 card grids
    Build(build::BuildArgs),

    /// Check that a CSV deck loads and its artwork can be read
    Validate(validate::ValidateArgs),

    /// Initialize a deck directory (generates cardpress.yaml and theme.yaml)
    Init(init::InitArgs),

    /// List builtin themes
    Themes(themes::ThemesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that lay out cards.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Builtin theme name or path to a theme YAML file
    #[arg(long)]
    pub theme: Option<String>,

    /// Page size in pixels, e.g. 900x1200
    #[arg(long, value_name = "WxH")]
    pub page_size: Option<PageSize>,

    /// Font file to try before configured and system fonts (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// Config file (default: cardpress.yaml next to the deck, then in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl StyleArgs {
    /// Load the config for `deck` and apply these options over it.
    pub fn load_config(&self, deck: &Path, mut overrides: Overrides) -> Result<Config> {
        let deck_dir = deck.parent().unwrap_or_else(|| Path::new(""));
        let (config, _) = Config::discover(self.config.as_deref(), deck_dir)?;

        overrides.theme = self.theme.clone();
        overrides.page = self.page_size;
        overrides.fonts = self.fonts.clone();
        Ok(config.apply(overrides))
    }
}
