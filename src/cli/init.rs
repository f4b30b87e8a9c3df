//! Init command implementation.
//!
//! Writes a `cardpress.yaml` and an editable copy of a builtin theme.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{CardError, Result};
use crate::output::{display_path, Printer};
use crate::types::Theme;

/// File name of the generated theme.
pub const THEME_FILENAME: &str = "theme.yaml";

/// Initialize a deck directory
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Builtin theme to start from
    #[arg(long, default_value = "full-bleed")]
    pub theme: String,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let theme = Theme::builtin(&args.theme).ok_or_else(|| CardError::Config {
        message: format!("Unknown builtin theme `{}`", args.theme),
        help: Some(format!("Use one of: {}", Theme::BUILTIN.join(", "))),
    })?;

    let config_path = args.path.join(CONFIG_FILENAME);
    let theme_path = args.path.join(THEME_FILENAME);

    for path in [&config_path, &theme_path] {
        if path.exists() && !args.force {
            return Err(CardError::Build {
                message: format!("{} already exists", display_path(path)),
                help: Some("Use --force to overwrite".to_string()),
            });
        }
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| CardError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let config = Config {
        theme: THEME_FILENAME.to_string(),
        ..Default::default()
    };
    write(&config_path, &config.to_yaml()?)?;
    write(&theme_path, &theme.to_yaml()?)?;

    printer.status(
        "Created",
        &format!(
            "{} and {} (from {})",
            display_path(&config_path),
            display_path(&theme_path),
            args.theme
        ),
    );

    Ok(())
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
